use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SearchTextChanged(raw) => vec![state.set_search_text(raw)],
        Msg::DebounceElapsed { ticket } => state.settle(ticket),
        Msg::JobsLoaded {
            query,
            request_id,
            result,
        } => {
            state.apply_jobs(query, request_id, result);
            Vec::new()
        }
        Msg::RetryClicked => state.retry(),
        Msg::SortChanged(key) => {
            state.set_sort(key);
            Vec::new()
        }
        Msg::PageChanged(page_number) => {
            state.set_page(page_number);
            Vec::new()
        }
        Msg::NextPage => {
            state.step_page(true);
            Vec::new()
        }
        Msg::PreviousPage => {
            state.step_page(false);
            Vec::new()
        }
        Msg::JobSelected(id) => state.select(id),
        Msg::DetailLoaded {
            id,
            request_id,
            result,
        } => {
            state.apply_detail(id, request_id, result);
            Vec::new()
        }
        Msg::BookmarksOpened(ids) => state.request_details(ids),
        Msg::ParamsRestored(params) => state.restore(params),
    };

    (state, effects)
}
