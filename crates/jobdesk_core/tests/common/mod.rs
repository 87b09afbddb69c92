#![allow(dead_code)]

use std::sync::Once;

use jobdesk_core::{
    normalize_query, update, AppState, Effect, JobDetail, JobId, JobItem, Msg, RequestId,
    SearchQuery,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(jobdesk_logging::initialize_for_tests);
}

pub fn job(id: JobId, title: &str, relevance_score: u32, days_ago: u32) -> JobItem {
    JobItem {
        id,
        title: title.to_string(),
        company: format!("Company {id}"),
        badge_letters: title.chars().take(2).collect::<String>().to_uppercase(),
        relevance_score,
        days_ago,
    }
}

pub fn jobs(count: u64) -> Vec<JobItem> {
    (1..=count)
        .map(|id| job(id, &format!("Job {id:02}"), 100 - id as u32, id as u32))
        .collect()
}

pub fn detail(item: JobItem) -> JobDetail {
    JobDetail {
        description: format!("About {}", item.title),
        qualifications: vec!["Rust".to_string()],
        reviews: Vec::new(),
        duration: "Full-Time".to_string(),
        salary: "$100,000+".to_string(),
        location: "Remote".to_string(),
        cover_img_url: String::new(),
        company_url: String::new(),
        item,
    }
}

pub fn query(raw: &str) -> SearchQuery {
    normalize_query(raw)
}

/// Type `raw` and let its debounce timer elapse.
pub fn search(state: AppState, raw: &str) -> (AppState, Vec<Effect>) {
    let (state, effects) = update(state, Msg::SearchTextChanged(raw.to_string()));
    let ticket = match effects.as_slice() {
        [Effect::StartDebounce { ticket, .. }] => *ticket,
        other => panic!("expected one debounce effect, got {other:?}"),
    };
    update(state, Msg::DebounceElapsed { ticket })
}

pub fn fetch_request(effects: &[Effect]) -> (SearchQuery, RequestId) {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchJobs { query, request_id } => Some((query.clone(), *request_id)),
            _ => None,
        })
        .expect("fetch effect")
}

/// Search and answer the fetch with `items`.
pub fn search_loaded(state: AppState, raw: &str, items: Vec<JobItem>) -> AppState {
    let (state, effects) = search(state, raw);
    let (query, request_id) = fetch_request(&effects);
    let (state, _) = update(
        state,
        Msg::JobsLoaded {
            query,
            request_id,
            result: Ok(items),
        },
    );
    state
}
