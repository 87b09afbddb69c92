use crate::cache::CacheStatus;
use crate::{
    paginate, AppState, BookmarkSet, JobDetail, JobId, JobItem, SearchStatus, SortKey,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub search_text: String,
    pub status: SearchStatus,
    pub is_loading: bool,
    pub error: Option<String>,
    pub result_count: usize,
    pub sort_key: SortKey,
    /// Effective (clamped) page.
    pub page_number: usize,
    pub total_pages: usize,
    pub rows: Vec<JobRowView>,
    pub active: Option<ActiveJobView>,
    pub bookmarks: Vec<BookmarkRowView>,
    /// Named parameters, form-urlencoded.
    pub params: String,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub badge_letters: String,
    pub days_ago: u32,
    pub bookmarked: bool,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveJobView {
    pub id: JobId,
    /// Summary from the current results, when the job is among them.
    pub item: Option<JobItem>,
    pub detail: Option<JobDetail>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub bookmarked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkRowView {
    pub id: JobId,
    /// `None` until the job's detail has been fetched and it is not among the
    /// current results.
    pub title: Option<String>,
    pub company: Option<String>,
    pub is_loading: bool,
}

impl AppState {
    pub fn view(&self, bookmarks: &BookmarkSet) -> AppViewModel {
        let search = self.search();
        let sorted = self.sorted_items();
        let page = paginate(&sorted, self.page_state());
        let active_id = self.selection().active_id();

        let rows = page
            .visible
            .iter()
            .map(|item| JobRowView {
                id: item.id,
                title: item.title.clone(),
                company: item.company.clone(),
                badge_letters: item.badge_letters.clone(),
                days_ago: item.days_ago,
                bookmarked: bookmarks.contains(&item.id),
                active: active_id == Some(item.id),
            })
            .collect();

        let active = active_id.map(|id| {
            let entry = self.details_cache().peek(&id);
            ActiveJobView {
                id,
                item: self.selection().active_item(search.items).cloned(),
                detail: entry.and_then(|entry| entry.data.clone()),
                is_loading: entry.is_some_and(|entry| entry.status == CacheStatus::Pending),
                error: entry
                    .and_then(|entry| entry.error.as_ref())
                    .map(ToString::to_string),
                bookmarked: bookmarks.contains(&id),
            }
        });

        let bookmark_rows = bookmarks
            .iter()
            .map(|&id| self.bookmark_row(id, search.items))
            .collect();

        AppViewModel {
            search_text: self.search_text().to_string(),
            status: search.status,
            is_loading: search.is_loading,
            error: search.error.map(ToString::to_string),
            result_count: search.items.len(),
            sort_key: self.sort_key(),
            page_number: page.page_number,
            total_pages: page.total_pages,
            rows,
            active,
            bookmarks: bookmark_rows,
            params: self.params().to_query_string(),
            dirty: self.is_dirty(),
        }
    }

    fn bookmark_row(&self, id: JobId, items: &[JobItem]) -> BookmarkRowView {
        let entry = self.details_cache().peek(&id);
        let known = items
            .iter()
            .find(|item| item.id == id)
            .or_else(|| entry.and_then(|entry| entry.data.as_ref()).map(|d| &d.item));
        BookmarkRowView {
            id,
            title: known.map(|item| item.title.clone()),
            company: known.map(|item| item.company.clone()),
            is_loading: entry.is_some_and(|entry| entry.status == CacheStatus::Pending),
        }
    }
}
