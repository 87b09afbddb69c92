use std::time::Duration;

use jobdesk_logging::jobdesk_debug;

use crate::cache::{CacheStatus, FetchCache, RequestId, Requested, Resolution};
use crate::debounce::{DebounceTicket, Debouncer};
use crate::{
    normalize_query, paginate, sort_items, Effect, JobDetail, JobId, JobItem, PageState,
    SearchParams, SearchQuery, Selection, SortKey, SourceError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// No query has settled yet.
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Search read model: what the list shows right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSnapshot<'a> {
    pub status: SearchStatus,
    /// Fetch order. While loading or after a failure these are the last
    /// successfully shown results.
    pub items: &'a [JobItem],
    pub is_loading: bool,
    pub error: Option<&'a SourceError>,
}

/// Owner of the search text, both fetch caches and the derived-view inputs.
///
/// Only [`crate::update`] mutates it, so every cache write has one writer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    search_text: String,
    debouncer: Debouncer<SearchQuery>,
    jobs: FetchCache<SearchQuery, Vec<JobItem>>,
    details: FetchCache<JobId, JobDetail>,
    active_query: Option<SearchQuery>,
    shown_query: Option<SearchQuery>,
    reset_page_on_success: bool,
    sort_key: SortKey,
    page: PageState,
    selection: Selection,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debounce_delay(delay: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(delay),
            ..Self::default()
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// The last settled query; `None` until the first settle.
    pub fn active_query(&self) -> Option<&SearchQuery> {
        self.active_query.as_ref()
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn jobs_cache(&self) -> &FetchCache<SearchQuery, Vec<JobItem>> {
        &self.jobs
    }

    pub fn details_cache(&self) -> &FetchCache<JobId, JobDetail> {
        &self.details
    }

    pub fn search(&self) -> SearchSnapshot<'_> {
        let Some(query) = &self.active_query else {
            return SearchSnapshot {
                status: SearchStatus::Idle,
                items: &[],
                is_loading: false,
                error: None,
            };
        };

        let shown = self.shown_items();
        match self.jobs.peek(query) {
            Some(entry) => match entry.status {
                CacheStatus::Pending => SearchSnapshot {
                    status: SearchStatus::Loading,
                    items: shown,
                    is_loading: true,
                    error: None,
                },
                CacheStatus::Success => SearchSnapshot {
                    status: SearchStatus::Ready,
                    items: entry.data.as_deref().unwrap_or_default(),
                    is_loading: false,
                    error: None,
                },
                CacheStatus::Error => SearchSnapshot {
                    status: SearchStatus::Failed,
                    items: shown,
                    is_loading: false,
                    error: entry.error.as_ref(),
                },
                CacheStatus::Idle => SearchSnapshot {
                    status: SearchStatus::Idle,
                    items: shown,
                    is_loading: false,
                    error: None,
                },
            },
            None => SearchSnapshot {
                status: SearchStatus::Idle,
                items: shown,
                is_loading: false,
                error: None,
            },
        }
    }

    /// Current results in the selected order.
    pub fn sorted_items(&self) -> Vec<JobItem> {
        sort_items(self.search().items, self.sort_key)
    }

    pub fn params(&self) -> SearchParams {
        SearchParams {
            search: self.search_text.clone(),
            sort: self.sort_key,
            page: self.page.page_number,
            active_id: self.selection.active_id(),
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn set_search_text(&mut self, raw: String) -> Effect {
        let query = normalize_query(&raw);
        self.search_text = raw;
        self.mark_dirty();
        let ticket = self.debouncer.notify(query);
        Effect::StartDebounce {
            ticket,
            delay: self.debouncer.delay(),
        }
    }

    pub(crate) fn settle(&mut self, ticket: DebounceTicket) -> Vec<Effect> {
        match self.debouncer.settle(ticket) {
            Some(query) => self.submit_query(query),
            None => {
                jobdesk_debug!("ignoring stale debounce ticket {}", ticket);
                Vec::new()
            }
        }
    }

    pub(crate) fn submit_query(&mut self, query: SearchQuery) -> Vec<Effect> {
        if self.active_query.as_ref() != Some(&query) {
            self.reset_page_on_success = true;
        }
        self.active_query = Some(query.clone());
        self.mark_dirty();

        let effects = if query.is_empty() {
            // The empty query lists nothing and never reaches the network.
            self.jobs.seed(query, Vec::new());
            Vec::new()
        } else {
            match self.jobs.request(query.clone()) {
                Requested::Issue(request_id) => vec![Effect::FetchJobs { query, request_id }],
                Requested::InFlight(_) => Vec::new(),
                Requested::Hit(_) => {
                    jobdesk_debug!("cache hit for query {:?}", query.as_str());
                    Vec::new()
                }
            }
        };
        self.observe_active();
        effects
    }

    pub(crate) fn apply_jobs(
        &mut self,
        query: SearchQuery,
        request_id: RequestId,
        result: Result<Vec<JobItem>, SourceError>,
    ) {
        if self.jobs.resolve(&query, request_id, result) == Resolution::Stale {
            return;
        }
        if self.active_query.as_ref() == Some(&query) {
            self.observe_active();
            self.mark_dirty();
        }
    }

    pub(crate) fn retry(&mut self) -> Vec<Effect> {
        let Some(query) = self.active_query.clone() else {
            return Vec::new();
        };
        if self.jobs.status(&query) != CacheStatus::Error {
            return Vec::new();
        }
        self.submit_query(query)
    }

    pub(crate) fn set_sort(&mut self, key: SortKey) {
        if self.sort_key != key {
            self.sort_key = key;
            self.page = self.page.with_page(1);
            self.mark_dirty();
        }
    }

    pub(crate) fn set_page(&mut self, page_number: usize) {
        let next = self.page.with_page(page_number);
        if next != self.page {
            self.page = next;
            self.mark_dirty();
        }
    }

    /// Step relative to the page actually shown, staying within range.
    pub(crate) fn step_page(&mut self, forward: bool) {
        let items = self.search().items;
        let shown = paginate(items, self.page);
        let target = if forward {
            (shown.page_number + 1).min(shown.total_pages)
        } else {
            shown.page_number.saturating_sub(1).max(1)
        };
        self.set_page(target);
    }

    pub(crate) fn select(&mut self, id: Option<JobId>) -> Vec<Effect> {
        if self.selection.active_id() != id {
            self.selection.select(id);
            self.mark_dirty();
        }
        match id {
            Some(id) => self.request_detail(id).into_iter().collect(),
            None => Vec::new(),
        }
    }

    pub(crate) fn request_details(&mut self, ids: Vec<JobId>) -> Vec<Effect> {
        self.mark_dirty();
        ids.into_iter()
            .filter_map(|id| self.request_detail(id))
            .collect()
    }

    pub(crate) fn apply_detail(
        &mut self,
        id: JobId,
        request_id: RequestId,
        result: Result<JobDetail, SourceError>,
    ) {
        if self.details.resolve(&id, request_id, result) == Resolution::Applied {
            self.mark_dirty();
        }
    }

    /// Apply named parameters: the search settles at once, without debounce,
    /// and the restored page survives the search's results arriving.
    pub(crate) fn restore(&mut self, params: SearchParams) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.debouncer.cancel().is_some() {
            effects.push(Effect::CancelDebounce);
        }
        let query = normalize_query(&params.search);
        self.search_text = params.search;
        effects.extend(self.submit_query(query));
        self.reset_page_on_success = false;
        self.sort_key = params.sort;
        self.page = self.page.with_page(params.page);
        effects.extend(self.select(params.active_id));
        self.mark_dirty();
        effects
    }

    fn request_detail(&mut self, id: JobId) -> Option<Effect> {
        match self.details.request(id) {
            Requested::Issue(request_id) => Some(Effect::FetchDetail { id, request_id }),
            Requested::InFlight(_) | Requested::Hit(_) => None,
        }
    }

    /// Record that the active query's results are on screen, resetting the
    /// page the first time a new search succeeds.
    fn observe_active(&mut self) {
        let Some(query) = &self.active_query else {
            return;
        };
        if self.jobs.status(query) != CacheStatus::Success {
            return;
        }
        self.shown_query = Some(query.clone());
        if std::mem::take(&mut self.reset_page_on_success) {
            self.page = self.page.with_page(1);
        }
    }

    fn shown_items(&self) -> &[JobItem] {
        self.shown_query
            .as_ref()
            .and_then(|query| self.jobs.peek(query))
            .and_then(|entry| entry.data.as_deref())
            .unwrap_or_default()
    }
}
