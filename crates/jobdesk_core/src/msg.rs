use crate::cache::RequestId;
use crate::debounce::DebounceTicket;
use crate::{JobDetail, JobId, JobItem, SearchParams, SearchQuery, SortKey, SourceError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search box (raw, not yet debounced).
    SearchTextChanged(String),
    /// A debounce timer elapsed without being cancelled.
    DebounceElapsed { ticket: DebounceTicket },
    /// Remote source answered a list request.
    JobsLoaded {
        query: SearchQuery,
        request_id: RequestId,
        result: Result<Vec<JobItem>, SourceError>,
    },
    /// User asked to retry a failed search.
    RetryClicked,
    SortChanged(SortKey),
    /// User jumped to a page (1-indexed).
    PageChanged(usize),
    NextPage,
    PreviousPage,
    /// User opened a job in the detail view, or closed it with `None`.
    JobSelected(Option<JobId>),
    /// Remote source answered a detail request.
    DetailLoaded {
        id: JobId,
        request_id: RequestId,
        result: Result<JobDetail, SourceError>,
    },
    /// User opened the bookmarks view; carries the bookmarked ids.
    BookmarksOpened(Vec<JobId>),
    /// Named parameters read from a location or a saved session.
    ParamsRestored(SearchParams),
}
