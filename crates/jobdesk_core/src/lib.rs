//! Jobdesk core: query normalization, fetch cache, debounce, derived views and
//! the pure search state machine. No IO happens here.
mod bookmarks;
mod cache;
mod debounce;
mod effect;
mod error;
mod job;
mod msg;
mod paginate;
mod params;
mod query;
mod selection;
mod sort;
mod state;
mod update;
mod view_model;

pub use bookmarks::{BookmarkBackend, BookmarkSet, BookmarkStore, MemoryBookmarks};
pub use cache::{CacheEntry, CacheStatus, FetchCache, RequestId, Requested, Resolution};
pub use debounce::{DebounceTicket, Debouncer, DEBOUNCE_DELAY};
pub use effect::Effect;
pub use error::{SourceError, StorageError};
pub use job::{JobDetail, JobId, JobItem};
pub use msg::Msg;
pub use paginate::{paginate, total_pages, Page, PageState, RESULTS_PER_PAGE};
pub use params::SearchParams;
pub use query::{normalize_query, SearchQuery};
pub use selection::Selection;
pub use sort::{sort_items, SortKey};
pub use state::{AppState, SearchSnapshot, SearchStatus};
pub use update::update;
pub use view_model::{ActiveJobView, AppViewModel, BookmarkRowView, JobRowView};
