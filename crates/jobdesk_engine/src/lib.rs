//! Jobdesk engine: remote job source, timers and durable storage.
mod debounce;
mod decode;
mod engine;
mod fetch;
mod persist;
mod types;

pub use debounce::DebounceTimer;
pub use decode::{decode_job_detail, decode_job_list};
pub use engine::EngineHandle;
pub use fetch::{JobSource, ReqwestJobSource, SourceSettings, DEFAULT_BASE_URL};
pub use persist::{
    ensure_data_dir, AtomicFileWriter, JsonBookmarkFile, PersistError, BOOKMARKS_FILENAME,
};
pub use types::EngineEvent;
