use thiserror::Error;

use crate::JobId;

/// Failure reported by the remote job source.
///
/// Stored inside cache entries, so it is cheap to clone and comparable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("request timed out")]
    Timeout,
    #[error("malformed payload: {0}")]
    Malformed(String),
    #[error("job {0} not found")]
    NotFound(JobId),
}

impl SourceError {
    /// True for the transport/response family of failures, as opposed to a
    /// missing item.
    pub fn is_network_failure(&self) -> bool {
        !matches!(self, SourceError::NotFound(_))
    }
}

/// Failure of the durable bookmark store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("failed to read bookmarks: {0}")]
    Read(String),
    #[error("failed to write bookmarks: {0}")]
    Write(String),
}
