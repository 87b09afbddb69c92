use std::collections::BTreeSet;

use jobdesk_logging::{jobdesk_debug, jobdesk_warn};

use crate::{JobId, StorageError};

pub type BookmarkSet = BTreeSet<JobId>;

/// Durable key-value storage for the bookmarked id set.
pub trait BookmarkBackend {
    fn read_set(&self) -> Result<BookmarkSet, StorageError>;
    fn write_set(&mut self, ids: &BookmarkSet) -> Result<(), StorageError>;
}

/// In-memory backend. Used by tests and as a stand-in when no durable
/// location is configured.
#[derive(Debug, Clone, Default)]
pub struct MemoryBookmarks {
    stored: BookmarkSet,
    fail_writes: bool,
}

impl MemoryBookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids(ids: impl IntoIterator<Item = JobId>) -> Self {
        Self {
            stored: ids.into_iter().collect(),
            fail_writes: false,
        }
    }

    /// Make every subsequent write fail, to exercise storage failures.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn stored(&self) -> &BookmarkSet {
        &self.stored
    }
}

impl BookmarkBackend for MemoryBookmarks {
    fn read_set(&self) -> Result<BookmarkSet, StorageError> {
        Ok(self.stored.clone())
    }

    fn write_set(&mut self, ids: &BookmarkSet) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write("memory backend rejects writes".into()));
        }
        self.stored = ids.clone();
        Ok(())
    }
}

/// Bookmarked ids, independent of whatever the current search shows.
///
/// Writes go through to the backend before `toggle` returns. A failed write
/// keeps the in-memory change and reports the error to the caller.
///
/// A store whose saved set could not be read never writes: the backend may
/// still hold bookmarks from earlier sessions. Each `toggle` retries the read
/// first and only proceeds once it succeeds.
#[derive(Debug)]
pub struct BookmarkStore<B> {
    backend: B,
    ids: BookmarkSet,
    loaded: bool,
}

impl<B: BookmarkBackend> BookmarkStore<B> {
    pub fn open(backend: B) -> Result<Self, StorageError> {
        let ids = backend.read_set()?;
        jobdesk_debug!("loaded {} bookmarks", ids.len());
        Ok(Self {
            backend,
            ids,
            loaded: true,
        })
    }

    /// Store over a backend whose read failed. Lists nothing and refuses
    /// writes until a later read succeeds.
    pub fn unloaded(backend: B) -> Self {
        Self {
            backend,
            ids: BookmarkSet::new(),
            loaded: false,
        }
    }

    /// Whether the saved set has been read.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Flip membership of `id`; returns whether it is now bookmarked.
    pub fn toggle(&mut self, id: JobId) -> Result<bool, StorageError> {
        self.ensure_loaded()?;
        let bookmarked = if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        };
        if let Err(err) = self.backend.write_set(&self.ids) {
            jobdesk_warn!("bookmark {} toggled in memory only: {}", id, err);
            return Err(err);
        }
        Ok(bookmarked)
    }

    fn ensure_loaded(&mut self) -> Result<(), StorageError> {
        if self.loaded {
            return Ok(());
        }
        match self.backend.read_set() {
            Ok(ids) => {
                jobdesk_debug!("loaded {} bookmarks on retry", ids.len());
                self.ids = ids;
                self.loaded = true;
                Ok(())
            }
            Err(StorageError::Read(reason) | StorageError::Write(reason)) => {
                jobdesk_warn!("saved bookmarks still unreadable: {}", reason);
                Err(StorageError::Write(format!(
                    "saved bookmarks unreadable, not overwriting them: {reason}"
                )))
            }
        }
    }

    pub fn contains(&self, id: JobId) -> bool {
        self.ids.contains(&id)
    }

    /// Ascending ids. Each call starts a new pass over the set.
    pub fn list(&self) -> impl Iterator<Item = JobId> + '_ {
        self.ids.iter().copied()
    }

    pub fn ids(&self) -> &BookmarkSet {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
