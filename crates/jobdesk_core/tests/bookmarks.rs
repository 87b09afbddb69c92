mod common;

use std::cell::Cell;

use common::*;
use jobdesk_core::{
    update, AppState, BookmarkBackend, BookmarkSet, BookmarkStore, MemoryBookmarks, Msg,
    StorageError,
};

#[test]
fn toggle_twice_restores_membership() {
    init_logging();
    let mut store = BookmarkStore::open(MemoryBookmarks::new()).unwrap();
    assert!(!store.contains(7));
    assert_eq!(store.toggle(7), Ok(true));
    assert!(store.contains(7));
    assert_eq!(store.toggle(7), Ok(false));
    assert!(!store.contains(7));
    assert!(store.is_empty());
}

#[test]
fn writes_reach_the_backend_before_toggle_returns() {
    let mut store = BookmarkStore::open(MemoryBookmarks::with_ids([1])).unwrap();
    assert!(store.contains(1));
    store.toggle(5).unwrap();
    let expected: BookmarkSet = [1, 5].into_iter().collect();
    assert_eq!(store.backend().stored(), &expected);
    assert_eq!(store.backend().read_set().unwrap(), expected);
}

#[test]
fn list_is_restartable() {
    let store = BookmarkStore::open(MemoryBookmarks::with_ids([9, 2, 4])).unwrap();
    let first: Vec<_> = store.list().collect();
    let second: Vec<_> = store.list().collect();
    assert_eq!(first, vec![2, 4, 9]);
    assert_eq!(first, second);
    assert_eq!(store.len(), 3);
}

#[test]
fn failed_write_is_reported_and_kept_in_memory() {
    init_logging();
    let mut backend = MemoryBookmarks::new();
    backend.fail_writes(true);
    let mut store = BookmarkStore::open(backend).unwrap();

    let result = store.toggle(3);
    assert!(matches!(result, Err(StorageError::Write(_))));
    assert!(store.contains(3));
    assert!(store.backend().stored().is_empty());
}

/// Fails the first `failed_reads` reads, then serves `stored`.
#[derive(Debug)]
struct FlakyBackend {
    failed_reads: Cell<u32>,
    stored: MemoryBookmarks,
    writes: u32,
}

impl FlakyBackend {
    fn new(failed_reads: u32, ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            failed_reads: Cell::new(failed_reads),
            stored: MemoryBookmarks::with_ids(ids),
            writes: 0,
        }
    }
}

impl BookmarkBackend for FlakyBackend {
    fn read_set(&self) -> Result<BookmarkSet, StorageError> {
        let left = self.failed_reads.get();
        if left > 0 {
            self.failed_reads.set(left - 1);
            return Err(StorageError::Read("disk on fire".into()));
        }
        self.stored.read_set()
    }

    fn write_set(&mut self, ids: &BookmarkSet) -> Result<(), StorageError> {
        self.writes += 1;
        self.stored.write_set(ids)
    }
}

#[test]
fn unreadable_store_refuses_to_overwrite_saved_bookmarks() {
    init_logging();
    let err = BookmarkStore::open(FlakyBackend::new(2, [1, 2, 3])).unwrap_err();
    assert_eq!(err.to_string(), "failed to read bookmarks: disk on fire");

    let mut store = BookmarkStore::unloaded(FlakyBackend::new(1, [1, 2, 3]));
    assert!(!store.is_loaded());
    assert!(matches!(store.toggle(9), Err(StorageError::Write(_))));
    assert!(!store.contains(9));
    assert_eq!(store.backend().writes, 0);
    assert_eq!(store.backend().stored.stored().len(), 3);
}

#[test]
fn unloaded_store_recovers_once_a_read_succeeds() {
    let mut store = BookmarkStore::unloaded(FlakyBackend::new(0, [1, 2, 3]));
    assert_eq!(store.toggle(9), Ok(true));
    assert!(store.is_loaded());

    let expected: BookmarkSet = [1, 2, 3, 9].into_iter().collect();
    assert_eq!(store.ids(), &expected);
    assert_eq!(store.backend().stored.stored(), &expected);
}

#[test]
fn bookmark_survives_searches_that_exclude_it() {
    init_logging();
    let mut store = BookmarkStore::open(MemoryBookmarks::new()).unwrap();
    let state = search_loaded(AppState::new(), "staff", vec![job(42, "Staff", 80, 1)]);
    store.toggle(42).unwrap();
    assert!(state.view(store.ids()).rows[0].bookmarked);

    let state = search_loaded(state, "junior", jobs(3));
    assert!(store.contains(42));
    let view = state.view(store.ids());
    assert!(view.rows.iter().all(|row| row.id != 42 && !row.bookmarked));
    assert_eq!(view.bookmarks.len(), 1);
    assert_eq!(view.bookmarks[0].id, 42);

    let (_, effects) = update(state, Msg::BookmarksOpened(store.list().collect()));
    assert_eq!(effects.len(), 1);
}
