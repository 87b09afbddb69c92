use std::fs;

use jobdesk_core::{BookmarkBackend, BookmarkSet, BookmarkStore, StorageError};
use jobdesk_engine::{ensure_data_dir, AtomicFileWriter, JsonBookmarkFile, BOOKMARKS_FILENAME};
use tempfile::TempDir;

#[test]
fn creates_missing_data_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("data");
    assert!(!new_dir.exists());
    ensure_data_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("state.ron", b"hello").unwrap();
    assert_eq!(first.file_name().unwrap(), "state.ron");
    assert_eq!(fs::read_to_string(&first).unwrap(), "hello");

    let second = writer.write("state.ron", b"world").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "world");
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let result = writer.write("doc.json", b"data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("doc.json").exists());
}

#[test]
fn missing_bookmark_file_reads_as_empty() {
    let temp = TempDir::new().unwrap();
    let file = JsonBookmarkFile::new(temp.path().to_path_buf());
    assert_eq!(file.read_set().unwrap(), BookmarkSet::new());
}

#[test]
fn bookmarks_survive_a_new_session() {
    let temp = TempDir::new().unwrap();
    {
        let mut store = BookmarkStore::open(JsonBookmarkFile::new(temp.path().to_path_buf())).unwrap();
        store.toggle(42).unwrap();
        store.toggle(7).unwrap();
        store.toggle(9).unwrap();
        store.toggle(7).unwrap();
    }
    let on_disk = fs::read_to_string(temp.path().join(BOOKMARKS_FILENAME)).unwrap();
    assert_eq!(on_disk, "[9,42]");

    let store = BookmarkStore::open(JsonBookmarkFile::new(temp.path().to_path_buf())).unwrap();
    assert_eq!(store.list().collect::<Vec<_>>(), vec![9, 42]);
}

#[test]
fn corrupt_bookmark_file_is_a_read_failure() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(BOOKMARKS_FILENAME), "{not json").unwrap();
    let file = JsonBookmarkFile::new(temp.path().to_path_buf());
    assert!(matches!(file.read_set(), Err(StorageError::Read(_))));
}

#[test]
fn unusable_location_fails_the_toggle() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocked");
    fs::write(&blocker, "file, not dir").unwrap();

    let backend = JsonBookmarkFile::new(blocker.clone());
    assert!(BookmarkStore::open(JsonBookmarkFile::new(blocker)).is_err());
    let mut store = BookmarkStore::unloaded(backend);
    assert!(matches!(store.toggle(1), Err(StorageError::Write(_))));
    assert!(!store.contains(1));
}

#[test]
fn damaged_bookmark_file_is_left_untouched() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(BOOKMARKS_FILENAME);
    fs::write(&path, "[1,2,3,4,5] x").unwrap();

    let file = JsonBookmarkFile::new(temp.path().to_path_buf());
    assert!(file.read_set().is_err());
    let mut store = BookmarkStore::unloaded(file);
    assert!(matches!(store.toggle(9), Err(StorageError::Write(_))));
    assert_eq!(fs::read_to_string(&path).unwrap(), "[1,2,3,4,5] x");

    fs::write(&path, "[1,2,3,4,5]").unwrap();
    assert_eq!(store.toggle(9), Ok(true));
    assert_eq!(fs::read_to_string(&path).unwrap(), "[1,2,3,4,5,9]");
}
