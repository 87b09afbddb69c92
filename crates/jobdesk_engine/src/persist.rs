use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use jobdesk_core::{BookmarkBackend, BookmarkSet, JobId, StorageError};
use tempfile::NamedTempFile;
use thiserror::Error;

pub const BOOKMARKS_FILENAME: &str = "bookmarks.json";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("data directory {} is unusable: {reason}", path.display())]
    DataDir { path: PathBuf, reason: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Create `dir` when absent. An existing non-directory is an error.
pub fn ensure_data_dir(dir: &Path) -> Result<(), PersistError> {
    let unusable = |reason: String| PersistError::DataDir {
        path: dir.to_path_buf(),
        reason,
    };
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(unusable("not a directory".into())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(dir).map_err(|err| unusable(err.to_string()))
        }
        Err(err) => Err(unusable(err.to_string())),
    }
}

/// Replaces files under one directory through a synced temp file and a
/// rename, so readers see either the old or the new content.
#[derive(Debug)]
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, filename: &str, content: &[u8]) -> Result<PathBuf, PersistError> {
        ensure_data_dir(&self.dir)?;
        let target = self.dir.join(filename);

        let mut staged = NamedTempFile::new_in(&self.dir)?;
        staged.write_all(content)?;
        staged.as_file().sync_all()?;
        staged
            .persist(&target)
            .map_err(|err| PersistError::Io(err.error))?;
        Ok(target)
    }
}

/// Bookmark ids stored as a JSON array in `{dir}/bookmarks.json`.
#[derive(Debug)]
pub struct JsonBookmarkFile {
    writer: AtomicFileWriter,
    path: PathBuf,
}

impl JsonBookmarkFile {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            path: dir.join(BOOKMARKS_FILENAME),
            writer: AtomicFileWriter::new(dir),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookmarkBackend for JsonBookmarkFile {
    fn read_set(&self) -> Result<BookmarkSet, StorageError> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BookmarkSet::new()),
            Err(err) => return Err(StorageError::Read(err.to_string())),
        };
        let ids: Vec<JobId> =
            serde_json::from_slice(&content).map_err(|err| StorageError::Read(err.to_string()))?;
        Ok(ids.into_iter().collect())
    }

    fn write_set(&mut self, ids: &BookmarkSet) -> Result<(), StorageError> {
        let content =
            serde_json::to_vec(ids).map_err(|err| StorageError::Write(err.to_string()))?;
        self.writer
            .write(BOOKMARKS_FILENAME, &content)
            .map_err(|err| StorageError::Write(err.to_string()))?;
        Ok(())
    }
}
