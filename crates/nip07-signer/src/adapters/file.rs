//! File-backed blob store.
//!
//! All slots live in one JSON object at `<dir>/store.json`.
//!
//! ## Locking
//!
//! Every read-modify-write cycle holds an exclusive `fs2` lock on
//! `<dir>/store.lock`, so separate handles and separate processes on the
//! same directory see `put_if_absent` as one step. The lock is advisory and
//! blocking, and is taken on the blocking thread pool.
//!
//! Writes go to a uniquely named temporary file in the same directory that
//! is then renamed over the original, so readers never observe a
//! half-written store. On Unix the file is created `0600`.

use crate::domain::errors::StorageError;
use crate::ports::outbound::BlobStore;
use async_trait::async_trait;
use fs2::FileExt;
use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

const STORE_FILE: &str = "store.json";
const LOCK_FILE: &str = "store.lock";

type Slots = BTreeMap<String, String>;

fn io_error(e: io::Error) -> StorageError {
    StorageError::Io(e.to_string())
}

/// JSON file blob store.
pub struct FileBlobStore {
    dir: PathBuf,
    path: PathBuf,
}

impl FileBlobStore {
    /// Store under `dir`. The directory is created on first write.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref().to_path_buf();
        Self {
            path: dir.join(STORE_FILE),
            dir,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `update` against the current slots under the directory lock.
    ///
    /// `update` returns the caller's result and whether the slots changed;
    /// unchanged slots are not rewritten.
    async fn update<T, F>(&self, update: F) -> Result<T, StorageError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Slots) -> (T, bool) + Send + 'static,
    {
        let dir = self.dir.clone();
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || {
            std::fs::create_dir_all(&dir).map_err(io_error)?;
            let _lock = StoreLock::acquire(&dir.join(LOCK_FILE))?;

            let mut slots = parse_slots(&path, std::fs::read_to_string(&path))?;
            let (result, changed) = update(&mut slots);
            if changed {
                write_slots(&dir, &path, &slots)?;
            }
            Ok(result)
        })
        .await
        .map_err(|e| StorageError::Io(e.to_string()))?
    }
}

/// Exclusive advisory lock, released on drop.
struct StoreLock {
    file: File,
}

impl StoreLock {
    fn acquire(path: &Path) -> Result<Self, StorageError> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path)
            .map_err(io_error)?;
        file.lock_exclusive().map_err(io_error)?;
        Ok(Self { file })
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

fn parse_slots(path: &Path, read: io::Result<String>) -> Result<Slots, StorageError> {
    match read {
        Ok(text) => serde_json::from_str(&text).map_err(|_| StorageError::Corrupt {
            key: path.display().to_string(),
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Slots::new()),
        Err(e) => Err(io_error(e)),
    }
}

fn write_slots(dir: &Path, path: &Path, slots: &Slots) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(slots).map_err(|e| StorageError::Io(e.to_string()))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_error)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o600))
            .map_err(io_error)?;
    }
    tmp.write_all(&body).map_err(io_error)?;
    tmp.as_file().sync_all().map_err(io_error)?;
    tmp.persist(path).map_err(|e| io_error(e.error))?;

    debug!(path = %path.display(), slots = slots.len(), "Blob store written");
    Ok(())
}

#[async_trait]
impl BlobStore for FileBlobStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = parse_slots(&self.path, tokio::fs::read_to_string(&self.path).await)?;
        Ok(slots.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let (key, value) = (key.to_string(), value.to_string());
        self.update(move |slots| {
            slots.insert(key, value);
            ((), true)
        })
        .await
    }

    async fn put_if_absent(&self, key: &str, value: &str) -> Result<Option<String>, StorageError> {
        let (key, value) = (key.to_string(), value.to_string());
        self.update(move |slots| match slots.get(&key) {
            Some(existing) => (Some(existing.clone()), false),
            None => {
                slots.insert(key, value);
                (None, true)
            }
        })
        .await
    }
}
