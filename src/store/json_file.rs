//! Generic file-backed collection with serialized read-modify-write.
//!
//! [`JsonCollection`] persists a whole collection of records to a single
//! pretty-printed JSON array file. Every operation loads the full
//! collection, mutates it in memory, and overwrites the file. A
//! [`tokio::sync::Mutex`] owned by the collection serializes every
//! read-modify-write sequence so that two concurrent writers can never
//! discard each other's changes (last-writer-wins at file granularity is
//! the failure mode this type exists to rule out).
//!
//! Writes go through a temp-file-then-rename step so a crash mid-write
//! never leaves a torn file behind. I/O and parse failures propagate to
//! the caller; the store never fabricates an empty collection to mask a
//! broken file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::error::ApiError;

/// A whole-collection JSON file store for one entity type.
///
/// # Concurrency
///
/// All operations acquire the same mutex for the full load-mutate-persist
/// cycle. Readers of different collections never contend; two writers to
/// the same collection are serialized.
#[derive(Debug)]
pub struct JsonCollection<T> {
    path: PathBuf,
    seed: Vec<T>,
    lock: Mutex<()>,
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Creates a collection backed by `path`, seeded with `seed` records
    /// the first time the file is read before ever being written.
    #[must_use]
    pub fn new(path: PathBuf, seed: Vec<T>) -> Self {
        Self {
            path,
            seed,
            lock: Mutex::new(()),
        }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full collection, materializing the seed on first access.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] on I/O or parse failure, or
    /// [`ApiError::Unavailable`] on persistent transient contention
    /// while seeding.
    pub async fn read_all(&self) -> Result<Vec<T>, ApiError> {
        let _guard = self.lock.lock().await;
        self.load_or_seed().await
    }

    /// Runs `mutate` against the loaded collection and persists the
    /// result, all under the collection lock.
    ///
    /// Nothing is written when `mutate` returns an error, so a rejected
    /// operation leaves the file untouched.
    ///
    /// # Errors
    ///
    /// Propagates the error from `mutate`, or [`ApiError::Storage`] /
    /// [`ApiError::Unavailable`] on load or persist failure.
    pub async fn mutate<R, F>(&self, mutate: F) -> Result<R, ApiError>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, ApiError>,
    {
        let _guard = self.lock.lock().await;
        let mut records = self.load_or_seed().await?;
        let result = mutate(&mut records)?;
        self.persist(&records).await?;
        Ok(result)
    }

    /// Loads the collection, seeding the file if it does not exist yet.
    /// Caller must hold the lock.
    async fn load_or_seed(&self) -> Result<Vec<T>, ApiError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ApiError::Storage(format!("corrupt collection file {}: {e}", self.path.display()))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), seeded = self.seed.len(), "seeding collection file");
                self.persist(&self.seed).await?;
                Ok(self.seed.clone())
            }
            Err(e) => Err(ApiError::Storage(format!(
                "cannot read {}: {e}",
                self.path.display()
            ))),
        }
    }

    /// Serializes `records` and overwrites the backing file atomically
    /// via a temp file and rename. Transient failures are retried once.
    async fn persist(&self, records: &[T]) -> Result<(), ApiError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ApiError::Storage(format!("cannot create {}: {e}", parent.display())))?;
        }

        let bytes = serde_json::to_vec_pretty(records)
            .map_err(|e| ApiError::Internal(format!("serialization failed: {e}")))?;

        match self.write_atomic(&bytes).await {
            Ok(()) => Ok(()),
            Err(e) if is_transient(&e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "transient write failure, retrying once");
                tokio::time::sleep(std::time::Duration::from_millis(50)).await;
                self.write_atomic(&bytes).await.map_err(|e| {
                    ApiError::Unavailable(format!("write to {} failed: {e}", self.path.display()))
                })
            }
            Err(e) => Err(ApiError::Storage(format!(
                "cannot write {}: {e}",
                self.path.display()
            ))),
        }
    }

    async fn write_atomic(&self, bytes: &[u8]) -> std::io::Result<()> {
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await
    }
}

/// Transient I/O conditions worth one retry.
fn is_transient(e: &std::io::Error) -> bool {
    matches!(
        e.kind(),
        ErrorKind::Interrupted | ErrorKind::WouldBlock | ErrorKind::ResourceBusy
    )
}
