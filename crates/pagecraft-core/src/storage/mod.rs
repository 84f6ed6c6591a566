//! Persistence collaborator boundary.
//!
//! The document model never owns persistence: editors hand the serialized
//! page to a content store at gesture end and reconcile on completion or
//! failure. The store trades in opaque JSON records; interpreting them is
//! the document layer's job.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("content record not found: {0}")]
    NotFound(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async storage operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// A store of opaque content records keyed by id.
///
/// Backends may keep records in memory, on the filesystem, or behind a
/// remote API; the editors only ever see this trait.
pub trait ContentStore: Send + Sync {
    /// Write a content record.
    fn put(&self, id: &str, json: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// Read a content record.
    fn get(&self, id: &str) -> BoxFuture<'_, StorageResult<String>>;

    /// Delete a content record.
    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// List all record ids.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>>;

    /// Check whether a record exists.
    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>>;
}
