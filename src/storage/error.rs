//! Error types for durable key-value storage.

use thiserror::Error;

/// Errors from a [`KeyValueStore`](super::KeyValueStore) backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key cannot be used by this backend.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Writing the value would exceed the configured quota.
    #[error("Storage quota exceeded: {requested} bytes requested, {limit} bytes allowed")]
    QuotaExceeded { requested: usize, limit: usize },

    /// The stored value exists but cannot be read back as text.
    #[error("Corrupt value for key {key}: {reason}")]
    Corrupt { key: String, reason: String },

    /// I/O error from the underlying backend.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}
