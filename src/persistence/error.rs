//! Error types for the slot writer.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors surfaced by [`SlotClient`](super::SlotClient) requests that expect a reply.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The slot writer task has stopped.
    #[error("Slot writer closed")]
    ActorClosed,

    /// The slot writer dropped the response channel.
    #[error("Slot writer dropped response channel")]
    ActorDropped,

    /// The storage backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
