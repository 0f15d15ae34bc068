//! # Durable Storage
//!
//! The cart persists into a single key-value slot. This module defines the
//! backend contract and the two backends shipped with the crate.
//!
//! - [`InMemoryStore`] - `HashMap` behind a lock, optional byte quota. Used by tests
//!   and when no data directory is configured.
//! - [`DirectoryStore`] - one file per key under a root directory; survives restarts.
//!
//! Backends are only ever touched by the slot writer task
//! ([`SlotActor`](crate::persistence::SlotActor)), never by the cart directly.

pub mod directory;
pub mod error;
pub mod memory;

pub use directory::*;
pub use error::*;
pub use memory::*;

use async_trait::async_trait;

/// Abstraction for durable key-value backends.
///
/// Values are text; encoding is the caller's concern.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if there is none.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Succeeds if the key does not exist.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
