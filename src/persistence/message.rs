//! # Slot Messages
//!
//! Requests sent from [`SlotClient`](super::SlotClient) to [`SlotActor`](super::SlotActor).

use tokio::sync::oneshot;

use super::PersistenceError;

/// Type alias for the one-shot response channel used by the slot writer.
pub type Response<T> = oneshot::Sender<Result<T, PersistenceError>>;

/// Counters reported by the slot writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotStats {
    /// Writes that reached the backend successfully.
    pub writes: u64,
    /// Writes the backend rejected.
    pub failed_writes: u64,
}

/// Requests processed, in order, by the slot writer.
///
/// `Write` carries no reply channel: callers hand off the payload and move on.
/// `Flush` is answered only after every earlier request has been handled.
#[derive(Debug)]
pub enum SlotRequest {
    Write {
        key: String,
        payload: String,
    },
    Read {
        key: String,
        respond_to: Response<Option<String>>,
    },
    Flush {
        respond_to: Response<SlotStats>,
    },
}
