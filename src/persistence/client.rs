//! # Slot Client
//!
//! Cloneable handle to the slot writer. `write` is fire-and-forget; `read` and
//! `flush` wait for the writer's reply.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument, warn};

use super::{PersistenceError, SlotRequest, SlotStats};

#[derive(Clone, Debug)]
pub struct SlotClient {
    sender: mpsc::UnboundedSender<SlotRequest>,
}

impl SlotClient {
    pub fn new(sender: mpsc::UnboundedSender<SlotRequest>) -> Self {
        Self { sender }
    }

    /// Queues `payload` for storage under `key` and returns immediately.
    ///
    /// Never blocks and never fails to the caller. If the writer is gone the
    /// payload is dropped and a warning is logged.
    pub fn write(&self, key: &str, payload: String) {
        let request = SlotRequest::Write {
            key: key.to_string(),
            payload,
        };
        if self.sender.send(request).is_err() {
            warn!(%key, "Slot writer closed; write dropped");
        }
    }

    #[instrument(skip(self))]
    pub async fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SlotRequest::Read {
                key: key.to_string(),
                respond_to,
            })
            .map_err(|_| PersistenceError::ActorClosed)?;
        response.await.map_err(|_| PersistenceError::ActorDropped)?
    }

    /// Waits until every previously queued write has been attempted.
    #[instrument(skip(self))]
    pub async fn flush(&self) -> Result<SlotStats, PersistenceError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SlotRequest::Flush { respond_to })
            .map_err(|_| PersistenceError::ActorClosed)?;
        response.await.map_err(|_| PersistenceError::ActorDropped)?
    }
}
