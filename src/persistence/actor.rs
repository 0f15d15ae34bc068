//! # Slot Writer
//!
//! The `SlotActor` owns the storage backend and performs every durable-slot
//! read and write. It runs in its own Tokio task and processes requests
//! sequentially, so writes land in the order the cart issued them and the last
//! write always wins.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::{SlotClient, SlotRequest, SlotStats};
use crate::storage::KeyValueStore;

/// The "server" half of the slot writer.
///
/// Create it with [`SlotActor::new`], spawn [`SlotActor::run`], and hand the
/// returned [`SlotClient`] to the cart.
pub struct SlotActor {
    receiver: mpsc::UnboundedReceiver<SlotRequest>,
    store: Arc<dyn KeyValueStore>,
    stats: SlotStats,
}

impl SlotActor {
    pub fn new(store: Arc<dyn KeyValueStore>) -> (Self, SlotClient) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let actor = Self {
            receiver,
            store,
            stats: SlotStats::default(),
        };
        (actor, SlotClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self) {
        info!("Slot writer started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SlotRequest::Write { key, payload } => {
                    debug!(%key, bytes = payload.len(), "Write");
                    match self.store.set(&key, &payload).await {
                        Ok(()) => self.stats.writes += 1,
                        Err(e) => {
                            self.stats.failed_writes += 1;
                            warn!(%key, error = %e, "Write failed; in-memory state remains authoritative");
                        }
                    }
                }
                SlotRequest::Read { key, respond_to } => {
                    let result = self.store.get(&key).await.map_err(Into::into);
                    match &result {
                        Ok(value) => debug!(%key, found = value.is_some(), "Read"),
                        Err(e) => warn!(%key, error = %e, "Read failed"),
                    }
                    let _ = respond_to.send(result);
                }
                SlotRequest::Flush { respond_to } => {
                    debug!(stats = ?self.stats, "Flush");
                    let _ = respond_to.send(Ok(self.stats));
                }
            }
        }

        info!(
            writes = self.stats.writes,
            failed_writes = self.stats.failed_writes,
            "Slot writer shutdown"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;

    #[tokio::test]
    async fn writes_are_applied_in_order() {
        let store = Arc::new(InMemoryStore::new());
        let (actor, client) = SlotActor::new(store.clone());
        let handle = tokio::spawn(actor.run());

        client.write("cart", "[1]".to_string());
        client.write("cart", "[1,2]".to_string());
        let stats = client.flush().await.unwrap();

        assert_eq!(stats.writes, 2);
        assert_eq!(store.peek("cart").as_deref(), Some("[1,2]"));
        assert_eq!(client.read("cart").await.unwrap().as_deref(), Some("[1,2]"));

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn failed_writes_are_counted_not_raised() {
        let store = Arc::new(InMemoryStore::with_quota(8));
        let (actor, client) = SlotActor::new(store.clone());
        tokio::spawn(actor.run());

        client.write("cart", "[]".to_string());
        client.write("cart", "[\"too long for quota\"]".to_string());
        let stats = client.flush().await.unwrap();

        assert_eq!(stats, SlotStats { writes: 1, failed_writes: 1 });
        assert_eq!(store.peek("cart").as_deref(), Some("[]"));
    }
}
