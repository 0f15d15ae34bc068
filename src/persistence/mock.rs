//! # Mock Slot
//!
//! Utilities for testing the cart without a running slot writer.
//!
//! [`create_mock_slot`] returns a real [`SlotClient`] wired to a receiver the
//! test owns. Writes can then be drained synchronously with [`take_writes`],
//! and reads answered by hand with [`expect_read`].
//!
//! ```rust
//! use storefront_cart::persistence::mock::{create_mock_slot, take_writes};
//!
//! let (client, mut receiver) = create_mock_slot();
//! client.write("cart", "[]".to_string());
//! assert_eq!(take_writes(&mut receiver), vec![("cart".to_string(), "[]".to_string())]);
//! ```

use tokio::sync::mpsc;

use super::{Response, SlotClient, SlotRequest};

/// Creates a client and the receiver its requests arrive on.
pub fn create_mock_slot() -> (SlotClient, mpsc::UnboundedReceiver<SlotRequest>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (SlotClient::new(sender), receiver)
}

/// Drains every queued write as `(key, payload)` pairs, in order.
///
/// # Panics
/// Panics if a non-write request is queued.
pub fn take_writes(receiver: &mut mpsc::UnboundedReceiver<SlotRequest>) -> Vec<(String, String)> {
    let mut writes = Vec::new();
    while let Ok(request) = receiver.try_recv() {
        match request {
            SlotRequest::Write { key, payload } => writes.push((key, payload)),
            other => panic!("Expected Write request, got {:?}", other),
        }
    }
    writes
}

/// Waits for a read request and returns its key and responder.
pub async fn expect_read(
    receiver: &mut mpsc::UnboundedReceiver<SlotRequest>,
) -> Option<(String, Response<Option<String>>)> {
    match receiver.recv().await {
        Some(SlotRequest::Read { key, respond_to }) => Some((key, respond_to)),
        _ => None,
    }
}
