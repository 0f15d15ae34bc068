//! # Persistence
//!
//! Keeps durable-slot I/O off the caller's path. The cart serializes its items
//! and hands the payload to a [`SlotClient`]; the [`SlotActor`] task performs
//! the write against a [`KeyValueStore`](crate::storage::KeyValueStore) and
//! logs any failure.
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_cart::persistence::SlotActor;
//! use storefront_cart::storage::InMemoryStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = SlotActor::new(Arc::new(InMemoryStore::new()));
//!     tokio::spawn(actor.run());
//!
//!     client.write("ecom_cart_items", "[]".to_string());
//!     let stats = client.flush().await.unwrap();
//!     assert_eq!(stats.writes, 1);
//! }
//! ```

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::*;
pub use client::*;
pub use error::*;
pub use message::*;
