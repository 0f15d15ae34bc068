//! # Storefront Cart
//!
//! > **The client-side state layer of a small storefront.**
//!
//! The heart of the crate is the [`CartStore`](cart::CartStore): an owned,
//! in-session shopping cart with derived totals that mirrors itself into one
//! durable key-value slot, so a cart survives a restart.
//!
//! ## 🏗️ Design
//!
//! ### The cart never waits
//! Cart mutations are synchronous and infallible. After each change the store
//! publishes a new [`CartSnapshot`](cart::CartSnapshot) and hands the serialized
//! items to the slot writer without awaiting the write. Storage trouble is
//! logged, never surfaced; the in-memory cart stays authoritative.
//!
//! ### Actors for everything that does I/O
//! The slot writer ([`persistence`]) and the catalog ([`catalog`]) each run in
//! their own Tokio task, process messages sequentially, and are reached through
//! cloneable clients. Tests swap the slot writer for
//! [`persistence::mock`].
//!
//! ### Exact money
//! Prices are `rust_decimal::Decimal`. Totals are summed exactly and rounded to
//! cents once, half away from zero.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: products, line items, money helpers
//! - [`cart`]: the cart store, snapshots and the slot payload format
//! - [`storage`]: the [`KeyValueStore`](storage::KeyValueStore) trait with
//!   in-memory and directory backends
//! - [`persistence`]: the slot writer task and its client
//! - [`catalog`]: the mock product catalog
//! - [`checkout`]: order summaries, quotes, shipping validation, order placement
//! - [`lifecycle`]: configuration, tracing, and the
//!   [`StorefrontSystem`](lifecycle::StorefrontSystem) that wires it all up
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run --bin storefront-demo
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod lifecycle;
pub mod model;
pub mod persistence;
pub mod storage;
