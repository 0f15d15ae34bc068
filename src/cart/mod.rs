//! # Cart
//!
//! The shopping-cart state container: [`CartStore`] owns the line items,
//! [`CartSnapshot`] is the read-only view handed to everyone else, and
//! [`codec`] defines what lands in the durable slot.
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use storefront_cart::cart::{CartStore, DEFAULT_CART_KEY};
//! use storefront_cart::model::Product;
//! use storefront_cart::persistence::mock::create_mock_slot;
//!
//! let (slot, _writes) = create_mock_slot();
//! let mut cart = CartStore::new(slot, DEFAULT_CART_KEY);
//!
//! cart.add_item(&Product::new("a", "Widget", Decimal::new(1000, 2)), 2);
//! let snapshot = cart.snapshot();
//! assert_eq!(snapshot.total_items(), 2);
//! assert_eq!(snapshot.subtotal(), Decimal::new(2000, 2));
//! ```

pub mod codec;
pub mod error;
pub mod snapshot;
pub mod store;

pub use error::*;
pub use snapshot::*;
pub use store::*;
