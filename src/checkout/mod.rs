//! # Checkout
//!
//! Order summaries, checkout quotes, shipping-form validation and simulated
//! order placement on top of a [`CartStore`](crate::cart::CartStore).

pub mod error;
pub mod order;
pub mod pricing;
pub mod shipping;

pub use error::*;
pub use order::*;
pub use pricing::*;
pub use shipping::*;
