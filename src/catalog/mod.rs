//! # Catalog
//!
//! A read-only product catalog served by a [`CatalogActor`] task. The listing
//! is the fixed set from [`mock_products`]; every request pays a simulated
//! backend delay.
//!
//! Catalog entries carry display fields (description, stock, rating). The cart
//! only needs [`CatalogProduct::to_product`].

pub mod actor;
pub mod client;
pub mod data;
pub mod error;
pub mod message;
pub mod product;

pub use actor::*;
pub use client::*;
pub use data::*;
pub use error::*;
pub use message::*;
pub use product::*;
