//! Configuration, startup and shutdown.

pub mod config;
pub mod storefront_system;
pub mod tracing;

pub use config::*;
pub use storefront_system::*;
pub use self::tracing::setup_tracing;
