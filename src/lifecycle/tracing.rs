//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Task Lifecycle**: slot writer and catalog startup and shutdown
//! - **Cart Mutations**: every effective add/remove/update at `debug`
//! - **Swallowed Failures**: unreadable saved carts and failed slot writes at `warn`
//! - **Orders**: placement at `info`, full request payload at `debug`
//!
//! ```bash
//! # Lifecycle and orders only
//! RUST_LOG=info cargo run
//!
//! # Every cart mutation and slot write
//! RUST_LOG=debug cargo run
//!
//! # Just persistence
//! RUST_LOG=storefront_cart::persistence=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a cart add followed by a write looks like:
//!
//! ```text
//! DEBUG add_item id=p1002 quantity=2
//! DEBUG Write key=ecom_cart_items bytes=74
//! ```

/// Installs the global subscriber. If one is already installed it is kept and
/// the refusal is logged at `debug`, so tests may call this freely.
pub fn setup_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init();
    if let Err(e) = installed {
        ::tracing::debug!(error = %e, "Tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_setup_keeps_the_first_subscriber() {
        setup_tracing();
        setup_tracing();
        ::tracing::info!("still logging");
    }
}
