use std::sync::Arc;

use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use super::{ConfigError, StorefrontConfig};
use crate::cart::CartStore;
use crate::catalog::{mock_products, CatalogActor, CatalogClient};
use crate::checkout::Checkout;
use crate::persistence::{SlotActor, SlotClient, SlotStats};
use crate::storage::{DirectoryStore, InMemoryStore, KeyValueStore, StorageError};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Could not open storage: {0}")]
    Storage(#[from] StorageError),

    #[error("Task failed: {0}")]
    TaskFailed(String),
}

/// Runtime orchestrator for the storefront.
///
/// `StorefrontSystem` is responsible for:
/// - **Storage**: choosing the durable backend from the config
/// - **Lifecycle Management**: starting the slot writer and catalog tasks and
///   stopping them again
/// - **Dependency Wiring**: handing the cart its slot client and restoring the
///   saved cart before anyone can use it
///
/// # Example
///
/// ```ignore
/// let mut system = StorefrontSystem::new(&StorefrontConfig::default()).await?;
///
/// let product = system.catalog.get("p1002".into()).await?.to_product();
/// system.cart.add_item(&product, 2);
///
/// // Waits for pending cart writes before stopping
/// system.shutdown().await?;
/// ```
pub struct StorefrontSystem {
    pub cart: CartStore,
    pub catalog: CatalogClient,
    pub checkout: Checkout,
    slot: SlotClient,
    handles: Vec<JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Opens the configured store and starts the system on it.
    pub async fn new(config: &StorefrontConfig) -> Result<Self, SystemError> {
        config.validate()?;
        let store: Arc<dyn KeyValueStore> = match (&config.data_dir, config.storage_quota_bytes) {
            (Some(dir), _) => Arc::new(DirectoryStore::open(dir).await?),
            (None, Some(limit)) => Arc::new(InMemoryStore::with_quota(limit)),
            (None, None) => Arc::new(InMemoryStore::new()),
        };
        Ok(Self::with_store(config, store).await)
    }

    /// Starts the system on an existing store.
    ///
    /// Returns once the saved cart (if any) has been restored.
    pub async fn with_store(config: &StorefrontConfig, store: Arc<dyn KeyValueStore>) -> Self {
        // 1. Create actors
        let (slot_actor, slot) = SlotActor::new(store);
        let (catalog_actor, catalog) = CatalogActor::new(
            mock_products(),
            config.catalog_latency(),
            config.channel_capacity,
        );

        // 2. Start them
        let slot_handle = tokio::spawn(slot_actor.run());
        let catalog_handle = tokio::spawn(catalog_actor.run());

        // 3. Restore the cart through the running slot writer
        let cart = CartStore::open(slot.clone(), config.cart_key.clone()).await;
        info!(key = %cart.key(), items = cart.snapshot().items().len(), "Storefront started");

        Self {
            cart,
            catalog,
            checkout: Checkout::new(config.checkout_latency()),
            slot,
            handles: vec![slot_handle, catalog_handle],
        }
    }

    /// Waits until every cart write issued so far has reached the store.
    pub async fn flush(&self) -> SlotStats {
        match self.slot.flush().await {
            Ok(stats) => stats,
            Err(e) => {
                warn!(error = %e, "Flush failed");
                SlotStats::default()
            }
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// 1. Flushes pending cart writes
    /// 2. Drops the cart and all clients, which closes the actors' channels
    /// 3. Waits for every actor task to finish
    ///
    /// Returns the slot writer's final counters.
    pub async fn shutdown(self) -> Result<SlotStats, SystemError> {
        info!("Shutting down storefront...");
        let stats = self.flush().await;

        drop(self.cart);
        drop(self.catalog);
        drop(self.slot);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::TaskFailed(e.to_string()));
            }
        }

        info!(writes = stats.writes, failed_writes = stats.failed_writes, "Storefront shutdown complete.");
        Ok(stats)
    }
}

impl std::fmt::Debug for StorefrontSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontSystem")
            .field("cart", &self.cart)
            .field("tasks", &self.handles.len())
            .finish()
    }
}
