//! # Cart Store
//!
//! The authoritative in-session cart.
//!
//! ## Ownership
//!
//! A `CartStore` is a plain owned value: construct one per application (or per
//! test) and pass it by reference to whoever needs it. Mutations take
//! `&mut self` and run to completion without awaiting anything, so there is no
//! locking and no torn update is ever observable.
//!
//! ## Change propagation
//!
//! Every effective mutation:
//! 1. builds a new item list (the previous one is left untouched for anyone
//!    still holding a snapshot),
//! 2. publishes a fresh [`CartSnapshot`] to subscribers,
//! 3. serializes the list and hands it to the slot writer without waiting.
//!
//! Calls that change nothing (non-positive quantity to `add_item`, unknown
//! ids) do none of the above.
//!
//! ## Failure semantics
//!
//! No operation returns an error. Persistence problems are logged and the
//! in-memory cart stays authoritative for the rest of the session.

use rust_decimal::Decimal;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{codec, CartSnapshot};
use crate::model::{LineItem, Product, ProductId};
use crate::persistence::SlotClient;

/// Storage key the web storefront used for the cart.
pub const DEFAULT_CART_KEY: &str = "ecom_cart_items";

pub struct CartStore {
    current: CartSnapshot,
    key: String,
    slot: SlotClient,
    publisher: watch::Sender<CartSnapshot>,
}

impl CartStore {
    /// Creates an empty cart persisting under `key`. Nothing is read.
    pub fn new(slot: SlotClient, key: impl Into<String>) -> Self {
        let (publisher, _) = watch::channel(CartSnapshot::empty());
        Self {
            current: CartSnapshot::empty(),
            key: key.into(),
            slot,
            publisher,
        }
    }

    /// Creates a cart and restores it from the durable slot.
    ///
    /// A missing key, a read failure, or a malformed payload all produce an
    /// empty cart; the cause is logged.
    pub async fn open(slot: SlotClient, key: impl Into<String>) -> Self {
        let mut store = Self::new(slot, key);
        match store.slot.read(&store.key).await {
            Ok(Some(payload)) => match codec::decode(&payload).map(CartSnapshot::from_items) {
                Ok(Some(snapshot)) => {
                    info!(key = %store.key, items = snapshot.items().len(), "Cart restored");
                    store.current = snapshot;
                    store.publisher.send_replace(store.current.clone());
                }
                Ok(None) => {
                    warn!(key = %store.key, "Saved cart totals overflow; starting empty")
                }
                Err(e) => {
                    warn!(key = %store.key, error = %e, "Saved cart is malformed; starting empty")
                }
            },
            Ok(None) => debug!(key = %store.key, "No saved cart"),
            Err(e) => warn!(key = %store.key, error = %e, "Could not read saved cart; starting empty"),
        }
        store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current items and totals.
    pub fn snapshot(&self) -> CartSnapshot {
        self.current.clone()
    }

    /// Receives a new snapshot after every effective mutation.
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.publisher.subscribe()
    }

    /// Adds `quantity` units of `product`.
    ///
    /// An existing line keeps its position and price; only its quantity grows.
    /// A new product is appended. `quantity <= 0` and negative prices are ignored.
    pub fn add_item(&mut self, product: &Product, quantity: i64) {
        if quantity <= 0 {
            debug!(id = %product.id, quantity, "add_item ignored: non-positive quantity");
            return;
        }
        if product.price < Decimal::ZERO {
            warn!(id = %product.id, price = %product.price, "add_item ignored: negative price");
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        let mut items = self.current.items().to_vec();
        match items.iter().position(|item| item.id == product.id) {
            Some(index) => {
                let merged = items[index].quantity.saturating_add(quantity);
                items[index] = items[index].with_quantity(merged);
            }
            None => items.push(LineItem::new(product, quantity)),
        }
        debug!(id = %product.id, quantity, "add_item");
        self.commit(items);
    }

    /// Removes the line for `id` entirely, whatever its quantity.
    pub fn remove_item(&mut self, id: &ProductId) {
        if self.current.get(id).is_none() {
            debug!(%id, "remove_item ignored: not in cart");
            return;
        }
        let items = self
            .current
            .items()
            .iter()
            .filter(|item| &item.id != id)
            .cloned()
            .collect();
        debug!(%id, "remove_item");
        self.commit(items);
    }

    /// Takes one unit off the line for `id`, dropping the line at zero.
    pub fn decrement_item(&mut self, id: &ProductId) {
        match self.current.get(id).map(|item| item.quantity) {
            None => debug!(%id, "decrement_item ignored: not in cart"),
            Some(1) => self.remove_item(id),
            Some(quantity) => self.set_existing(id, quantity - 1),
        }
    }

    /// Sets the quantity for `id` exactly. `new_quantity <= 0` removes the line.
    pub fn update_quantity(&mut self, id: &ProductId, new_quantity: i64) {
        if new_quantity <= 0 {
            self.remove_item(id);
            return;
        }
        let new_quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        match self.current.get(id).map(|item| item.quantity) {
            None => debug!(%id, "update_quantity ignored: not in cart"),
            Some(quantity) if quantity == new_quantity => {}
            Some(_) => self.set_existing(id, new_quantity),
        }
    }

    /// Empties the cart.
    pub fn clear_cart(&mut self) {
        debug!(items = self.current.items().len(), "clear_cart");
        self.commit(Vec::new());
    }

    fn set_existing(&mut self, id: &ProductId, quantity: u32) {
        let items = self
            .current
            .items()
            .iter()
            .map(|item| {
                if &item.id == id {
                    item.with_quantity(quantity)
                } else {
                    item.clone()
                }
            })
            .collect();
        debug!(%id, quantity, "set quantity");
        self.commit(items);
    }

    fn commit(&mut self, items: Vec<LineItem>) {
        let Some(snapshot) = CartSnapshot::from_items(items) else {
            warn!(key = %self.key, "Cart totals would overflow; change ignored");
            return;
        };
        self.current = snapshot;
        self.publisher.send_replace(self.current.clone());

        match codec::encode(self.current.items()) {
            Ok(payload) => self.slot.write(&self.key, payload),
            Err(e) => warn!(key = %self.key, error = %e, "Could not encode cart; not persisted"),
        }
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("key", &self.key)
            .field("items", &self.current.items().len())
            .field("total_items", &self.current.total_items())
            .finish()
    }
}
