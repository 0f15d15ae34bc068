//! # Order Placement
//!
//! [`Checkout`] turns the current cart into an order. Nothing is charged: the
//! order is validated, a processing delay is simulated, an id is assigned, and
//! the cart is cleared.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::{CheckoutError, CheckoutQuote, PaymentMethod, ShippingInfo, ShippingOption};
use crate::cart::CartStore;
use crate::model::LineItem;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub shipping: ShippingInfo,
    pub shipping_option: ShippingOption,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderConfirmation {
    pub order_id: String,
    pub items: Vec<LineItem>,
    pub shipping: ShippingInfo,
    pub payment_method: PaymentMethod,
    pub quote: CheckoutQuote,
}

#[derive(Debug)]
pub struct Checkout {
    latency: Duration,
    next_order_id: AtomicU64,
}

impl Checkout {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            next_order_id: AtomicU64::new(1),
        }
    }

    /// Places an order for everything in `cart`, then empties it.
    ///
    /// The cart is left untouched when the request is rejected.
    #[instrument(skip(self, cart, request))]
    pub async fn place_order(
        &self,
        cart: &mut CartStore,
        request: CheckoutRequest,
    ) -> Result<OrderConfirmation, CheckoutError> {
        debug!(?request, "place_order called");
        let snapshot = cart.snapshot();
        if snapshot.is_empty() {
            warn!("Rejected order: cart is empty");
            return Err(CheckoutError::EmptyCart);
        }
        if let Err(errors) = request.shipping.validate() {
            warn!(?errors, "Rejected order: invalid shipping info");
            return Err(CheckoutError::InvalidShippingInfo(errors));
        }

        let quote = CheckoutQuote::new(snapshot.subtotal(), request.shipping_option);
        tokio::time::sleep(self.latency).await;

        let order_id = format!("order_{}", self.next_order_id.fetch_add(1, Ordering::SeqCst));
        info!(
            %order_id,
            items = snapshot.items().len(),
            total = %quote.total,
            payment = ?request.payment_method,
            "Order placed"
        );
        cart.clear_cart();

        Ok(OrderConfirmation {
            order_id,
            items: snapshot.items().to_vec(),
            shipping: request.shipping,
            payment_method: request.payment_method,
            quote,
        })
    }
}
