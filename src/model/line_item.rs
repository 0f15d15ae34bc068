use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Product, ProductId};

/// One product-and-quantity entry in the cart.
///
/// `name` and `price` are copied from the [`Product`] at add time. The
/// serialized shape is `{id, name, price, quantity}` with `price` as a JSON
/// number, which is what the durable slot stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity,
        }
    }

    /// Returns a copy of this item carrying `quantity` instead.
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    /// Unrounded `price × quantity`, or `None` if it does not fit in a `Decimal`.
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}
