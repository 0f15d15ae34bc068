use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use std::fmt::Display;

/// Opaque product identifier.
///
/// Ids arrive either as integers (`101`) or strings (`"p1001"`) and must
/// round-trip through the durable slot unchanged, so both shapes are kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

// Read through `Value`: with arbitrary-precision numbers enabled, untagged
// enums never see a plain integer.
impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(id) => Ok(Self::Text(id)),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Number)
                .ok_or_else(|| D::Error::custom(format!("product id {} is not an integer", n))),
            other => Err(D::Error::custom(format!(
                "product id must be an integer or a string, got {}",
                other
            ))),
        }
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{}", id),
            Self::Text(id) => write!(f, "{}", id),
        }
    }
}

/// The product contract the cart accepts.
///
/// The catalog (or any other caller) supplies `{id, name, price}`; the cart
/// snapshots the price at add time and never refetches it.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
}

impl Product {
    /// Creates a new Product.
    ///
    /// # Arguments
    /// * `id` - Unique product identifier
    /// * `name` - Display name carried into the cart
    /// * `price` - Unit price at the time the product is offered
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}
