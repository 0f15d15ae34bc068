//! # Pricing
//!
//! Two views of the same cart total:
//!
//! - [`OrderSummary`] is the cart page estimate. Shipping is free from
//!   `$250.00`, otherwise a flat `$15.00`; tax is estimated at 7.5 % of the
//!   subtotal.
//! - [`CheckoutQuote`] is the checkout page total for a chosen
//!   [`ShippingOption`]; tax is 8 % of subtotal plus shipping.
//!
//! Every amount is rounded to cents.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::CartSnapshot;
use crate::model::round_money;

pub fn free_shipping_threshold() -> Decimal {
    Decimal::new(250, 0)
}

pub fn flat_shipping_cost() -> Decimal {
    Decimal::new(15, 0)
}

/// 7.5 %
pub fn estimated_tax_rate() -> Decimal {
    Decimal::new(75, 3)
}

/// 8 %
pub fn checkout_tax_rate() -> Decimal {
    Decimal::new(8, 2)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub estimated_tax: Decimal,
    pub total: Decimal,
    /// What is left to spend before shipping becomes free; zero once it is.
    pub free_shipping_remaining: Decimal,
}

impl OrderSummary {
    pub fn from_snapshot(snapshot: &CartSnapshot) -> Self {
        Self::from_subtotal(snapshot.subtotal())
    }

    pub fn from_subtotal(subtotal: Decimal) -> Self {
        let threshold = free_shipping_threshold();
        let (shipping, free_shipping_remaining) = if subtotal >= threshold {
            (Decimal::ZERO, Decimal::ZERO)
        } else {
            (flat_shipping_cost(), threshold - subtotal)
        };
        let estimated_tax = round_money(subtotal * estimated_tax_rate());

        Self {
            subtotal,
            shipping,
            estimated_tax,
            total: subtotal + shipping + estimated_tax,
            free_shipping_remaining,
        }
    }

    pub fn qualifies_for_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingOption {
    #[default]
    Standard,
    Express,
}

impl ShippingOption {
    pub const ALL: [ShippingOption; 2] = [ShippingOption::Standard, ShippingOption::Express];

    pub fn name(&self) -> &'static str {
        match self {
            ShippingOption::Standard => "Standard Shipping",
            ShippingOption::Express => "Express Shipping",
        }
    }

    pub fn cost(&self) -> Decimal {
        match self {
            ShippingOption::Standard => Decimal::new(5, 0),
            ShippingOption::Express => Decimal::new(15, 0),
        }
    }

    pub fn delivery(&self) -> &'static str {
        match self {
            ShippingOption::Standard => "4-7 business days",
            ShippingOption::Express => "1-2 business days",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    #[serde(rename = "paypal")]
    PayPal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutQuote {
    pub subtotal: Decimal,
    pub shipping_option: ShippingOption,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl CheckoutQuote {
    pub fn new(subtotal: Decimal, shipping_option: ShippingOption) -> Self {
        let shipping = shipping_option.cost();
        let tax = round_money((subtotal + shipping) * checkout_tax_rate());
        Self {
            subtotal,
            shipping_option,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}
