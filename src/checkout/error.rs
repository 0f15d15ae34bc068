//! Error types for checkout.

use thiserror::Error;

/// A shipping-form field that failed validation.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("First name is required.")]
    FirstName,

    #[error("Address is required.")]
    Address,

    #[error("Valid email is required.")]
    Email,

    #[error("Zip code is required.")]
    Zip,
}

impl FieldError {
    /// Form field name the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::FirstName => "firstName",
            FieldError::Address => "address",
            FieldError::Email => "email",
            FieldError::Zip => "zip",
        }
    }
}

/// Errors that can occur while placing an order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// There is nothing in the cart to order.
    #[error("Cart is empty")]
    EmptyCart,

    /// One or more shipping fields are missing or malformed.
    #[error("Invalid shipping info: {}", describe(.0))]
    InvalidShippingInfo(Vec<FieldError>),
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.field())
        .collect::<Vec<_>>()
        .join(", ")
}
