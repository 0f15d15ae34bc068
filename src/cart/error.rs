//! Error types for the cart's slot payload.

use thiserror::Error;

use crate::model::ProductId;

/// Errors encoding or decoding the persisted item list.
///
/// These never reach cart callers; the store logs them and carries on.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Invalid cart payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Line item {0} has zero quantity")]
    ZeroQuantity(ProductId),

    #[error("Line item {0} has a negative price")]
    NegativePrice(ProductId),

    #[error("Duplicate line item {0}")]
    DuplicateId(ProductId),

    #[error("Cart totals overflow")]
    TotalsOverflow,
}
