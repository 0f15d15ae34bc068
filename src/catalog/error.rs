//! Error types for the catalog service.

use thiserror::Error;

use crate::model::ProductId;

/// Errors that can occur during catalog lookups.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// No product has the requested id.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The page or limit of a listing query is unusable.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The catalog task has stopped.
    #[error("Catalog closed")]
    ActorClosed,

    /// The catalog task dropped the response channel.
    #[error("Catalog dropped response channel")]
    ActorDropped,
}
