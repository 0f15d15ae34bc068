//! Requests sent from [`CatalogClient`](super::CatalogClient) to [`CatalogActor`](super::CatalogActor).

use tokio::sync::oneshot;

use super::{CatalogError, CatalogProduct, ProductPage, ProductQuery};
use crate::model::ProductId;

/// Type alias for the one-shot response channel used by the catalog.
pub type Response<T> = oneshot::Sender<Result<T, CatalogError>>;

#[derive(Debug)]
pub enum CatalogRequest {
    List {
        query: ProductQuery,
        respond_to: Response<ProductPage>,
    },
    Get {
        id: ProductId,
        respond_to: Response<CatalogProduct>,
    },
    Categories {
        respond_to: Response<Vec<String>>,
    },
}
