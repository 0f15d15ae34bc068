use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use super::{CatalogError, CatalogProduct, CatalogRequest, ProductPage, ProductQuery};
use crate::model::ProductId;

/// Client for querying the catalog actor.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
}

impl CatalogClient {
    pub fn new(sender: mpsc::Sender<CatalogRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: ProductQuery) -> Result<ProductPage, CatalogError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CatalogRequest::List { query, respond_to })
            .await
            .map_err(|_| CatalogError::ActorClosed)?;
        response.await.map_err(|_| CatalogError::ActorDropped)?
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: ProductId) -> Result<CatalogProduct, CatalogError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CatalogRequest::Get { id, respond_to })
            .await
            .map_err(|_| CatalogError::ActorClosed)?;
        response.await.map_err(|_| CatalogError::ActorDropped)?
    }

    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CatalogRequest::Categories { respond_to })
            .await
            .map_err(|_| CatalogError::ActorClosed)?;
        response.await.map_err(|_| CatalogError::ActorDropped)?
    }
}
