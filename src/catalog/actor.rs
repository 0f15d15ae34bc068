//! # Catalog Actor
//!
//! Serves the mock product list. Each request waits out a fixed simulated
//! latency before answering (half of it for the category list), standing in for
//! a backend round trip. Requests are handled one at a time.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::{CatalogClient, CatalogError, CatalogProduct, CatalogRequest, ProductPage, ProductQuery};
use crate::model::ProductId;

/// Category value that disables filtering.
pub const ALL_CATEGORIES: &str = "all";

pub struct CatalogActor {
    receiver: mpsc::Receiver<CatalogRequest>,
    products: Vec<CatalogProduct>,
    latency: Duration,
}

impl CatalogActor {
    /// Creates a catalog over `products` and its client.
    ///
    /// # Arguments
    ///
    /// * `products` - The listing, in display order
    /// * `latency` - Simulated delay applied to every request
    /// * `buffer_size` - Capacity of the request channel
    pub fn new(
        products: Vec<CatalogProduct>,
        latency: Duration,
        buffer_size: usize,
    ) -> (Self, CatalogClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            products,
            latency,
        };
        (actor, CatalogClient::new(sender))
    }

    pub async fn run(mut self) {
        info!(products = self.products.len(), "Catalog started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::List { query, respond_to } => {
                    tokio::time::sleep(self.latency).await;
                    debug!(?query, "List");
                    let result = self.list(&query);
                    if let Err(e) = &result {
                        warn!(error = %e, "List failed");
                    }
                    let _ = respond_to.send(result);
                }
                CatalogRequest::Get { id, respond_to } => {
                    tokio::time::sleep(self.latency).await;
                    let result = self.get(&id);
                    debug!(%id, found = result.is_ok(), "Get");
                    let _ = respond_to.send(result);
                }
                CatalogRequest::Categories { respond_to } => {
                    tokio::time::sleep(self.latency / 2).await;
                    debug!("Categories");
                    let _ = respond_to.send(Ok(self.categories()));
                }
            }
        }

        info!("Catalog shutdown");
    }

    fn list(&self, query: &ProductQuery) -> Result<ProductPage, CatalogError> {
        if query.page == 0 || query.limit == 0 {
            return Err(CatalogError::InvalidQuery(format!(
                "page and limit must be at least 1 (page={}, limit={})",
                query.page, query.limit
            )));
        }
        let matching: Vec<&CatalogProduct> = match query.category.as_deref() {
            None | Some(ALL_CATEGORIES) => self.products.iter().collect(),
            Some(category) => self
                .products
                .iter()
                .filter(|p| p.category == category)
                .collect(),
        };

        let total = matching.len();
        let products = matching
            .into_iter()
            .skip((query.page - 1).saturating_mul(query.limit))
            .take(query.limit)
            .cloned()
            .collect();

        Ok(ProductPage {
            products,
            total,
            page: query.page,
            limit: query.limit,
            total_pages: total.div_ceil(query.limit),
        })
    }

    fn get(&self, id: &ProductId) -> Result<CatalogProduct, CatalogError> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock_products;

    fn actor() -> CatalogActor {
        CatalogActor::new(mock_products(), Duration::ZERO, 4).0
    }

    #[test]
    fn lists_everything_by_default() {
        let page = actor().list(&ProductQuery::default()).unwrap();
        assert_eq!(page.total, 6);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.products.len(), 6);
        assert_eq!(page.products[0].id, ProductId::from("p1001"));
    }

    #[test]
    fn filters_by_category() {
        let actor = actor();
        let page = actor.list(&ProductQuery::category("apparel")).unwrap();
        let ids: Vec<_> = page.products.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, ["p1002", "p1006"]);

        let all = actor.list(&ProductQuery::category("all")).unwrap();
        assert_eq!(all.total, 6);

        let none = actor.list(&ProductQuery::category("garden")).unwrap();
        assert_eq!(none.total, 0);
        assert_eq!(none.total_pages, 0);
    }

    #[test]
    fn paginates() {
        let actor = actor();
        let query = ProductQuery {
            page: 2,
            limit: 4,
            category: None,
        };
        let page = actor.list(&query).unwrap();
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.products.len(), 2);
        assert_eq!(page.products[0].id, ProductId::from("p1005"));

        let past_end = actor
            .list(&ProductQuery {
                page: 9,
                ..query.clone()
            })
            .unwrap();
        assert!(past_end.products.is_empty());
        assert_eq!(past_end.total, 6);
    }

    #[test]
    fn rejects_zero_page_or_limit() {
        let actor = actor();
        let zero_page = ProductQuery {
            page: 0,
            ..ProductQuery::default()
        };
        assert!(matches!(
            actor.list(&zero_page),
            Err(CatalogError::InvalidQuery(_))
        ));
    }

    #[test]
    fn categories_start_with_all_in_first_seen_order() {
        assert_eq!(
            actor().categories(),
            ["all", "electronics", "apparel", "accessories", "home-goods"]
        );
    }
}
