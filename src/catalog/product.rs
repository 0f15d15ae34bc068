use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{Product, ProductId};

/// A product as the catalog lists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub category: String,
    pub slug: String,
    pub stock: u32,
    pub rating: f32,
    pub image_url: String,
}

impl CatalogProduct {
    /// The `{id, name, price}` triple the cart accepts.
    pub fn to_product(&self) -> Product {
        Product::new(self.id.clone(), self.name.clone(), self.price)
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Listing query. `page` is 1-based; `category` of `None` or `"all"` lists everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub page: usize,
    pub limit: usize,
    pub category: Option<String>,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            category: None,
        }
    }
}

impl ProductQuery {
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub products: Vec<CatalogProduct>,
    /// Matching products across all pages.
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}
