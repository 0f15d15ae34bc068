use std::sync::Arc;

use rust_decimal::Decimal;

use crate::model::{round_money, LineItem, ProductId};

/// Read-only view of the cart: items plus derived totals.
///
/// The item list is shared behind an `Arc` and never mutated once a snapshot
/// exists; the store builds a fresh list on every change. Holding a snapshot
/// is therefore safe across later mutations.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    items: Arc<Vec<LineItem>>,
    total_items: u64,
    subtotal: Decimal,
}

impl CartSnapshot {
    pub fn empty() -> Self {
        Self {
            items: Arc::new(Vec::new()),
            total_items: 0,
            subtotal: Decimal::ZERO,
        }
    }

    /// Computes the derived totals for `items`.
    ///
    /// Returns `None` when the subtotal does not fit in a `Decimal`.
    pub fn from_items(items: Vec<LineItem>) -> Option<Self> {
        let subtotal = round_money(checked_subtotal(&items)?);
        let total_items = items.iter().map(|item| u64::from(item.quantity)).sum();
        Some(Self {
            items: Arc::new(items),
            total_items,
            subtotal,
        })
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of all quantities.
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Sum of `price × quantity`, rounded to cents.
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }
}

/// Unrounded sum of line totals, or `None` on overflow.
pub fn checked_subtotal(items: &[LineItem]) -> Option<Decimal> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |sum, item| sum.checked_add(item.line_total()?))
}

impl Default for CartSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
