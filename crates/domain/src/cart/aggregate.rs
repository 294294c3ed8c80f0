//! Shopping cart aggregate.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{CartLine, CartSnapshot};
use crate::catalog::{ProductCatalog, ProductId};
use crate::error::{DomainError, Result};

/// Mutable collection of cart lines backed by catalog lookups.
///
/// All line state sits behind one mutex, so `add`, `remove`, `clear` and
/// `snapshot` are each atomic. Sequences of calls are not transactional.
pub struct CartAggregate {
    catalog: Arc<ProductCatalog>,
    lines: Mutex<Vec<CartLine>>,
}

impl CartAggregate {
    /// Creates an empty cart over the given catalog.
    pub fn new(catalog: Arc<ProductCatalog>) -> Self {
        Self {
            catalog,
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Returns the catalog this cart resolves products against.
    pub fn catalog(&self) -> &Arc<ProductCatalog> {
        &self.catalog
    }

    fn lines(&self) -> MutexGuard<'_, Vec<CartLine>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds `quantity` units of a product.
    ///
    /// Merges into the existing line for the product if there is one;
    /// otherwise appends a new line priced from the current catalog entry.
    #[tracing::instrument(skip(self))]
    pub fn add(&self, product_id: ProductId, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity", "must be at least 1"));
        }
        let product = self
            .catalog
            .find_by_id(product_id)
            .ok_or_else(|| DomainError::not_found("Product", product_id))?;

        let mut lines = self.lines();
        let existing = lines.iter().position(|line| line.product_id == product_id);
        let (unit_price, new_quantity) = match existing {
            Some(index) => (
                lines[index].unit_price,
                lines[index]
                    .quantity
                    .checked_add(quantity)
                    .ok_or_else(|| DomainError::validation("quantity", "cart line is full"))?,
            ),
            None => (product.price, quantity),
        };

        // Every line subtotal and the cart total must stay representable.
        let too_large = || DomainError::validation("quantity", "cart total is too large");
        let subtotal = unit_price
            .checked_multiply(new_quantity)
            .ok_or_else(too_large)?;
        lines
            .iter()
            .enumerate()
            .filter(|&(index, _)| Some(index) != existing)
            .try_fold(subtotal, |total, (_, line)| {
                total.checked_add(line.subtotal())
            })
            .ok_or_else(too_large)?;

        match existing {
            Some(index) => {
                lines[index].quantity = new_quantity;
                tracing::debug!(%product_id, quantity = new_quantity, "cart line merged");
            }
            None => {
                lines.push(CartLine::from_product(product, quantity));
                tracing::debug!(%product_id, quantity, "cart line added");
            }
        }

        metrics::counter!("cart_items_added_total").increment(u64::from(quantity));
        Ok(())
    }

    /// Removes the line for a product. Returns true if a line was removed.
    #[tracing::instrument(skip(self))]
    pub fn remove(&self, product_id: ProductId) -> bool {
        let mut lines = self.lines();
        let before = lines.len();
        lines.retain(|line| line.product_id != product_id);
        lines.len() != before
    }

    /// Removes every line.
    #[tracing::instrument(skip(self))]
    pub fn clear(&self) {
        self.lines().clear();
    }

    /// Returns the lines in insertion order with their aggregate totals.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::from_lines(self.lines().clone())
    }

    /// Returns true if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }
}
