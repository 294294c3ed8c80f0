use common::Money;
use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ProductId};

/// One product/quantity pairing within a cart.
///
/// Name and unit price are captured from the catalog when the line is first
/// created and are not refreshed on later merges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub product_name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl CartLine {
    pub(crate) fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            unit_price: product.price,
            quantity,
        }
    }

    /// Returns `unit_price × quantity`.
    pub fn subtotal(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}

/// Point-in-time view of a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub total: Money,
    pub item_count: u64,
    pub is_empty: bool,
}

impl CartSnapshot {
    pub(crate) fn from_lines(lines: Vec<CartLine>) -> Self {
        let total = lines.iter().map(CartLine::subtotal).sum();
        let item_count = lines.iter().map(|line| u64::from(line.quantity)).sum();
        Self {
            is_empty: lines.is_empty(),
            lines,
            total,
            item_count,
        }
    }
}
