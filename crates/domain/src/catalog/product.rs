use common::{EntityId, Money};
use serde::{Deserialize, Serialize};

/// Identifier of a catalog product.
pub type ProductId = EntityId;

/// A sellable item. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub stock: u32,
}

impl Product {
    /// Creates a new product.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        stock: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            stock,
        }
    }

    /// Returns true if no units are left.
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }
}
