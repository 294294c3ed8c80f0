//! Read-only product catalog.

mod product;

use std::collections::HashSet;

use common::Money;

use crate::error::{DomainError, Result};

pub use product::{Product, ProductId};

/// Seeded, read-mostly lookup of sellable items.
///
/// Products keep the order they were registered in.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Builds a catalog, rejecting negative prices and duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.price.is_negative() {
                return Err(DomainError::validation(
                    "price",
                    format!("product {} has a negative price", product.id),
                ));
            }
            if !seen.insert(product.id) {
                return Err(DomainError::validation(
                    "id",
                    format!("product {} is registered twice", product.id),
                ));
            }
        }
        Ok(Self { products })
    }

    /// The five products the shop starts with.
    pub fn seeded() -> Self {
        Self {
            products: vec![
                Product::new(
                    ProductId::new(1),
                    "Laptop",
                    "High-performance laptop",
                    Money::from_major_minor(999, 99),
                    10,
                ),
                Product::new(
                    ProductId::new(2),
                    "Mouse",
                    "Wireless mouse",
                    Money::from_major_minor(29, 99),
                    50,
                ),
                Product::new(
                    ProductId::new(3),
                    "Keyboard",
                    "Mechanical keyboard",
                    Money::from_major_minor(149, 99),
                    25,
                ),
                Product::new(
                    ProductId::new(4),
                    "Monitor",
                    "4K Monitor",
                    Money::from_major_minor(399, 99),
                    15,
                ),
                Product::new(
                    ProductId::new(5),
                    "Headphones",
                    "Noise-canceling headphones",
                    Money::from_major_minor(199, 99),
                    30,
                ),
            ],
        }
    }

    /// Returns every product in registration order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Returns the product with the given id.
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Returns true if the product has no stock.
    ///
    /// An unknown id counts as out of stock: unknown implies unavailable.
    pub fn is_out_of_stock(&self, id: ProductId) -> bool {
        self.find_by_id(id).is_none_or(Product::is_out_of_stock)
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}
