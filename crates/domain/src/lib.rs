//! Domain layer for the shop core.
//!
//! This crate provides:
//! - Todo items with validation, persisted through an `EntityStore`
//! - A seeded, read-only product catalog
//! - A cart aggregate that merges lines per product
//! - An order service that snapshots the cart into a single current order

pub mod cart;
pub mod catalog;
pub mod error;
pub mod order;
pub mod todo;

pub use cart::{CartAggregate, CartLine, CartSnapshot};
pub use catalog::{Product, ProductCatalog, ProductId};
pub use error::{DomainError, Result};
pub use order::{Order, OrderNumber, OrderService, OrderStatus, OrderView};
pub use todo::{
    DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS, TodoDraft, TodoId, TodoItem, TodoList, TodoService,
};
