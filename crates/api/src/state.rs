//! Shared application state and the composition root.

use std::sync::Arc;

use domain::{CartAggregate, OrderService, ProductCatalog, TodoId, TodoItem, TodoService};
use entity_store::{EntityStore, InMemoryEntityStore};

use crate::config::Config;

/// The store backing todo items in the running server.
pub type TodoStore = InMemoryEntityStore<TodoId, TodoItem>;

/// Shared application state accessible from all handlers.
///
/// Every field is a process-wide singleton built once at start-up.
pub struct AppState<S: EntityStore<TodoId, TodoItem>> {
    pub todos: TodoService<S>,
    pub catalog: Arc<ProductCatalog>,
    pub cart: Arc<CartAggregate>,
    pub orders: OrderService,
}

impl<S: EntityStore<TodoId, TodoItem>> AppState<S> {
    /// Wires the services around the given todo store and catalog.
    pub fn new(store: S, catalog: Arc<ProductCatalog>) -> Self {
        let cart = Arc::new(CartAggregate::new(Arc::clone(&catalog)));
        Self {
            todos: TodoService::new(store),
            orders: OrderService::new(Arc::clone(&cart)),
            catalog,
            cart,
        }
    }
}

/// Creates the default application state: in-memory todo store, seeded
/// catalog, and an empty cart and order slot.
pub fn create_default_state(config: &Config) -> Arc<AppState<TodoStore>> {
    let state = AppState::new(TodoStore::new(), Arc::new(ProductCatalog::seeded()));
    if config.seed_sample_todos {
        let seeded = state.todos.seed_samples();
        tracing::info!(count = seeded.len(), "seeded sample todo items");
    }
    Arc::new(state)
}
