//! Todo service: CRUD, completion toggle and list statistics.

use entity_store::EntityStore;
use serde::Serialize;

use super::{TodoDraft, TodoId, TodoItem};
use crate::error::Result;

/// All todo items together with completion counts.
///
/// `completed_count + pending_count == total_count == items.len()` always
/// holds, because all four are derived from one store snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoList {
    pub total_count: usize,
    pub completed_count: usize,
    pub pending_count: usize,
    pub items: Vec<TodoItem>,
}

impl TodoList {
    fn from_items(items: Vec<TodoItem>) -> Self {
        let completed_count = items.iter().filter(|item| item.completed).count();
        Self {
            total_count: items.len(),
            completed_count,
            pending_count: items.len() - completed_count,
            items,
        }
    }
}

const SAMPLE_TODOS: [(&str, &str); 3] = [
    ("Go shopping", "Buy groceries at the supermarket"),
    ("Write the report", "Finish the project progress report"),
    ("Exercise", "30 minute jog"),
];

/// Service for managing todo items.
///
/// Generic over the backing store so tests and the composition root can
/// choose the implementation.
pub struct TodoService<S> {
    store: S,
}

impl<S> TodoService<S>
where
    S: EntityStore<TodoId, TodoItem>,
{
    /// Creates a new todo service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lists every item with completion statistics.
    #[tracing::instrument(skip(self))]
    pub fn list(&self) -> TodoList {
        TodoList::from_items(self.store.find_all())
    }

    /// Validates the input and stores a new pending item.
    #[tracing::instrument(skip(self))]
    pub fn add(&self, title: &str, description: Option<&str>) -> Result<TodoItem> {
        let draft = TodoDraft::parse(title, description)?;
        let item = TodoItem::new(self.store.next_id(), draft);
        self.store.save(item.clone());

        metrics::counter!("todo_items_created_total").increment(1);
        tracing::info!(id = %item.id, total = self.store.count(), "todo item created");
        Ok(item)
    }

    /// Returns the item with the given id.
    #[tracing::instrument(skip(self))]
    pub fn get_detail(&self, id: TodoId) -> Option<TodoItem> {
        self.store.find_by_id(id)
    }

    /// Replaces the title and description of an existing item.
    ///
    /// Input is validated before the lookup, so invalid input is rejected
    /// even for unknown ids. Returns `Ok(None)` if the id is unknown.
    #[tracing::instrument(skip(self))]
    pub fn update(
        &self,
        id: TodoId,
        title: &str,
        description: Option<&str>,
    ) -> Result<Option<TodoItem>> {
        let draft = TodoDraft::parse(title, description)?;
        let updated = self.store.modify(id, move |item| draft.apply_to(item));
        if updated.is_some() {
            tracing::debug!(%id, "todo item updated");
        }
        Ok(updated)
    }

    /// Flips the completion flag of an item.
    #[tracing::instrument(skip(self))]
    pub fn toggle(&self, id: TodoId) -> Option<TodoItem> {
        let toggled = self
            .store
            .modify(id, |item| item.completed = !item.completed)?;
        tracing::debug!(%id, completed = toggled.completed, "todo item toggled");
        Some(toggled)
    }

    /// Deletes an item. Returns true if it existed.
    #[tracing::instrument(skip(self))]
    pub fn delete(&self, id: TodoId) -> bool {
        let deleted = self.store.delete_by_id(id);
        if deleted {
            metrics::counter!("todo_items_deleted_total").increment(1);
            tracing::info!(%id, "todo item deleted");
        }
        deleted
    }

    /// Stores the three sample items shown on a fresh install.
    pub fn seed_samples(&self) -> Vec<TodoItem> {
        SAMPLE_TODOS
            .iter()
            .filter_map(|&(title, description)| self.add(title, Some(description)).ok())
            .collect()
    }
}
