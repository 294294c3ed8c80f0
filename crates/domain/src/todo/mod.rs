//! Todo items and the service managing them.

mod item;
mod service;

pub use item::{DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS, TodoDraft, TodoId, TodoItem};
pub use service::{TodoList, TodoService};
