//! Todo item entity and input normalization.

use chrono::{DateTime, Utc};
use common::EntityId;
use entity_store::Entity;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};

/// Identifier of a todo item.
pub type TodoId = EntityId;

/// Maximum title length, counted after trimming.
pub const TITLE_MAX_CHARS: usize = 100;

/// Maximum description length, counted after trimming.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

const CREATED_AT_FORMAT: &str = "%Y/%m/%d %H:%M";

/// A single todo entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    /// Creates a pending item stamped with the current time.
    pub fn new(id: TodoId, draft: TodoDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Returns the creation time as `yyyy/MM/dd HH:mm`.
    pub fn formatted_created_at(&self) -> String {
        self.created_at.format(CREATED_AT_FORMAT).to_string()
    }
}

impl Entity for TodoItem {
    type Key = TodoId;

    fn key(&self) -> TodoId {
        self.id
    }
}

/// Trimmed and validated title/description pair.
///
/// Both `add` and `update` go through [`TodoDraft::parse`], so every stored
/// item satisfies the same length and blankness rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    title: String,
    description: String,
}

impl TodoDraft {
    /// Trims and validates raw input. A missing description becomes empty.
    pub fn parse(title: &str, description: Option<&str>) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::validation("title", "must not be blank"));
        }
        if title.chars().count() > TITLE_MAX_CHARS {
            return Err(DomainError::validation(
                "title",
                format!("must be at most {TITLE_MAX_CHARS} characters"),
            ));
        }

        let description = description.map(str::trim).unwrap_or_default();
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(DomainError::validation(
                "description",
                format!("must be at most {DESCRIPTION_MAX_CHARS} characters"),
            ));
        }

        Ok(Self {
            title: title.to_string(),
            description: description.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Writes the draft's text onto an existing item, leaving identity,
    /// completion and creation time alone.
    pub fn apply_to(self, item: &mut TodoItem) {
        item.title = self.title;
        item.description = self.description;
    }
}
