//! Domain error types.

use thiserror::Error;

/// Errors that can occur during domain operations.
///
/// A failed operation never leaves partial state behind: validation runs
/// before any store or aggregate is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// An input value was blank, too long, or out of range.
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// The referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

impl DomainError {
    /// Builds a validation error for the named field.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Builds a not-found error for the given entity kind and id.
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Convenience type alias for domain results.
pub type Result<T> = std::result::Result<T, DomainError>;
