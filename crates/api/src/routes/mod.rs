//! HTTP route handlers.
//!
//! Money fields go over the wire twice: `*Cents` as an exact integer and the
//! plain field as a decimal string for display.

pub mod cart;
pub mod health;
pub mod metrics;
pub mod orders;
pub mod products;
pub mod todos;

use common::EntityId;

use crate::error::ApiError;

fn parse_id(id: &str) -> Result<EntityId, ApiError> {
    id.parse()
        .map_err(|e| ApiError::BadRequest(format!("Invalid ID format: {e}")))
}
