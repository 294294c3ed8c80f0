//! Shared types for the shop state core.

mod money;
mod types;

pub use money::Money;
pub use types::EntityId;
