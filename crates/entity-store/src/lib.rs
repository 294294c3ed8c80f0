//! Keyed in-memory storage with atomic identifier issuance.
//!
//! The [`EntityStore`] trait is the seam the domain services are written
//! against; [`InMemoryEntityStore`] is the process-local implementation.

pub mod memory;
pub mod store;

pub use common::EntityId;
pub use memory::InMemoryEntityStore;
pub use store::{Entity, EntityStore, SequentialKey};
