//! Shopping cart: lines, snapshots and the aggregate holding them.

mod aggregate;
mod line;

pub use aggregate::CartAggregate;
pub use line::{CartLine, CartSnapshot};
