//! Order placement from a cart.

mod aggregate;
mod service;
mod state;
mod value_objects;

pub use aggregate::{Order, OrderView};
pub use service::OrderService;
pub use state::OrderStatus;
pub use value_objects::{ORDER_NUMBER_LEN, OrderNumber};
