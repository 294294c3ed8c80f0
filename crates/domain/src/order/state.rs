//! Order slot state machine.

use serde::{Deserialize, Serialize};

/// The state of the current-order slot.
///
/// State transitions:
/// ```text
///            create_order (cart not empty)
/// None ─────────────────────────────────► Completed
///   ▲                                        │
///   └──────────────── reset ◄────────────────┘
/// ```
/// `reset` on `None` is a no-op; `create_order` on `Completed` replaces the
/// previous order with a fresh snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// No order has been placed since start or the last reset.
    #[default]
    None,

    /// An order has been placed and captured.
    Completed,
}

impl OrderStatus {
    /// Returns true if an order is held.
    pub fn is_completed(&self) -> bool {
        matches!(self, OrderStatus::Completed)
    }

    /// Returns the state name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::None => "NONE",
            OrderStatus::Completed => "COMPLETED",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
