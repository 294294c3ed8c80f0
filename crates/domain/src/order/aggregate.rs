//! Placed order record and its read view.

use chrono::{DateTime, Utc};
use common::Money;
use serde::{Deserialize, Serialize};

use super::{OrderNumber, OrderStatus};
use crate::cart::CartSnapshot;

/// Display format for order dates.
const ORDER_DATE_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// A placed order.
///
/// Captures the cart total at the moment of placement; later cart changes
/// do not affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Short human-readable order number.
    order_number: OrderNumber,

    /// Cart total at placement time.
    total: Money,

    /// When the order was placed.
    order_date: DateTime<Utc>,
}

impl Order {
    /// Places an order from a non-empty cart snapshot.
    ///
    /// Returns `None` if the snapshot has no lines.
    pub(crate) fn place(
        snapshot: &CartSnapshot,
        previous_number: Option<&OrderNumber>,
    ) -> Option<Self> {
        if snapshot.is_empty {
            return None;
        }
        Some(Self {
            order_number: OrderNumber::generate(previous_number),
            total: snapshot.total,
            order_date: Utc::now(),
        })
    }

    pub fn order_number(&self) -> &OrderNumber {
        &self.order_number
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn order_date(&self) -> DateTime<Utc> {
        self.order_date
    }

    /// A held order is always completed.
    pub fn status(&self) -> OrderStatus {
        OrderStatus::Completed
    }
}

/// Read view of the current-order slot.
///
/// All optional fields are `None` exactly when `status` is
/// [`OrderStatus::None`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderView {
    pub order_number: Option<OrderNumber>,
    pub total: Option<Money>,
    pub order_date: Option<DateTime<Utc>>,
    pub status: OrderStatus,
    pub order_completed: bool,
}

impl OrderView {
    /// View of an empty slot.
    pub fn empty() -> Self {
        Self {
            order_number: None,
            total: None,
            order_date: None,
            status: OrderStatus::None,
            order_completed: false,
        }
    }

    /// Returns the order date as `yyyy/MM/dd HH:mm:ss`, if an order is held.
    pub fn formatted_order_date(&self) -> Option<String> {
        self.order_date
            .map(|date| date.format(ORDER_DATE_FORMAT).to_string())
    }
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            order_number: Some(order.order_number.clone()),
            total: Some(order.total),
            order_date: Some(order.order_date),
            status: order.status(),
            order_completed: order.status().is_completed(),
        }
    }
}

impl From<Option<&Order>> for OrderView {
    fn from(order: Option<&Order>) -> Self {
        order.map_or_else(Self::empty, Self::from)
    }
}
