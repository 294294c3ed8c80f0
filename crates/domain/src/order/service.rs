//! Order service holding the single current-order slot.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{Order, OrderNumber, OrderView};
use crate::cart::CartAggregate;

#[derive(Debug, Default)]
struct Slot {
    current: Option<Order>,
    last_number: Option<OrderNumber>,
}

/// Service for placing orders from a cart.
///
/// Holds at most one order at a time. Placing a new order replaces the
/// current one; `reset` empties the slot. The cart is read, never modified.
pub struct OrderService {
    cart: Arc<CartAggregate>,
    slot: Mutex<Slot>,
}

impl OrderService {
    /// Creates an order service bound to the given cart.
    pub fn new(cart: Arc<CartAggregate>) -> Self {
        Self {
            cart,
            slot: Mutex::new(Slot::default()),
        }
    }

    /// Returns the cart orders are placed from.
    pub fn cart(&self) -> &Arc<CartAggregate> {
        &self.cart
    }

    fn slot(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Places an order from the bound cart.
    ///
    /// Returns false and leaves the slot untouched if the cart is empty.
    pub fn create_order(&self) -> bool {
        self.create_order_from(&self.cart)
    }

    /// Places an order from an arbitrary cart.
    #[tracing::instrument(skip(self, cart))]
    pub fn create_order_from(&self, cart: &CartAggregate) -> bool {
        let snapshot = cart.snapshot();
        let mut slot = self.slot();

        let Some(order) = Order::place(&snapshot, slot.last_number.as_ref()) else {
            metrics::counter!("orders_rejected_total").increment(1);
            tracing::warn!("order rejected: cart is empty");
            return false;
        };

        tracing::info!(
            order_number = %order.order_number(),
            total = %order.total(),
            items = snapshot.item_count,
            "order placed"
        );
        metrics::counter!("orders_created_total").increment(1);

        slot.last_number = Some(order.order_number().clone());
        slot.current = Some(order);
        true
    }

    /// Returns a view of the current order slot.
    pub fn current_order(&self) -> OrderView {
        OrderView::from(self.slot().current.as_ref())
    }

    /// Empties the order slot. A no-op if no order is held.
    #[tracing::instrument(skip(self))]
    pub fn reset(&self) {
        if self.slot().current.take().is_some() {
            tracing::debug!("order slot reset");
        }
    }
}
