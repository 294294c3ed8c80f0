//! Order placement endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use chrono::{DateTime, Utc};
use domain::{OrderStatus, OrderView, TodoId, TodoItem};
use entity_store::EntityStore;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_number: Option<String>,
    pub total_cents: Option<i64>,
    pub total: Option<String>,
    pub order_date: Option<DateTime<Utc>>,
    pub formatted_order_date: Option<String>,
    pub status: OrderStatus,
    pub order_completed: bool,
}

impl From<OrderView> for OrderResponse {
    fn from(view: OrderView) -> Self {
        Self {
            formatted_order_date: view.formatted_order_date(),
            order_number: view.order_number.map(|n| n.to_string()),
            total_cents: view.total.map(|t| t.cents()),
            total: view.total.map(|t| t.to_decimal_string()),
            order_date: view.order_date,
            status: view.status,
            order_completed: view.order_completed,
        }
    }
}

/// POST /orders — place an order from the shared cart.
#[tracing::instrument(skip(state))]
pub async fn create<S: EntityStore<TodoId, TodoItem> + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<OrderResponse>, ApiError> {
    if !state.orders.create_order() {
        return Err(ApiError::BadRequest("Cart is empty".to_string()));
    }
    Ok(Json(state.orders.current_order().into()))
}

/// GET /orders/current — the current order slot.
pub async fn current<S: EntityStore<TodoId, TodoItem> + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<OrderResponse> {
    Json(state.orders.current_order().into())
}

/// DELETE /orders/current — empty the order slot.
#[tracing::instrument(skip(state))]
pub async fn reset<S: EntityStore<TodoId, TodoItem> + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<OrderResponse> {
    state.orders.reset();
    Json(state.orders.current_order().into())
}
