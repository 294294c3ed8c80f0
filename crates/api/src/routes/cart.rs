//! Shopping cart endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use domain::{CartLine, CartSnapshot, TodoId, TodoItem};
use entity_store::EntityStore;
use serde::{Deserialize, Serialize};

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

// -- Request types --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: Option<i64>,
    pub quantity: Option<i64>,
}

// -- Response types --

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineResponse {
    pub product_id: i64,
    pub product_name: String,
    pub unit_price_cents: i64,
    pub unit_price: String,
    pub quantity: u32,
    pub subtotal_cents: i64,
    pub subtotal: String,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        let subtotal = line.subtotal();
        Self {
            product_id: line.product_id.as_i64(),
            unit_price_cents: line.unit_price.cents(),
            unit_price: line.unit_price.to_decimal_string(),
            quantity: line.quantity,
            subtotal_cents: subtotal.cents(),
            subtotal: subtotal.to_decimal_string(),
            product_name: line.product_name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineResponse>,
    pub total_cents: i64,
    pub total: String,
    pub item_count: u64,
    pub is_empty: bool,
}

impl From<CartSnapshot> for CartResponse {
    fn from(snapshot: CartSnapshot) -> Self {
        Self {
            total_cents: snapshot.total.cents(),
            total: snapshot.total.to_decimal_string(),
            item_count: snapshot.item_count,
            is_empty: snapshot.is_empty,
            items: snapshot
                .lines
                .into_iter()
                .map(CartLineResponse::from)
                .collect(),
        }
    }
}

// -- Handlers --

/// GET /cart — current lines and totals.
pub async fn get<S: EntityStore<TodoId, TodoItem> + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<CartResponse> {
    Json(state.cart.snapshot().into())
}

/// POST /cart/items — add units of a product.
#[tracing::instrument(skip(state, payload))]
pub async fn add_item<S: EntityStore<TodoId, TodoItem> + 'static>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<AddToCartRequest>, JsonRejection>,
) -> Result<Json<CartResponse>, ApiError> {
    let Json(req) = payload?;
    let product_id = req
        .product_id
        .ok_or_else(|| ApiError::BadRequest("productId is required".to_string()))?;
    let quantity = req
        .quantity
        .filter(|&q| q >= 1)
        .ok_or_else(|| ApiError::BadRequest("quantity must be at least 1".to_string()))?;
    let quantity = u32::try_from(quantity)
        .map_err(|_| ApiError::BadRequest(format!("quantity {quantity} is too large")))?;

    state.cart.add(product_id.into(), quantity)?;
    Ok(Json(state.cart.snapshot().into()))
}

/// DELETE /cart/items/{productId} — drop a product's line.
///
/// Removing a product that is not in the cart is not an error.
#[tracing::instrument(skip(state))]
pub async fn remove_item<S: EntityStore<TodoId, TodoItem> + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(product_id): Path<String>,
) -> Result<Json<CartResponse>, ApiError> {
    let product_id = parse_id(&product_id)?;
    state.cart.remove(product_id);
    Ok(Json(state.cart.snapshot().into()))
}

/// DELETE /cart — empty the cart.
#[tracing::instrument(skip(state))]
pub async fn clear<S: EntityStore<TodoId, TodoItem> + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<CartResponse> {
    state.cart.clear();
    Json(state.cart.snapshot().into())
}
