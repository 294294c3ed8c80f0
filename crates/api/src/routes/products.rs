//! Product catalog endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use domain::{Product, TodoId, TodoItem};
use entity_store::EntityStore;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub price: String,
    pub stock: u32,
    pub out_of_stock: bool,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i64(),
            name: product.name.clone(),
            description: product.description.clone(),
            price_cents: product.price.cents(),
            price: product.price.to_decimal_string(),
            stock: product.stock,
            out_of_stock: product.is_out_of_stock(),
        }
    }
}

/// GET /products — every product in catalog order.
pub async fn list<S: EntityStore<TodoId, TodoItem> + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<Vec<ProductResponse>> {
    Json(state.catalog.all().iter().map(ProductResponse::from).collect())
}
