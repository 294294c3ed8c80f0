//! HTTP API server for the todo, catalog, cart and order services.
//!
//! Provides REST endpoints over the synchronous domain core, with
//! structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, patch, post};
use domain::{TodoId, TodoItem};
use entity_store::EntityStore;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use state::{AppState, TodoStore, create_default_state};

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S>(state: Arc<AppState<S>>, metrics_handle: PrometheusHandle) -> Router
where
    S: EntityStore<TodoId, TodoItem> + 'static,
{
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route(
            "/todo/list",
            get(routes::todos::list::<S>).post(routes::todos::create::<S>),
        )
        .route("/todo/list/{id}", delete(routes::todos::delete::<S>))
        .route("/todo/list/{id}/toggle", patch(routes::todos::toggle::<S>))
        .route(
            "/todo/detail/{id}",
            get(routes::todos::detail::<S>).put(routes::todos::update::<S>),
        )
        .route("/products", get(routes::products::list::<S>))
        .route(
            "/cart",
            get(routes::cart::get::<S>).delete(routes::cart::clear::<S>),
        )
        .route("/cart/items", post(routes::cart::add_item::<S>))
        .route(
            "/cart/items/{product_id}",
            delete(routes::cart::remove_item::<S>),
        )
        .route("/orders", post(routes::orders::create::<S>))
        .route(
            "/orders/current",
            get(routes::orders::current::<S>).delete(routes::orders::reset::<S>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
