//! Integration tests for the API server.

use std::sync::{Arc, OnceLock};

use api::{AppState, Config, TodoStore};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::{Value, json};
use tower::ServiceExt;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

fn get_metrics_handle() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
            builder
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

fn setup() -> axum::Router {
    setup_with_state().0
}

fn setup_with_state() -> (axum::Router, Arc<AppState<TodoStore>>) {
    let state = api::create_default_state(&Config::default());
    let app = api::create_app(state.clone(), get_metrics_handle());
    (app, state)
}

/// Sends one request and returns the status with the parsed JSON body
/// (`Value::Null` for an empty body).
async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_health_check() {
    let app = setup();
    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

mod todos {
    use super::*;

    #[tokio::test]
    async fn test_create_toggle_delete() {
        let app = setup();

        let (status, created) = send(
            &app,
            "POST",
            "/todo/list",
            Some(json!({ "title": " Buy milk " })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], 1);
        assert_eq!(created["title"], "Buy milk");
        assert_eq!(created["description"], "");
        assert_eq!(created["completed"], false);
        assert!(created["formattedCreatedAt"].is_string());

        let (status, toggled) = send(&app, "PATCH", "/todo/list/1/toggle", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(toggled, json!({ "id": 1, "completed": true }));

        let (status, _) = send(&app, "DELETE", "/todo/list/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, "GET", "/todo/detail/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());

        let (status, _) = send(&app, "DELETE", "/todo/list/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_counts() {
        let app = setup();
        for title in ["a", "b", "c"] {
            send(&app, "POST", "/todo/list", Some(json!({ "title": title }))).await;
        }
        send(&app, "PATCH", "/todo/list/2/toggle", None).await;

        let (status, list) = send(&app, "GET", "/todo/list", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list["totalCount"], 3);
        assert_eq!(list["completedCount"], 1);
        assert_eq!(list["pendingCount"], 2);
        assert_eq!(list["items"].as_array().unwrap().len(), 3);
        assert_eq!(list["items"][1]["completed"], true);
    }

    #[tokio::test]
    async fn test_blank_title_is_rejected() {
        let app = setup();

        let (status, body) =
            send(&app, "POST", "/todo/list", Some(json!({ "title": "   " }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid title: must not be blank");

        let (status, _) = send(&app, "POST", "/todo/list", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_mistyped_title_is_rejected_as_json_error() {
        let app = setup();

        let (status, body) = send(&app, "POST", "/todo/list", Some(json!({ "title": 5 }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        send(&app, "POST", "/todo/list", Some(json!({ "title": "keep" }))).await;
        let (status, body) = send(
            &app,
            "PUT",
            "/todo/detail/1",
            Some(json!({ "title": "T", "description": ["D"] })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (_, detail) = send(&app, "GET", "/todo/detail/1", None).await;
        assert_eq!(detail["title"], "keep");
    }

    #[tokio::test]
    async fn test_long_description_is_rejected() {
        let app = setup();
        let description = "x".repeat(501);

        let (status, _) = send(
            &app,
            "POST",
            "/todo/list",
            Some(json!({ "title": "ok", "description": description })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_detail() {
        let app = setup();
        send(&app, "POST", "/todo/list", Some(json!({ "title": "Draft" }))).await;

        let (status, updated) = send(
            &app,
            "PUT",
            "/todo/detail/1",
            Some(json!({ "title": "T", "description": "D" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["title"], "T");
        assert_eq!(updated["description"], "D");

        let (_, detail) = send(&app, "GET", "/todo/detail/1", None).await;
        assert_eq!(detail["title"], "T");
    }

    #[tokio::test]
    async fn test_update_unknown_and_invalid() {
        let app = setup();

        let (status, _) = send(
            &app,
            "PUT",
            "/todo/detail/42",
            Some(json!({ "title": "T" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &app,
            "PUT",
            "/todo/detail/42",
            Some(json!({ "title": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_invalid_id_format() {
        let app = setup();
        let (status, body) = send(&app, "GET", "/todo/detail/not-a-number", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("Invalid ID format"));
    }

    #[tokio::test]
    async fn test_seeded_state_lists_samples() {
        let config = Config {
            seed_sample_todos: true,
            ..Config::default()
        };
        let app = api::create_app(api::create_default_state(&config), get_metrics_handle());

        let (_, list) = send(&app, "GET", "/todo/list", None).await;
        assert_eq!(list["totalCount"], 3);
        assert_eq!(list["items"][0]["id"], 1);
    }
}

mod shop {
    use super::*;

    #[tokio::test]
    async fn test_products_are_seeded() {
        let app = setup();
        let (status, products) = send(&app, "GET", "/products", None).await;

        assert_eq!(status, StatusCode::OK);
        let products = products.as_array().unwrap();
        assert_eq!(products.len(), 5);
        assert_eq!(products[0]["name"], "Laptop");
        assert_eq!(products[0]["priceCents"], 99999);
        assert_eq!(products[0]["price"], "999.99");
        assert_eq!(products[0]["outOfStock"], false);
    }

    #[tokio::test]
    async fn test_cart_merge_and_remove() {
        let app = setup();

        send(
            &app,
            "POST",
            "/cart/items",
            Some(json!({ "productId": 1, "quantity": 2 })),
        )
        .await;
        let (status, cart) = send(
            &app,
            "POST",
            "/cart/items",
            Some(json!({ "productId": 1, "quantity": 3 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cart["items"].as_array().unwrap().len(), 1);
        assert_eq!(cart["items"][0]["quantity"], 5);
        assert_eq!(cart["items"][0]["productName"], "Laptop");
        assert_eq!(cart["itemCount"], 5);
        assert_eq!(cart["totalCents"], 499995);
        assert_eq!(cart["total"], "4999.95");

        let (status, cart) = send(&app, "DELETE", "/cart/items/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cart["isEmpty"], true);

        let (status, _) = send(&app, "DELETE", "/cart/items/1", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cart_rejects_bad_input() {
        let app = setup();

        let (status, _) = send(
            &app,
            "POST",
            "/cart/items",
            Some(json!({ "productId": 999, "quantity": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &app,
            "POST",
            "/cart/items",
            Some(json!({ "productId": 1, "quantity": 0 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "POST", "/cart/items", Some(json!({ "quantity": 1 }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "POST", "/cart/items", Some(json!({ "productId": 1 }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, cart) = send(&app, "GET", "/cart", None).await;
        assert_eq!(cart["isEmpty"], true);
    }

    #[tokio::test]
    async fn test_cart_rejects_mistyped_body_as_json_error() {
        let app = setup();

        for body in [
            json!({ "productId": 1, "quantity": "two" }),
            json!({ "productId": 1, "quantity": 1.5 }),
            json!({ "productId": "one", "quantity": 1 }),
        ] {
            let (status, error) = send(&app, "POST", "/cart/items", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(error["error"].is_string());
        }

        let (_, cart) = send(&app, "GET", "/cart", None).await;
        assert_eq!(cart["isEmpty"], true);
    }

    #[tokio::test]
    async fn test_clear_cart() {
        let (app, state) = setup_with_state();
        send(
            &app,
            "POST",
            "/cart/items",
            Some(json!({ "productId": 2, "quantity": 4 })),
        )
        .await;

        let (status, cart) = send(&app, "DELETE", "/cart", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cart["itemCount"], 0);
        assert!(state.cart.is_empty());
    }

    #[tokio::test]
    async fn test_order_from_empty_cart_is_rejected() {
        let app = setup();

        let (status, body) = send(&app, "POST", "/orders", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Cart is empty");

        let (_, current) = send(&app, "GET", "/orders/current", None).await;
        assert_eq!(current["status"], "NONE");
        assert_eq!(current["orderCompleted"], false);
        assert!(current["orderNumber"].is_null());
    }

    #[tokio::test]
    async fn test_place_and_reset_order() {
        let (app, state) = setup_with_state();
        send(
            &app,
            "POST",
            "/cart/items",
            Some(json!({ "productId": 2, "quantity": 2 })),
        )
        .await;

        let (status, order) = send(&app, "POST", "/orders", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(order["status"], "COMPLETED");
        assert_eq!(order["orderCompleted"], true);
        assert_eq!(order["totalCents"], 5998);
        assert_eq!(order["total"], "59.98");
        assert_eq!(order["orderNumber"].as_str().unwrap().len(), 8);
        assert_eq!(order["formattedOrderDate"].as_str().unwrap().len(), 19);

        // Placing an order leaves the cart alone.
        assert!(!state.cart.is_empty());

        let (status, reset) = send(&app, "DELETE", "/orders/current", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(reset["status"], "NONE");
        assert!(reset["formattedOrderDate"].is_null());
        assert!(reset["totalCents"].is_null());
    }

    #[tokio::test]
    async fn test_metrics_exposes_order_counter() {
        let app = setup();
        send(
            &app,
            "POST",
            "/cart/items",
            Some(json!({ "productId": 3, "quantity": 1 })),
        )
        .await;
        send(&app, "POST", "/orders", None).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/metrics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("orders_created_total"));
    }
}
