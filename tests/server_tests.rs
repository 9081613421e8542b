//! End-to-end tests over a real TCP listener.
//!
//! Each test binds the server to an ephemeral port on 127.0.0.1 and talks to
//! it with reqwest.

use futures::future::join_all;
use serde_json::json;

use orders_api::http::{bind, serve};
use orders_api::{create_router, AppState, OrderStore};

/// Starts the server in the background and returns its base URL.
async fn spawn_server() -> String {
    let listener = bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(AppState::new(OrderStore::seeded()));

    tokio::spawn(async move {
        serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn health_over_tcp() {
    let base = spawn_server().await;
    let response = reqwest::get(format!("{base}/health")).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response.headers()[reqwest::header::CONTENT_TYPE],
        "application/json"
    );
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_orders_requests_all_see_the_same_records() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();
    let expected = json!([
        {"id": "1", "product": "Widget A", "quantity": 2, "price": 9.99},
        {"id": "2", "product": "Widget B", "quantity": 1, "price": 24.99},
    ]);

    let requests = (0..32).map(|_| {
        let client = client.clone();
        let url = format!("{base}/orders");
        tokio::spawn(async move {
            let response = client.get(url).send().await.unwrap();
            assert_eq!(response.status(), reqwest::StatusCode::OK);
            response.json::<serde_json::Value>().await.unwrap()
        })
    });

    for body in join_all(requests).await {
        assert_eq!(body.unwrap(), expected);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn unknown_path_over_tcp_is_404() {
    let base = spawn_server().await;
    let response = reqwest::get(format!("{base}/unknown")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}
