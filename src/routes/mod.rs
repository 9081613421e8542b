//! HTTP route handlers.
//!
//! Both endpoints accept any method. Paths without a handler fall through
//! to an explicit 404.
//!
//! Each request gets a request id and a root span carrying it; the response
//! is logged with its status and latency when it completes.

pub mod health;
pub mod orders;

use axum::{http::StatusCode, routing::any, Router};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;

use crate::middleware::{propagate_request_id_layer, request_span, set_request_id_layer};
use crate::state::AppState;

/// Fallback for unregistered paths.
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 page not found")
}

/// Creates the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", any(health::health))
        .route("/orders", any(orders::list))
        .fallback(not_found)
        .with_state(state)
        .layer(propagate_request_id_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        // Outermost, so the trace span already sees the id
        .layer(set_request_id_layer())
}
