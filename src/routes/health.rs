//! Health check endpoint for container orchestration.
//!
//! Liveness probe that returns 200 with a JSON status whenever the process
//! can answer HTTP. Accepts every method.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Health check handler.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}
