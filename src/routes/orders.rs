//! Order listing endpoint.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use http::header::{HeaderValue, CONTENT_TYPE};

use crate::error::AppError;
use crate::state::AppState;

const APPLICATION_JSON: &str = "application/json";

/// Returns every order as a JSON array, in store order.
///
/// The body is serialized before the response is built, so a failure turns
/// into a plain-text 500 without a JSON content type.
pub async fn list(State(state): State<AppState>) -> Result<Response, AppError> {
    let body = serde_json::to_vec(state.orders.all())?;
    tracing::debug!(count = state.orders.len(), "Listing orders");

    Ok((
        [(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))],
        body,
    )
        .into_response())
}
