//! Request correlation.
//!
//! Every request carries an `x-request-id`: the client's own value when one
//! is sent, otherwise a fresh UUID. The id is echoed on the response and
//! recorded on the request's tracing span, so all logs for a request can be
//! correlated.

use axum::extract::Request;
use http::HeaderName;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tracing::Span;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Assigns a UUID request id when the request has none.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER), MakeRequestUuid)
}

/// Copies the request id onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER))
}

/// Root span for a request, used by `TraceLayer::make_span_with`.
pub fn request_span(request: &Request) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    )
}
