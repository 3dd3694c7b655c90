//! Request correlation via `X-Request-Id`
//!
//! A well-formed UUID supplied by the caller is kept; anything else is
//! replaced by a fresh UUID v7. The id wraps the rest of the request in a
//! tracing span and is echoed on the response.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// The header name for the request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID carried by the request span and response header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl RequestId {
    /// Reuse a caller-supplied id if it parses, otherwise mint one
    fn from_header(value: Option<&HeaderValue>) -> Self {
        Self(
            value
                .and_then(|v| v.to_str().ok())
                .and_then(|s| Uuid::parse_str(s.trim()).ok())
                .unwrap_or_else(Uuid::now_v7),
        )
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `axum::middleware::from_fn` handler
pub async fn propagate_request_id(request: Request, next: Next) -> Response {
    let request_id = RequestId::from_header(request.headers().get(REQUEST_ID_HEADER));

    let span = tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri().path(),
    );

    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    response
}
