//! Request identification.
//!
//! # Responsibilities
//! - Generate a UUID v4 request ID when the client sent none
//! - Expose the ID to request spans
//! - Echo the ID back on the response
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - A client-supplied `x-request-id` is kept, not replaced

use axum::http::{HeaderName, Request};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Read access to the request ID header.
pub trait RequestIdExt {
    fn request_id(&self) -> Option<&str>;
}

impl<B> RequestIdExt for Request<B> {
    fn request_id(&self) -> Option<&str> {
        self.headers()
            .get(&X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
    }
}

/// Assigns an ID to requests that arrive without one.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid)
}

/// Copies the request ID onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(X_REQUEST_ID)
}
