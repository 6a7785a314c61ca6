//! The `/ping` controller.
//!
//! # Responsibilities
//! - `GET /ping`: liveness reply, takes no input
//! - `POST /ping`: turn the JSON string body into a `PingRequest` and send it
//!   through the mediator
//!
//! # Design Decisions
//! - An empty (or whitespace-only) body is an absent message, left for
//!   validation to reject rather than failing JSON parsing
//! - Content-Type is not enforced; the body must parse as a JSON string

use axum::{
    body::Bytes,
    extract::{FromRequest, Request, State},
};

use crate::error::AppError;
use crate::http::server::AppState;
use crate::ping::PingRequest;

pub const PONG: &str = "Pong!";

pub async fn pong() -> &'static str {
    PONG
}

pub async fn echo(
    State(state): State<AppState>,
    request: PingRequest,
) -> Result<String, AppError> {
    state.mediator.send(request).await
}

/// Interpret a raw request body as a ping request.
pub fn parse_body(body: &[u8]) -> Result<PingRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(PingRequest::empty());
    }
    Ok(serde_json::from_slice(body)?)
}

impl<S> FromRequest<S> for PingRequest
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await?;
        parse_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(b"").unwrap(), PingRequest::empty());
        assert_eq!(parse_body(b" \r\n").unwrap(), PingRequest::empty());
        assert_eq!(parse_body(b"null").unwrap(), PingRequest::empty());
        assert_eq!(parse_body(b"\"\"").unwrap(), PingRequest::new(""));
        assert_eq!(parse_body(b"\"hello\"").unwrap(), PingRequest::new("hello"));
    }

    #[test]
    fn test_parse_body_rejects_non_strings() {
        for body in [&b"hello"[..], b"{}", b"[\"a\"]", b"12"] {
            assert!(matches!(parse_body(body), Err(AppError::MalformedBody(_))));
        }
    }
}
