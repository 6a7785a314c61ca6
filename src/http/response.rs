//! Error responses.
//!
//! # Responsibilities
//! - Render every `AppError` as an RFC 7807 problem document
//! - Map error kinds to HTTP status codes
//!
//! # Design Decisions
//! - Validation failures list messages per field under `errors`
//! - Body read failures keep the status axum assigns (413, 400)

use std::collections::BTreeMap;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ValidationFailure};

pub const PROBLEM_JSON: &str = "application/problem+json";

const BAD_REQUEST_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.5.1";
const VALIDATION_TITLE: &str = "One or more validation errors occurred.";
const MALFORMED_TITLE: &str = "The request body is not a valid JSON string.";

/// Problem details payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ProblemDetails {
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        let kind = if status == StatusCode::BAD_REQUEST {
            BAD_REQUEST_TYPE
        } else {
            "about:blank"
        };
        Self {
            kind: kind.to_string(),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            errors: BTreeMap::new(),
        }
    }

    pub fn validation(failure: ValidationFailure) -> Self {
        Self {
            errors: failure.into_errors(),
            ..Self::new(StatusCode::BAD_REQUEST, VALIDATION_TITLE)
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, [(header::CONTENT_TYPE, PROBLEM_JSON)], Json(self)).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let problem = match self {
            AppError::Validation(failure) => ProblemDetails::validation(failure),
            AppError::MalformedBody(e) => {
                tracing::debug!(error = %e, "Rejecting malformed body");
                ProblemDetails::new(StatusCode::BAD_REQUEST, MALFORMED_TITLE)
                    .with_detail(e.to_string())
            }
            AppError::Body(rejection) => {
                let status = rejection.status();
                tracing::warn!(status = %status, error = %rejection, "Failed to read request body");
                ProblemDetails::new(
                    status,
                    status.canonical_reason().unwrap_or("Unreadable request body"),
                )
                .with_detail(rejection.body_text())
            }
        };
        problem.into_response()
    }
}
