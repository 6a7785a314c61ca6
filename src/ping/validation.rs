//! Validation rules for [`PingRequest`].
//!
//! Two independent rules over `message`. Length is counted in characters
//! (Unicode scalar values), not bytes.

use std::borrow::Cow;

use validator::{Validate, ValidateLength, ValidationError, ValidationErrors};

use crate::ping::PingRequest;

/// Longest message the service will echo.
pub const MAX_MESSAGE_CHARS: usize = 512;

pub const EMPTY_MESSAGE: &str = "We need to know what you want from us";
pub const MESSAGE_TOO_LONG: &str = "We will not reply with more than 512 characters";

const FIELD: &str = "message";

fn rule_violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

impl Validate for PingRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let message = self.message.as_deref().unwrap_or_default();
        let mut violations = Vec::new();

        if !message.validate_length(Some(1), None, None) {
            violations.push(rule_violation("required", EMPTY_MESSAGE));
        }
        if !message.validate_length(None, Some(MAX_MESSAGE_CHARS as u64), None) {
            violations.push(rule_violation("length", MESSAGE_TOO_LONG));
        }

        if violations.is_empty() {
            return Ok(());
        }
        let mut errors = ValidationErrors::new();
        for violation in violations {
            errors.add(FIELD, violation);
        }
        Err(errors)
    }
}
