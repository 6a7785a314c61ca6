//! Error types surfaced by the request pipeline.

use std::collections::BTreeMap;

use axum::extract::rejection::BytesRejection;
use thiserror::Error;
use validator::ValidationErrors;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// One or more validation rules rejected the request.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationFailure),

    /// The body was present but not a JSON string.
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// The body could not be read (size limit, broken stream).
    #[error("Unreadable request body: {0}")]
    Body(#[from] BytesRejection),
}

/// Field-keyed validation messages, ordered by field name.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{}", join_errors(.errors))]
pub struct ValidationFailure {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationFailure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    /// Messages recorded against `field`, empty when the field passed.
    pub fn messages_for(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn into_errors(self) -> BTreeMap<String, Vec<String>> {
        self.errors
    }
}

impl From<ValidationErrors> for ValidationFailure {
    fn from(errors: ValidationErrors) -> Self {
        let mut failure = ValidationFailure::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                failure.push(field.to_string(), message);
            }
        }
        failure
    }
}

fn join_errors(errors: &BTreeMap<String, Vec<String>>) -> String {
    errors
        .iter()
        .flat_map(|(field, messages)| {
            messages
                .iter()
                .map(move |message| format!("{}: {}", field, message))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use validator::ValidationError;

    #[test]
    fn test_from_validation_errors_keeps_messages() {
        let mut errors = ValidationErrors::new();
        let mut error = ValidationError::new("length");
        error.message = Some(Cow::Borrowed("too long"));
        errors.add("message", error);
        errors.add("message", ValidationError::new("required"));

        let failure = ValidationFailure::from(errors);
        assert_eq!(failure.messages_for("message"), ["too long", "required"]);
        assert!(failure.messages_for("other").is_empty());
    }

    #[test]
    fn test_display_joins_pairs() {
        let mut failure = ValidationFailure::new();
        failure.push("b", "second");
        failure.push("a", "first");

        assert_eq!(failure.to_string(), "a: first; b: second");
        let err = AppError::from(failure);
        assert_eq!(err.to_string(), "Validation failed: a: first; b: second");
    }
}
