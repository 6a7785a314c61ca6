use serde::{Deserialize, Serialize};

use crate::mediator::Request;

/// A message the caller wants echoed back.
///
/// `message` is `None` when the body was missing or a JSON `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct PingRequest {
    pub message: Option<String>,
}

impl PingRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// A request with no message at all.
    pub fn empty() -> Self {
        Self { message: None }
    }
}

impl Request for PingRequest {
    type Response = String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_json_string() {
        let req: PingRequest = serde_json::from_str("\"hello\"").unwrap();
        assert_eq!(req, PingRequest::new("hello"));

        let req: PingRequest = serde_json::from_str("null").unwrap();
        assert_eq!(req, PingRequest::empty());
    }

    #[test]
    fn test_rejects_non_string_json() {
        assert!(serde_json::from_str::<PingRequest>("{}").is_err());
        assert!(serde_json::from_str::<PingRequest>("42").is_err());
    }
}
