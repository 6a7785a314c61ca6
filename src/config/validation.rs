//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ConfigViolation>>

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::ServiceConfig;
use crate::ping::MAX_MESSAGE_CHARS;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// One semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigViolation {
    /// Dotted path of the offending field, e.g. `listener.bind_address`.
    pub field: &'static str,
    pub reason: String,
}

impl ConfigViolation {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Check a parsed configuration for values serde cannot reject.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ConfigViolation>> {
    let mut violations = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        violations.push(ConfigViolation::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        ));
    }

    if config.timeouts.request_secs == 0 {
        violations.push(ConfigViolation::new(
            "timeouts.request_secs",
            "must be greater than zero",
        ));
    }

    // A maximal message of multi-byte characters, quoted, must still fit.
    let min_body = MAX_MESSAGE_CHARS * 4 + 2;
    if config.limits.max_body_bytes < min_body {
        violations.push(ConfigViolation::new(
            "limits.max_body_bytes",
            format!("must be at least {} bytes", min_body),
        ));
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        violations.push(ConfigViolation::new(
            "observability.log_level",
            format!("unknown level '{}'", config.observability.log_level),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        violations.push(ConfigViolation::new(
            "observability.metrics_address",
            format!(
                "'{}' is not a socket address",
                config.observability.metrics_address
            ),
        ));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
