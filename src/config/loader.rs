//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ConfigViolation};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ServiceConfig, ConfigError> {
    let config: ServiceConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Invalid)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn test_partial_file_overrides_fields() {
        let config = parse_config(
            r#"
            [listener]
            bind_address = "127.0.0.1:9000"

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = parse_config("[timeouts]\nrequest_secs = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref v) if v.len() == 1));
        assert!(err.to_string().contains("timeouts.request_secs"));
    }

    #[test]
    fn test_syntax_error_is_parse_error() {
        let err = parse_config("[listener\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "ping_service_loader_{}_{:?}.toml",
            std::process::id(),
            std::thread::current().id()
        ));
        fs::write(&path, "[limits]\nmax_body_bytes = 4096\n").unwrap();

        let loaded = load_config(&path);
        fs::remove_file(&path).unwrap_or_default();

        assert_eq!(loaded.unwrap().limits.max_body_bytes, 4096);
    }

    #[test]
    fn test_example_config_matches_defaults() {
        let config = parse_config(include_str!("../../ping.example.toml")).unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/ping.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
