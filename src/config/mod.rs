//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML), optional
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so an empty file (or none) is a valid config
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    LimitsConfig, ListenerConfig, LogFormat, ObservabilityConfig, ServiceConfig, TimeoutConfig,
};
pub use validation::{validate_config, ConfigViolation};
