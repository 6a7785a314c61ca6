//! Ping service library: a mediator-dispatched echo endpoint with validation.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod mediator;
pub mod observability;
pub mod ping;

pub use config::schema::ServiceConfig;
pub use error::{AppError, ValidationFailure};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
