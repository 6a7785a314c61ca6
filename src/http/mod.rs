//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID set, traced, propagated)
//!     → ping.rs (controller actions, body → PingRequest)
//!     → mediator (validation, handler)
//!     → response.rs (errors rendered as problem details)
//!     → Send to client
//! ```

pub mod ping;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdExt, X_REQUEST_ID};
pub use response::{ProblemDetails, PROBLEM_JSON};
pub use server::{AppState, HttpServer};
