//! The ping request, its validation rules, and its handler.
//!
//! # Data Flow
//! ```text
//! POST /ping body
//!     → request.rs (PingRequest, one optional message)
//!     → validation.rs (non-empty, at most 512 characters)
//!     → handler.rs (echo the message back)
//! ```

pub mod handler;
pub mod request;
pub mod validation;

pub use handler::PingHandler;
pub use request::PingRequest;
pub use validation::{EMPTY_MESSAGE, MAX_MESSAGE_CHARS, MESSAGE_TOO_LONG};
