//! Request dispatch with a validation step.
//!
//! # Data Flow
//! ```text
//! caller
//!     → Mediator::send(request)
//!     → validation (Validate::validate on the request)
//!         → errors: AppError::Validation, handler never runs
//!     → RequestHandler::handle(request)
//!     → R::Response
//! ```
//!
//! # Design Decisions
//! - Dispatch is resolved at compile time: one handler type per request type
//! - Validation is not optional; every request type must implement `Validate`

pub mod pipeline;
pub mod request;

pub use pipeline::Mediator;
pub use request::{Request, RequestHandler};
