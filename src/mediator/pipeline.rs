//! The mediator and its validation step.

use std::any::type_name;

use validator::Validate;

use crate::error::{AppError, ValidationFailure};
use crate::mediator::{Request, RequestHandler};
use crate::observability::metrics;

/// Routes requests to their handler after validating them.
#[derive(Debug, Clone, Default)]
pub struct Mediator<H> {
    handler: H,
}

impl<H> Mediator<H> {
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    /// Validate `request` and, if it passes, hand it to the handler.
    ///
    /// A request that fails validation never reaches the handler.
    pub async fn send<R>(&self, request: R) -> Result<R::Response, AppError>
    where
        R: Request + Validate,
        H: RequestHandler<R>,
    {
        let request_type = short_type_name::<R>();

        if let Err(errors) = request.validate() {
            let failure = ValidationFailure::from(errors);
            tracing::info!(
                request = request_type,
                errors = %failure,
                "Request rejected by validation"
            );
            metrics::record_validation_failure(request_type);
            return Err(failure.into());
        }

        tracing::debug!(request = request_type, "Dispatching request");
        self.handler.handle(request).await
    }
}

/// Type name without its module path, e.g. `PingRequest`.
fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
