use std::future::Future;

use crate::error::AppError;

/// A data object describing one operation and the type it produces.
pub trait Request: Send + 'static {
    type Response: Send + 'static;
}

/// Services a single request type.
pub trait RequestHandler<R: Request>: Send + Sync + 'static {
    fn handle(&self, request: R) -> impl Future<Output = Result<R::Response, AppError>> + Send;
}
