use crate::error::Result;
use crate::mediator::RequestHandler;
use crate::ping::PingRequest;

/// Echoes the validated message back unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PingHandler;

impl RequestHandler<PingRequest> for PingHandler {
    async fn handle(&self, request: PingRequest) -> Result<String> {
        let message = request.message.unwrap_or_default();
        tracing::debug!(chars = message.chars().count(), "Echoing message");
        Ok(message)
    }
}
