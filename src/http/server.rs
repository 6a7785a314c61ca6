//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the `/ping` actions
//! - Wire up middleware (request ID, tracing, timeout, body limit, metrics)
//! - Build the mediator shared by all requests
//! - Serve on a listener until shutdown

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::{DefaultBodyLimit, MatchedPath},
    http::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::Span;

use crate::config::ServiceConfig;
use crate::http::ping;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, RequestIdExt};
use crate::mediator::Mediator;
use crate::observability::metrics;
use crate::ping::PingHandler;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub mediator: Arc<Mediator<PingHandler>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mediator: Arc::new(Mediator::new(PingHandler)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP server for the ping service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let router = Self::build_router(&config, AppState::new());
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/ping", get(ping::pong).post(ping::echo))
            .route_layer(middleware::from_fn(track_metrics))
            .with_state(state)
            .layer(DefaultBodyLimit::max(config.limits.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(set_request_id_layer())
    }

    /// The fully layered router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Draining in-flight requests");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

fn request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request.request_id().unwrap_or("unknown"),
    )
}

async fn track_metrics(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());

    let response = next.run(request).await;
    metrics::record_request(&method, &path, response.status().as_u16(), start);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::{header, Method, StatusCode};
    use tower::ServiceExt;

    use crate::http::request::X_REQUEST_ID;
    use crate::http::response::{ProblemDetails, PROBLEM_JSON};
    use crate::ping::{EMPTY_MESSAGE, MAX_MESSAGE_CHARS, MESSAGE_TOO_LONG};

    fn router() -> Router {
        HttpServer::new(ServiceConfig::default()).router()
    }

    async fn post(router: Router, body: impl Into<Body>) -> Response {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/ping")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap();
        router.oneshot(request).await.unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn problem(response: Response) -> ProblemDetails {
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            PROBLEM_JSON
        );
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_get_ping_returns_pong() {
        let request = Request::builder().uri("/ping").body(Body::empty()).unwrap();
        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Pong!");
    }

    #[tokio::test]
    async fn test_post_echoes_message() {
        let response = post(router(), "\"hello\"").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "hello");
    }

    #[tokio::test]
    async fn test_post_echoes_message_at_limit() {
        let message = "x".repeat(MAX_MESSAGE_CHARS);
        let response = post(router(), format!("\"{}\"", message)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, message);
    }

    #[tokio::test]
    async fn test_post_empty_body_is_rejected() {
        for body in ["", "null", "\"\""] {
            let response = post(router(), body).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {:?}", body);

            let problem = problem(response).await;
            assert_eq!(problem.status, 400);
            assert_eq!(problem.errors["message"], [EMPTY_MESSAGE]);
        }
    }

    #[tokio::test]
    async fn test_post_too_long_is_rejected() {
        let body = format!("\"{}\"", "x".repeat(MAX_MESSAGE_CHARS + 1));
        let response = post(router(), body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let problem = problem(response).await;
        assert_eq!(problem.errors["message"], [MESSAGE_TOO_LONG]);
    }

    #[tokio::test]
    async fn test_post_non_string_is_malformed() {
        let response = post(router(), "{\"message\":\"hi\"}").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let problem = problem(response).await;
        assert!(problem.errors.is_empty());
        assert!(problem.detail.is_some());
    }

    #[tokio::test]
    async fn test_body_over_limit_is_rejected() {
        let mut config = ServiceConfig::default();
        config.limits.max_body_bytes = 4096;
        let router = HttpServer::new(config).router();

        let response = post(router, format!("\"{}\"", "x".repeat(8192))).await;
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_body_over_limit_with_content_length_is_problem() {
        let mut config = ServiceConfig::default();
        config.limits.max_body_bytes = 4096;
        let router = HttpServer::new(config).router();

        let body = format!("\"{}\"", "x".repeat(8192));
        let request = Request::builder()
            .method(Method::POST)
            .uri("/ping")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::CONTENT_LENGTH, body.len())
            .body(Body::from(body))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let problem = problem(response).await;
        assert_eq!(problem.status, 413);
        assert!(problem.detail.is_some());
    }

    #[tokio::test]
    async fn test_request_id_generated_and_propagated() {
        let response = post(router(), "\"hi\"").await;
        let generated = response.headers().get(&X_REQUEST_ID).unwrap();
        assert!(!generated.is_empty());

        let request = Request::builder()
            .uri("/ping")
            .header(&X_REQUEST_ID, "req-42")
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.headers().get(&X_REQUEST_ID).unwrap(), "req-42");
    }

    #[tokio::test]
    async fn test_unknown_method_not_allowed() {
        let request = Request::builder()
            .method(Method::DELETE)
            .uri("/ping")
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
