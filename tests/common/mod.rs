//! Shared utilities for integration tests.

use std::net::SocketAddr;

use ping_service::config::ServiceConfig;
use ping_service::http::HttpServer;
use ping_service::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// A server running on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Trigger shutdown and wait for the server task to finish.
    pub async fn stop(self) {
        self.shutdown.trigger();
        self.handle
            .await
            .expect("server task panicked")
            .expect("server returned an error");
    }
}

/// Start the service with `config`, bound to 127.0.0.1 on a free port.
pub async fn start_server(config: ServiceConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    TestServer {
        addr,
        shutdown,
        handle,
    }
}
