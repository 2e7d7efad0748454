//! Mock HTTP server setup for integration tests

#![allow(dead_code)]

use complaint_triage_client::{ClientConfig, TriageClient};
use mockito::{Mock, Server, ServerGuard};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Backoff used by test clients so retry tests finish quickly.
pub const TEST_BACKOFF: Duration = Duration::from_millis(10);

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(&self.base_url)
            .with_timeout(Duration::from_secs(5))
            .with_backoff_base(TEST_BACKOFF)
    }

    /// Client pointed at the mock server, with default retries and a short backoff.
    pub fn client(&self) -> TriageClient {
        TriageClient::new(self.config()).expect("test client")
    }

    /// Create a mock for a JSON response
    pub async fn mock_json(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Create a mock that answers `status` exactly `hits` times
    pub async fn mock_status(&mut self, method: &str, path: &str, status: usize, hits: usize) -> Mock {
        self.server
            .mock(method, path)
            .with_status(status)
            .with_body("")
            .expect(hits)
            .create_async()
            .await
    }
}

/// A TCP server that accepts connections and never answers.
pub struct HangingServer {
    pub base_url: String,
    pub accepted: Arc<AtomicUsize>,
}

impl HangingServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let accepted = Arc::new(AtomicUsize::new(0));

        let counter = accepted.clone();
        tokio::spawn(async move {
            let mut open = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                open.push(socket);
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            accepted,
        }
    }

    pub fn accepted(&self) -> usize {
        self.accepted.load(Ordering::SeqCst)
    }
}

/// A TCP server that sends response headers and part of the body, then stalls.
pub struct StallingBodyServer {
    pub base_url: String,
    pub accepted: Arc<AtomicUsize>,
}

impl StallingBodyServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let accepted = Arc::new(AtomicUsize::new(0));

        let counter = accepted.clone();
        tokio::spawn(async move {
            let mut open = Vec::new();
            while let Ok((mut socket, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let head = "HTTP/1.1 200 OK\r\n\
                            content-type: application/json\r\n\
                            content-length: 1000\r\n\r\n\
                            {\"similar_complaints\": [";
                let _ = socket.write_all(head.as_bytes()).await;
                let _ = socket.flush().await;
                open.push(socket);
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            accepted,
        }
    }

    pub fn accepted(&self) -> usize {
        self.accepted.load(Ordering::SeqCst)
    }
}

/// Base URL on which nothing listens.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";
