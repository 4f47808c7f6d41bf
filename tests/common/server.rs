//! Fake listings backend lifecycle management
//!
//! Each test gets its own server on a random port, answering
//! `GET /rest/v1/projects` the way the configured [`Behavior`] says.

use super::constants::*;
use axum::extract::{RawQuery, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use beatmarket_client::config::BackendSettings;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// What the fake backend answers on the projects endpoint.
#[derive(Clone)]
pub enum Behavior {
    /// 200 with the given JSON body.
    Rows(Value),
    /// The given status with a JSON body.
    Status(u16, Value),
    /// 200 with a body that is not JSON.
    Garbage(&'static str),
    /// Waits before answering with the rows.
    Slow(Duration, Value),
}

struct FakeBackend {
    behavior: Behavior,
    hits: AtomicUsize,
    last_query: Mutex<Option<String>>,
}

/// Fake backend instance
///
/// When dropped, the server gracefully shuts down.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    backend: Arc<FakeBackend>,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

fn authorized(headers: &HeaderMap) -> bool {
    let apikey = headers.get("apikey").and_then(|v| v.to_str().ok());
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    let expected = format!("Bearer {}", TEST_ANON_KEY);
    apikey == Some(TEST_ANON_KEY) && bearer == Some(expected.as_str())
}

async fn projects(
    State(backend): State<Arc<FakeBackend>>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    backend.hits.fetch_add(1, Ordering::SeqCst);
    *backend.last_query.lock().unwrap() = query;

    if !authorized(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": INVALID_KEY_MESSAGE })),
        )
            .into_response();
    }

    match &backend.behavior {
        Behavior::Rows(rows) => Json(rows.clone()).into_response(),
        Behavior::Status(status, body) => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(body.clone()),
        )
            .into_response(),
        Behavior::Garbage(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            *body,
        )
            .into_response(),
        Behavior::Slow(delay, rows) => {
            tokio::time::sleep(*delay).await;
            Json(rows.clone()).into_response()
        }
    }
}

impl TestServer {
    /// Spawns a fake backend on a random port and waits until it answers.
    ///
    /// # Panics
    ///
    /// Panics if port binding fails or the server doesn't become ready
    /// within timeout.
    pub async fn spawn(behavior: Behavior) -> Self {
        let backend = Arc::new(FakeBackend {
            behavior,
            hits: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        });

        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .route("/rest/v1/projects", get(projects))
            .with_state(backend.clone());

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            backend,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Backend settings pointing at this server with the accepted key.
    pub fn settings(&self) -> BackendSettings {
        self.settings_with_key(TEST_ANON_KEY)
    }

    pub fn settings_with_key(&self, anon_key: &str) -> BackendSettings {
        BackendSettings {
            base_url: self.base_url.clone(),
            anon_key: anon_key.to_string(),
            timeout_sec: None,
        }
    }

    /// Number of requests made to the projects endpoint.
    pub fn hits(&self) -> usize {
        self.backend.hits.load(Ordering::SeqCst)
    }

    /// Query string of the most recent projects request.
    pub fn last_query(&self) -> Option<String> {
        self.backend.last_query.lock().unwrap().clone()
    }

    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
