//! Mock RIMS API server lifecycle
//!
//! Responses are registered per path before the test issues requests. Any
//! unregistered path answers 404, and any request without the expected
//! `Referer` answers 403, like the real API.

use axum::Router;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

use super::WEB_PAGE_URL;

pub const API_PREFIX: &str = "/api/v2/web/competition";

/// One request as seen by the mock.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: HashMap<String, String>,
    pub referer: Option<String>,
}

struct Canned {
    status: StatusCode,
    content_type: &'static str,
    body: Vec<u8>,
    delay: Duration,
}

#[derive(Default)]
struct MockState {
    responses: Mutex<HashMap<String, Canned>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Running mock. Shuts down when dropped.
pub struct MockRims {
    pub base_url: String,
    state: Arc<MockState>,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl MockRims {
    /// Bind to 127.0.0.1:0 and serve in a background task.
    pub async fn spawn() -> Self {
        let state = Arc::new(MockState::default());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        let app = Router::new().fallback(handle).with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Mock server failed");
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}"),
            state,
            _shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Answer `GET <prefix>/<script>` with a JSON body.
    pub fn json(&self, script: &str, status: u16, body: Value) {
        self.json_after(script, status, body, Duration::ZERO);
    }

    /// Like [`json`](Self::json), but only after `delay`.
    pub fn json_after(&self, script: &str, status: u16, body: Value, delay: Duration) {
        self.register(
            format!("{API_PREFIX}/{script}"),
            status,
            "application/json",
            body.to_string().into_bytes(),
            delay,
        );
    }

    /// Answer `GET <path>` with a PDF body.
    pub fn pdf(&self, path: &str, status: u16, body: Vec<u8>) {
        self.register(path.to_string(), status, "application/pdf", body, Duration::ZERO);
    }

    /// Absolute URL of `path` on this mock.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Requests whose path is `path`.
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    fn register(
        &self,
        path: String,
        status: u16,
        content_type: &'static str,
        body: Vec<u8>,
        delay: Duration,
    ) {
        let status = StatusCode::from_u16(status).expect("Invalid status code");
        self.state.responses.lock().unwrap().insert(
            path,
            Canned {
                status,
                content_type,
                body,
                delay,
            },
        );
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let referer = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        query,
        referer: referer.clone(),
    });

    if referer.as_deref() != Some(WEB_PAGE_URL) {
        return StatusCode::FORBIDDEN.into_response();
    }

    let canned = state
        .responses
        .lock()
        .unwrap()
        .get(uri.path())
        .map(|c| (c.status, c.content_type, c.body.clone(), c.delay));

    match canned {
        Some((status, content_type, body, delay)) => {
            tokio::time::sleep(delay).await;
            (status, [(header::CONTENT_TYPE, content_type)], body).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
