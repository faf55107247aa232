//! Test helper utilities: a mock Workers AI endpoint and an in-process server

use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use smart_pricing::{
    app_state::AppState, routes, services::workers_ai::WorkersAiClient,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use wiremock::matchers::{header, method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::fixtures::{ACCOUNT_ID, API_TOKEN, MODEL};

/// Error body returned by the pricing endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub kind: String,
    #[serde(default)]
    pub fields: Vec<String>,
}

/// Mount a Workers AI run endpoint that answers `expected_calls` times with
/// `template`.
pub async fn mount_workers_ai(server: &MockServer, template: ResponseTemplate, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path_regex(format!(r"^/accounts/{}/ai/run/.+$", ACCOUNT_ID)))
        .and(header("authorization", format!("Bearer {}", API_TOKEN).as_str()))
        .respond_with(template)
        .expect(expected_calls)
        .mount(server)
        .await;
}

pub fn workers_ai_client(server: &MockServer) -> WorkersAiClient {
    WorkersAiClient::new(&server.uri(), ACCOUNT_ID, API_TOKEN, MODEL)
        .expect("Failed to build Workers AI client")
}

/// Serve the API router on an ephemeral port, backed by the mock Workers AI.
/// Returns the base URL.
pub async fn spawn_app(server: &MockServer) -> String {
    spawn_app_with_metrics(server, None).await
}

/// Like `spawn_app`, also serving `/metrics` from `prometheus` when given.
pub async fn spawn_app_with_metrics(
    server: &MockServer,
    prometheus: Option<PrometheusHandle>,
) -> String {
    let state = AppState::new(Arc::new(workers_ai_client(server)), MODEL);
    let app = routes::api_router(state, prometheus.map(Arc::new));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server error");
    });

    format!("http://{}", addr)
}
