use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::app_state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    pub completion_service: CompletionHealth,
}

#[derive(Serialize)]
pub struct CompletionHealth {
    pub status: String,
    pub model: String,
}

/// GET /health — liveness plus the configured completion model.
///
/// The completion service is not called here: every probe would be a billed
/// inference request.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            completion_service: CompletionHealth {
                status: "configured".to_string(),
                model: state.model.to_string(),
            },
        },
    })
}
