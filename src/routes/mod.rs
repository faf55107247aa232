use axum::routing::{get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

use crate::app_state::AppState;

pub mod health;
pub mod metrics;
pub mod pricing;

/// All API routes. `/metrics` is served only when a recorder handle is given.
pub fn api_router(state: AppState, prometheus: Option<Arc<PrometheusHandle>>) -> Router {
    let router = Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/pricing/suggest", post(pricing::suggest_price))
        .route("/api/v1/service-types", get(pricing::list_service_types))
        .with_state(state);

    match prometheus {
        Some(handle) => router.route(
            "/metrics",
            get(metrics::prometheus_metrics).with_state(handle),
        ),
        None => router,
    }
}
