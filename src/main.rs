use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use smart_pricing::app_state::AppState;
use smart_pricing::config::AppConfig;
use smart_pricing::routes;
use smart_pricing::services::workers_ai::WorkersAiClient;

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing smart-pricing server");

    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    let prometheus_handle = Arc::new(prometheus_handle);

    metrics::describe_counter!(
        "pricing_requests_total",
        "Total price suggestion requests received"
    );
    metrics::describe_counter!(
        "pricing_requests_failed",
        "Price suggestion requests that failed, by error kind"
    );
    metrics::describe_histogram!(
        "pricing_upstream_seconds",
        "Time spent waiting on the completion service"
    );

    tracing::info!(model = %config.cf_ai_model, "Initializing Cloudflare Workers AI client");
    let completion =
        WorkersAiClient::from_config(&config).expect("Failed to initialize Workers AI client");

    let model = completion.model().to_string();
    let state = AppState::new(Arc::new(completion), &model);

    let app = routes::api_router(state, Some(prometheus_handle))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(64 * 1024));

    tracing::info!("Starting smart-pricing on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
