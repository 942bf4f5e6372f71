use anyhow::Result;
use axum::{routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{config::Config, handlers, handlers::AppState, metrics, signals::shutdown_signal};

/// Start the HTTP API
///
/// Loads the catalog once, installs the Prometheus recorder when enabled,
/// then serves until SIGINT/SIGTERM.
pub async fn start_server(config: Config) -> Result<()> {
    let catalog = config.load_catalog()?;
    let state = AppState::new(
        catalog,
        config.estimator.settings(),
        config.estimator.requests,
    );

    let metrics_handle = if config.metrics.enabled {
        info!("Initializing Prometheus metrics...");
        Some(Arc::new(metrics::init_metrics()?))
    } else {
        None
    };

    let app = create_router(state.clone(), metrics_handle, &config.metrics.endpoint);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting AI impact API on {}", addr);
    info!(
        "Configuration: {} models, {} tracked metrics, requests per day in [{}, {}]",
        state.catalog.len(),
        state.settings.tracked().len(),
        state.requests.min,
        state.requests.max
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");
    Ok(())
}

/// Paths served by the router itself; the metrics endpoint must avoid them
pub const RESERVED_PATHS: [&str; 5] = [
    "/health",
    "/api/models",
    "/api/ranking",
    "/api/tips",
    "/api/estimate",
];

/// Build the router; `/metrics` is mounted only with a Prometheus handle
pub fn create_router(
    state: AppState,
    metrics_handle: Option<Arc<PrometheusHandle>>,
    metrics_endpoint: &str,
) -> Router {
    let api = Router::new()
        .route("/api/models", get(handlers::models::list_models))
        .route("/api/ranking", get(handlers::models::ranking))
        .route("/api/tips", get(handlers::models::tips))
        .route("/api/estimate", get(handlers::estimate::estimate))
        .with_state(state);

    let mut app = Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(api);

    if let Some(handle) = metrics_handle {
        app = app.merge(
            Router::new()
                .route(metrics_endpoint, get(handlers::metrics_handler::metrics))
                .with_state(handle),
        );
    }

    app.layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
