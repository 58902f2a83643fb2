use analytics::{AnalyticsEngine, DashboardOptions};
use axum::{
    Router,
    routing::{get, post},
};
use core_types::Table;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
///
/// Read-only after startup, so handlers share it without locking.
pub struct AppState {
    pub table: Table,
    pub engine: AnalyticsEngine,
    pub options: DashboardOptions,
}

impl AppState {
    pub fn new(table: Table, engine: AnalyticsEngine) -> Self {
        let options = DashboardOptions::from_table(&table);
        Self {
            table,
            engine,
            options,
        }
    }
}

/// Builds the dashboard router over the given state.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/options", get(handlers::get_options))
        .route("/api/dashboard", post(handlers::post_dashboard))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(cors)
        // Logs every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// Serves the dashboard until Ctrl-C.
pub async fn run_server(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Dashboard listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Dashboard stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal.");
    }
}
