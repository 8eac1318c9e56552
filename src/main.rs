// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::Dashboard;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::csv_repository::CsvRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_figure, health_check, index, list_figures, stream_figures};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(CsvRepository::new(
        config.sources.phishing.clone(),
        config.sources.ids_threats.clone(),
    ));

    // Board, refresh controller and chart pipelines (application layer)
    let dashboard = Dashboard::new(repository, config.refresh_interval());
    tracing::info!(
        "Refreshing {} and {} every {:?}",
        config.sources.phishing.display(),
        config.sources.ids_threats.display(),
        dashboard.controller.interval()
    );
    let refresher = tokio::spawn(dashboard.controller.run());

    // Create application state
    let state = Arc::new(AppState {
        board: dashboard.board,
        refresh_interval: config.refresh_interval(),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(index))
        .route("/events", get(stream_figures))
        .route("/api/figures", get(list_figures))
        .route("/api/figures/:slot", get(get_figure))
        .route("/healthz", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Starting security dashboard on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    refresher.abort();
    tracing::info!("Security dashboard stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
