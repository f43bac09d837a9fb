//! # leo-server
//!
//! REST API server for the LEO environmental lab: time-series analysis and
//! cached environmental snapshots.

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod routes;
mod state;

use config::ServerConfig;
use state::AppState;

fn build_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health endpoints (Kubernetes-compatible)
        .route("/health/live", get(routes::liveness))
        .route("/health/ready", get(routes::readiness))
        .route("/health", get(routes::liveness))
        // API endpoints
        .route("/api/time-series", get(routes::time_series))
        .route("/api/environmental-snapshot", get(routes::environmental_snapshot))
        // Middleware layers
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leo_server=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr()?;
    let app = build_router(AppState::new(&config));

    tracing::info!(
        snapshot_ttl_secs = config.snapshot_ttl.as_secs(),
        max_time_range = config.limits.max_time_range,
        max_horizon = config.limits.max_horizon,
        "leo-server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
