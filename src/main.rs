//! amanah-api server entry point.
//!
//! Starts the Axum HTTP server for the account and donation-receipt
//! routes.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use amanah_api::api;
use amanah_api::app_state::AppState;
use amanah_api::config::AppConfig;
use amanah_api::store::{DonationStore, UserStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("config error: {e}"))?;
    tracing::info!(addr = %config.listen_addr, data_dir = %config.data_dir.display(), "starting amanah-api");

    // Build stores
    let user_store = UserStore::open(&config.data_dir, config.seed_demo_users)
        .map_err(|e| anyhow::anyhow!("user store init failed: {e}"))?;
    let donation_store = DonationStore::open(&config.data_dir);

    // Build application state
    let app_state = AppState {
        user_store: Arc::new(user_store),
        donation_store: Arc::new(donation_store),
        default_currency: config.default_currency.clone(),
    };

    // Build router; the timeout layer bounds every store operation.
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
