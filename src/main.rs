//! Product Inventory Service - Main Application Entry Point
//!
//! # Startup Flow
//!
//! 1. Initialize logging
//! 2. Load configuration from environment variables
//! 3. Create the empty in-memory product store
//! 4. Build the HTTP router with routes and middleware
//! 5. Start the server on the configured port

use product_inventory_server::{AppState, app, config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Build router around a fresh store; all state is lost on restart
    let router = app(AppState::new(config.login_token));

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, router).await?;

    Ok(())
}
