//! # Bookmark Service
//!
//! Application entry point. Initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Document store (PostgreSQL pool or in-memory)
//! - HTTP server

use anyhow::Result;
use tracing::info;

use bookmark_service::config::Settings;
use bookmark_service::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    bookmark_service::telemetry::init_tracing();

    info!("Starting Bookmark Service...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        store = %settings.store.backend,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
