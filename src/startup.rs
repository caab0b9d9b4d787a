//! Application Startup
//!
//! Application building and server initialization.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;

use crate::application::services::{
    BookmarkService, BookmarkServiceImpl, UserConnectionService, UserConnectionServiceImpl,
};
use crate::config::{CorsSettings, Settings, StoreBackend};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{PgBookmarkRepository, PgUserConnectionRepository};
use crate::infrastructure::Store;
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{cors, logging};
use crate::shared::snowflake::SnowflakeGenerator;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub bookmarks: Arc<dyn BookmarkService>,
    pub connections: Arc<dyn UserConnectionService>,
    pub store: Store,
}

impl AppState {
    /// Wire both services to the given store.
    pub fn new(store: Store, ids: Arc<SnowflakeGenerator>) -> Self {
        let (bookmarks, connections): (Arc<dyn BookmarkService>, Arc<dyn UserConnectionService>) =
            match &store {
                Store::Postgres(pool) => (
                    Arc::new(BookmarkServiceImpl::new(
                        Arc::new(PgBookmarkRepository::new(pool.clone())),
                        ids.clone(),
                    )),
                    Arc::new(UserConnectionServiceImpl::new(
                        Arc::new(PgUserConnectionRepository::new(pool.clone())),
                        ids,
                    )),
                ),
                Store::Memory(memory) => (
                    Arc::new(BookmarkServiceImpl::new(memory.bookmarks.clone(), ids.clone())),
                    Arc::new(UserConnectionServiceImpl::new(
                        memory.connections.clone(),
                        ids,
                    )),
                ),
            };

        Self {
            bookmarks,
            connections,
            store,
        }
    }
}

/// Build the full router: routes plus tracing and CORS layers.
pub fn build_router(state: AppState, cors_settings: &CorsSettings) -> Router {
    routes::create_router(state).layer(
        ServiceBuilder::new()
            .layer(logging::create_trace_layer())
            .layer(cors::create_cors_layer(cors_settings)),
    )
}

/// Connect the configured store, applying migrations if asked to.
pub async fn connect_store(settings: &Settings) -> Result<Store> {
    match settings.store.backend {
        StoreBackend::Postgres => {
            let pool = database::create_pool(&settings.database)
                .await
                .context("Failed to connect to PostgreSQL")?;
            tracing::info!("Database connection pool created");

            if settings.database.run_migrations {
                database::run_migrations(&pool)
                    .await
                    .context("Failed to run database migrations")?;
                tracing::info!("Database migrations applied");
            }

            Ok(Store::Postgres(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data will not survive a restart");
            Ok(Store::memory())
        }
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        handlers::health::init_server_start();

        let store = connect_store(&settings).await?;

        let ids = Arc::new(SnowflakeGenerator::new(
            settings.snowflake.machine_id,
            settings.snowflake.epoch,
        ));

        let state = AppState::new(store, ids);
        let router = build_router(state, &settings.cors);

        let listener = TcpListener::bind(settings.server_addr())
            .await
            .with_context(|| format!("Failed to bind {}", settings.server_addr()))?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
