//! HTTP server initialization and runtime setup.
//!
//! Handles store construction, schema bootstrap, and the Axum server lifecycle.

use crate::application::services::AliasService;
use crate::config::{Config, StoreBackend};
use crate::domain::repositories::MappingStore;
use crate::infrastructure::persistence::{MemoryMappingStore, PgMappingStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens a PostgreSQL pool using the pool settings from `config`.
///
/// # Errors
///
/// Returns an error if the database is unreachable.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

/// Builds the configured store and makes sure its schema exists.
///
/// # Errors
///
/// Returns an error if the database connection or schema creation fails.
pub async fn build_store(config: &Config) -> Result<Arc<dyn MappingStore>> {
    let store: Arc<dyn MappingStore> = match config.store_backend {
        StoreBackend::Postgres => {
            let pool = connect_pool(config).await?;
            tracing::info!("Connected to database");
            Arc::new(PgMappingStore::new(Arc::new(pool)))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, mappings will not survive a restart");
            Arc::new(MemoryMappingStore::new())
        }
    };

    store
        .initialize()
        .await
        .context("Failed to initialize mapping table")?;

    Ok(store)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Mapping store (PostgreSQL pool or in-memory)
/// - Mapping table and alias index
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Store initialization fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;

    let alias_service = Arc::new(AliasService::new(store, config.alias_policy()));
    let state = AppState::new(alias_service, config.base_url.clone());

    let app = app_router(state, config.request_timeout());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
