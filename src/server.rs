//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, metrics installation, allocator wiring and the
//! Axum server lifecycle.

use crate::application::services::CodeAllocator;
use crate::config::{Config, StoreBackend};
use crate::domain::repositories::CodeStore;
use crate::infrastructure::metrics;
use crate::infrastructure::store::{MemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Interval between Prometheus recorder upkeep passes.
const METRICS_UPKEEP_INTERVAL: Duration = Duration::from_secs(5);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Code store (Redis with startup retries, or in-memory)
/// - Prometheus recorder and its upkeep task
/// - Code allocator
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The store cannot be reached after all retries
/// - The metrics recorder cannot be installed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_store(&config).await?;

    let metrics_handle = metrics::install()?;
    let upkeep_handle = metrics_handle.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(METRICS_UPKEEP_INTERVAL);
        loop {
            interval.tick().await;
            upkeep_handle.run_upkeep();
        }
    });
    tracing::info!("Metrics recorder installed");

    let allocator = Arc::new(CodeAllocator::new(store, config.allocation_policy()?));
    let policy = allocator.policy();
    tracing::info!(
        code_length = policy.code_length(),
        max_attempts = policy.max_attempts(),
        keyspace = %policy.keyspace_size(),
        "Code allocator ready"
    );

    let state = AppState::new(allocator, metrics_handle, config.redirect_base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Builds the configured store backend.
///
/// Redis connections are retried with jittered exponential backoff
/// (100ms doubling, capped at 5s) for `STORE_CONNECT_RETRIES` retries.
async fn connect_store(config: &Config) -> Result<Arc<dyn CodeStore>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; codes are not shared between instances");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Redis => {
            let strategy = ExponentialBackoff::from_millis(2)
                .factor(50)
                .max_delay(Duration::from_secs(5))
                .map(jitter)
                .take(config.store_connect_retries);

            let redis_url = config.redis_url.as_str();
            let timeout = config.store_timeout();
            let store = Retry::start(strategy, move || async move {
                RedisStore::connect(redis_url, timeout)
                    .await
                    .inspect_err(|e| tracing::warn!(error = %e, "Redis connection attempt failed"))
            })
            .await
            .context("Failed to connect to Redis")?;

            Ok(Arc::new(store))
        }
    }
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
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
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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
