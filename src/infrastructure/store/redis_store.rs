//! Redis-backed code store.

use crate::domain::repositories::{CodeStore, StoreError, StoreResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisError, RedisResult, aio::ConnectionManager};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};

/// Redis store reserving codes with `SETNX`.
///
/// Uses `ConnectionManager` for connection reuse and automatic reconnects.
/// Every call is bounded by `timeout`; an expired call is reported as
/// [`StoreError::Timeout`], never as a collision.
///
/// Mappings are stored under the bare code so a redirect service can read
/// them with a plain `GET <code>`.
pub struct RedisStore {
    conn: ConnectionManager,
    timeout: Duration,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379/0"`)
    /// - `timeout` - upper bound for connecting and for every later store call;
    ///   controlled via `STORE_TIMEOUT_MS`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid or the
    /// connection cannot be established, and [`StoreError::Timeout`] if the
    /// connection or PING does not complete in time.
    pub async fn connect(redis_url: &str, timeout: Duration) -> StoreResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let conn = tokio::time::timeout(timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| StoreError::Timeout)?
            .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let store = Self { conn, timeout };
        store.ping().await?;

        info!("Connected to Redis");

        Ok(store)
    }

    /// Runs a Redis call under the store timeout.
    async fn bounded<T>(
        &self,
        command: &'static str,
        call: impl Future<Output = RedisResult<T>>,
    ) -> StoreResult<T> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(classify(command, e)),
            Err(_) => {
                debug!(command, timeout_ms = self.timeout.as_millis() as u64, "Redis call timed out");
                Err(StoreError::Timeout)
            }
        }
    }
}

/// Splits transport failures from command failures.
fn classify(command: &str, e: RedisError) -> StoreError {
    if e.is_timeout() {
        StoreError::Timeout
    } else if e.is_io_error() || e.is_connection_dropped() || e.is_connection_refusal() {
        StoreError::Connection(format!("Redis {} failed: {}", command, e))
    } else {
        StoreError::Operation(format!("Redis {} failed: {}", command, e))
    }
}

#[async_trait]
impl CodeStore for RedisStore {
    async fn set_if_absent(&self, key: &str, value: &str) -> StoreResult<bool> {
        let mut conn = self.conn.clone();
        self.bounded("SETNX", conn.set_nx::<_, _, bool>(key, value))
            .await
    }

    async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        self.bounded("PING", conn.ping::<()>()).await
    }
}
