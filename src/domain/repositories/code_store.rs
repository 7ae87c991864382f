//! Key-value store contract consumed by the code allocator.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a store backend.
///
/// None of these mean "key already present"; that case is the `Ok(false)`
/// answer of [`CodeStore::set_if_absent`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("store connection error: {0}")]
    Connection(String),
    #[error("store operation error: {0}")]
    Operation(String),
    #[error("store call timed out")]
    Timeout,
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Shared key-value store holding code → URL mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis `SETNX` / `PING`
/// - [`crate::infrastructure::store::MemoryStore`] - in-process map for development and tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Stores `value` under `key` only if `key` is absent.
    ///
    /// The check and the write must be one indivisible operation at the
    /// backend: when two callers race on the same key exactly one gets `true`.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the pair was written
    /// - `Ok(false)` if the key already existed (nothing is modified)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport or backend failure.
    async fn set_if_absent(&self, key: &str, value: &str) -> StoreResult<bool>;

    /// Checks backend liveness.
    async fn ping(&self) -> StoreResult<()>;
}
