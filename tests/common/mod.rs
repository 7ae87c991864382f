#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use shortener_service::api::routes::routes;
use shortener_service::application::services::CodeAllocator;
use shortener_service::domain::entities::AllocationPolicy;
use shortener_service::domain::repositories::{CodeStore, StoreError, StoreResult};
use shortener_service::infrastructure::metrics;
use shortener_service::infrastructure::store::MemoryStore;
use shortener_service::state::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Store whose every call fails as if Redis were down.
#[derive(Default)]
pub struct FailingStore {
    pub calls: AtomicUsize,
}

#[async_trait]
impl CodeStore for FailingStore {
    async fn set_if_absent(&self, _key: &str, _value: &str) -> StoreResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(StoreError::Connection("connection refused".to_string()))
    }
}

/// Store that reports every key as already taken.
#[derive(Default)]
pub struct SaturatedStore {
    pub calls: AtomicUsize,
}

#[async_trait]
impl CodeStore for SaturatedStore {
    async fn set_if_absent(&self, _key: &str, _value: &str) -> StoreResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(false)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

/// Atomic in-memory store that yields to the scheduler before every write,
/// forcing concurrent allocations to interleave.
#[derive(Default)]
pub struct ContendedStore {
    pub inner: MemoryStore,
    pub calls: AtomicUsize,
}

#[async_trait]
impl CodeStore for ContendedStore {
    async fn set_if_absent(&self, key: &str, value: &str) -> StoreResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.inner.set_if_absent(key, value).await
    }

    async fn ping(&self) -> StoreResult<()> {
        self.inner.ping().await
    }
}

pub fn create_test_state(store: Arc<dyn CodeStore>, redirect_base_url: Option<&str>) -> AppState {
    let allocator = Arc::new(CodeAllocator::new(store, AllocationPolicy::default()));
    let metrics = metrics::install().expect("metrics recorder");

    AppState::new(allocator, metrics, redirect_base_url.map(str::to_string))
}

pub fn create_test_app(state: AppState) -> Router {
    routes().with_state(state)
}
