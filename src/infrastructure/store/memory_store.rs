//! In-process store for development and tests.

use crate::domain::repositories::{CodeStore, StoreResult};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

/// A [`CodeStore`] backed by a sharded concurrent map.
///
/// `set_if_absent` goes through the map's entry API, which holds the shard
/// lock across the check and the insert, so racing callers on one key see
/// exactly one success.
///
/// # Use Cases
///
/// - Local development without Redis (`STORE_BACKEND=memory`)
/// - Handler and concurrency tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        debug!("Using MemoryStore (mappings are not shared across processes)");
        Self::default()
    }

    /// Looks up the URL stored under `code`.
    pub fn get(&self, code: &str) -> Option<String> {
        self.entries.get(code).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CodeStore for MemoryStore {
    async fn set_if_absent(&self, key: &str, value: &str) -> StoreResult<bool> {
        match self.entries.entry(key.to_owned()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(value.to_owned());
                Ok(true)
            }
        }
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_set_if_absent_writes_new_key() {
        let store = MemoryStore::new();

        assert!(store.set_if_absent("abcde", "https://example.com").await.unwrap());
        assert_eq!(store.get("abcde").as_deref(), Some("https://example.com"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_set_if_absent_keeps_existing_value() {
        let store = MemoryStore::new();
        store.set_if_absent("abcde", "https://first.com").await.unwrap();

        let written = store.set_if_absent("abcde", "https://second.com").await.unwrap();

        assert!(!written);
        assert_eq!(store.get("abcde").as_deref(), Some("https://first.com"));
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("zzzzz"), None);
    }

    #[tokio::test]
    async fn test_ping_always_ok() {
        assert!(MemoryStore::new().ping().await.is_ok());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_racing_writers_single_winner() {
        let store = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .set_if_absent("race1", &format!("https://example.com/{i}"))
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(store.len(), 1);
    }
}
