mod common;

use shortener_service::application::services::CodeAllocator;
use shortener_service::domain::entities::{AllocationOutcome, AllocationPolicy};
use shortener_service::infrastructure::store::MemoryStore;
use shortener_service::utils::code_generator::SeededCodeGenerator;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use common::ContendedStore;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_allocations_are_unique() {
    const REQUESTS: usize = 500;

    let store = Arc::new(ContendedStore::default());
    let allocator = Arc::new(CodeAllocator::new(store.clone(), AllocationPolicy::default()));

    let handles: Vec<_> = (0..REQUESTS)
        .map(|i| {
            let allocator = allocator.clone();
            tokio::spawn(async move {
                let url = format!("https://example.com/{i}");
                let outcome = allocator.allocate(url.as_str()).await;
                (url, outcome)
            })
        })
        .collect();

    let mut codes = HashSet::new();
    for handle in handles {
        let (url, outcome) = handle.await.unwrap();
        let code = match outcome {
            AllocationOutcome::Allocated(code) => code,
            other => panic!("allocation for {url} failed: {other:?}"),
        };

        assert_eq!(store.inner.get(code.as_str()), Some(url));
        assert!(codes.insert(code), "code handed out twice");
    }

    assert_eq!(codes.len(), REQUESTS);
    assert_eq!(store.inner.len(), REQUESTS);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_same_seed_allocators_never_share_a_code() {
    let store = Arc::new(ContendedStore::default());
    let policy = AllocationPolicy::default();

    let first = Arc::new(CodeAllocator::with_generator(
        store.clone(),
        Arc::new(SeededCodeGenerator::new(7)),
        policy,
    ));
    let second = Arc::new(CodeAllocator::with_generator(
        store.clone(),
        Arc::new(SeededCodeGenerator::new(7)),
        policy,
    ));

    let a = tokio::spawn(async move { first.allocate("https://example.com/first").await });
    let b = tokio::spawn(async move { second.allocate("https://example.com/second").await });

    let a = a.await.unwrap();
    let b = b.await.unwrap();

    let code_a = a.code().expect("first allocated").clone();
    let code_b = b.code().expect("second allocated").clone();

    assert_ne!(code_a, code_b);
    assert_eq!(
        store.inner.get(code_a.as_str()).as_deref(),
        Some("https://example.com/first")
    );
    assert_eq!(
        store.inner.get(code_b.as_str()).as_deref(),
        Some("https://example.com/second")
    );
    // One of the two lost the race on the shared first candidate
    assert_eq!(store.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_allocate_against_empty_store() {
    let store = Arc::new(MemoryStore::new());
    let allocator = CodeAllocator::new(store.clone(), AllocationPolicy::default());

    let outcome = allocator.allocate("https://example.com/a").await;

    let code = outcome.code().expect("allocated");
    assert_eq!(code.len(), 5);
    assert_eq!(store.get(code.as_str()).as_deref(), Some("https://example.com/a"));
}

#[tokio::test]
async fn test_exhaustion_on_full_keyspace() {
    let store = Arc::new(MemoryStore::new());
    let policy = AllocationPolicy::new(1, 10).unwrap();
    let allocator = CodeAllocator::new(store.clone(), policy);

    // Fill all 36 one-symbol codes
    let mut allocated = 0;
    while store.len() < 36 {
        if allocator.allocate("https://example.com").await.is_allocated() {
            allocated += 1;
        }
    }

    assert_eq!(allocated, 36);
    assert_eq!(
        allocator.allocate("https://example.com/late").await,
        AllocationOutcome::Exhausted
    );
}
