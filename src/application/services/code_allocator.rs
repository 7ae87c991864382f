//! Short code allocation against the shared store.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::entities::{AllocationOutcome, AllocationPolicy};
use crate::domain::repositories::CodeStore;
use crate::infrastructure::metrics;
use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};

/// Reserves short codes for URLs.
///
/// The allocator holds no mutable state: uniqueness is delegated entirely to
/// the store's atomic set-if-absent. Any number of `allocate` calls may run
/// concurrently on one instance.
pub struct CodeAllocator {
    store: Arc<dyn CodeStore>,
    generator: Arc<dyn CodeGenerator>,
    policy: AllocationPolicy,
}

impl CodeAllocator {
    /// Creates an allocator drawing candidates from the thread-local RNG.
    pub fn new(store: Arc<dyn CodeStore>, policy: AllocationPolicy) -> Self {
        Self::with_generator(store, Arc::new(RandomCodeGenerator), policy)
    }

    /// Creates an allocator with an explicit candidate source.
    pub fn with_generator(
        store: Arc<dyn CodeStore>,
        generator: Arc<dyn CodeGenerator>,
        policy: AllocationPolicy,
    ) -> Self {
        Self {
            store,
            generator,
            policy,
        }
    }

    /// Code length and attempt budget used for every allocation.
    pub fn policy(&self) -> AllocationPolicy {
        self.policy
    }

    /// The store this allocator reserves codes in.
    pub fn store(&self) -> &Arc<dyn CodeStore> {
        &self.store
    }

    /// Reserves a fresh code for `url`.
    ///
    /// # Behavior
    ///
    /// - Empty or missing `url` returns [`AllocationOutcome::InvalidInput`]
    ///   without contacting the store
    /// - Each attempt draws a new candidate and issues one `set_if_absent`
    /// - The first successful reserve returns [`AllocationOutcome::Allocated`]
    /// - After `max_attempts` collisions returns [`AllocationOutcome::Exhausted`]
    /// - A store error returns [`AllocationOutcome::StoreUnavailable`] at once
    ///
    /// Attempts run serially with no backoff.
    pub async fn allocate<'a>(&self, url: impl Into<Option<&'a str>>) -> AllocationOutcome {
        let Some(url) = url.into().filter(|url| !url.is_empty()) else {
            return AllocationOutcome::InvalidInput;
        };

        let max_attempts = self.policy.max_attempts();

        for attempt in 1..=max_attempts {
            let candidate = self.generator.generate(self.policy.code_length());

            match self.store.set_if_absent(candidate.as_str(), url).await {
                Ok(true) => {
                    debug!(code = %candidate, attempt, "short code allocated");
                    metrics::record_attempts(attempt);
                    return AllocationOutcome::Allocated(candidate);
                }
                Ok(false) => {
                    debug!(code = %candidate, attempt, "short code collision");
                    metrics::record_collision();
                }
                Err(e) => {
                    error!(attempt, error = %e, "store failed during allocation");
                    metrics::record_attempts(attempt);
                    return AllocationOutcome::StoreUnavailable(e);
                }
            }
        }

        warn!(
            attempts = max_attempts,
            code_length = self.policy.code_length(),
            "short code allocation exhausted"
        );
        metrics::record_attempts(max_attempts);

        AllocationOutcome::Exhausted
    }
}
