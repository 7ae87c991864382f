//! Allocation policy and the outcome type returned by the allocator.

use thiserror::Error;

use super::short_code::{ALPHABET, MAX_CODE_LENGTH, ShortCode};
use crate::domain::repositories::StoreError;

/// Default number of symbols in a generated code.
pub const DEFAULT_CODE_LENGTH: usize = 5;

/// Default number of candidates tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Upper bound on attempts accepted from configuration.
pub const MAX_ATTEMPTS_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("code length must be between 1 and {max}, got {0}", max = MAX_CODE_LENGTH)]
    CodeLength(usize),
    #[error("max attempts must be between 1 and {max}, got {0}", max = MAX_ATTEMPTS_LIMIT)]
    MaxAttempts(usize),
}

/// Capacity knobs for the allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationPolicy {
    code_length: usize,
    max_attempts: usize,
}

impl AllocationPolicy {
    /// Builds a policy, rejecting zero or out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError`] if either value falls outside its accepted range.
    pub fn new(code_length: usize, max_attempts: usize) -> Result<Self, PolicyError> {
        if code_length == 0 || code_length > MAX_CODE_LENGTH {
            return Err(PolicyError::CodeLength(code_length));
        }
        if max_attempts == 0 || max_attempts > MAX_ATTEMPTS_LIMIT {
            return Err(PolicyError::MaxAttempts(max_attempts));
        }

        Ok(Self {
            code_length,
            max_attempts,
        })
    }

    pub fn code_length(&self) -> usize {
        self.code_length
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Number of distinct codes this policy can produce (saturates at `u128::MAX`).
    pub fn keyspace_size(&self) -> u128 {
        (ALPHABET.len() as u128).saturating_pow(self.code_length as u32)
    }
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Terminal result of a single allocation request.
///
/// Variants are mutually exclusive: a code is never returned together with
/// an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationOutcome {
    /// The code was reserved for the URL.
    Allocated(ShortCode),
    /// The URL was empty or missing. The store was not contacted.
    InvalidInput,
    /// Every attempt collided with an existing code.
    Exhausted,
    /// The store failed; no further attempts were made.
    StoreUnavailable(StoreError),
}

impl AllocationOutcome {
    /// Metric label for the outcome category.
    pub fn result_label(&self) -> &'static str {
        match self {
            Self::Allocated(_) => "ok",
            Self::InvalidInput => "bad_request",
            Self::Exhausted => "exhausted",
            Self::StoreUnavailable(_) => "store_unavailable",
        }
    }

    pub fn code(&self) -> Option<&ShortCode> {
        match self {
            Self::Allocated(code) => Some(code),
            _ => None,
        }
    }

    pub fn is_allocated(&self) -> bool {
        matches!(self, Self::Allocated(_))
    }
}
