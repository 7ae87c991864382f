//! Core value types of the allocation domain.

pub mod allocation;
pub mod short_code;

pub use allocation::{
    AllocationOutcome, AllocationPolicy, DEFAULT_CODE_LENGTH, DEFAULT_MAX_ATTEMPTS, PolicyError,
};
pub use short_code::{ALPHABET, MAX_CODE_LENGTH, ShortCode, ShortCodeError};
