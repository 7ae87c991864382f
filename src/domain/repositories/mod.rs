//! Store trait definitions for the domain layer.
//!
//! The allocator depends only on the [`CodeStore`] contract; concrete
//! backends live in `crate::infrastructure::store`. Mock implementations are
//! generated via `mockall` for unit tests.

pub mod code_store;

pub use code_store::{CodeStore, StoreError, StoreResult};

#[cfg(test)]
pub use code_store::MockCodeStore;
