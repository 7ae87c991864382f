//! Domain layer: the short code model and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Short codes, allocation policy and outcomes
//! - [`repositories`] - The key-value store trait the allocator depends on
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Allocation logic lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
