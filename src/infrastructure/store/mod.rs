//! Key-value store backends for code reservation.
//!
//! Provides two [`CodeStore`](crate::domain::repositories::CodeStore) implementations:
//! - [`RedisStore`] - Production Redis store (`SETNX` / `PING`)
//! - [`MemoryStore`] - In-process store for development and tests

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
