//! # Shortener Service
//!
//! Accepts a long URL and returns a short code reserved for it in a shared
//! Redis store.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Short codes, allocation outcomes and the store trait
//! - **Application Layer** ([`application`]) - The code allocator
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores, metrics
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Allocation
//!
//! Codes are 5 symbols from `[a-z0-9]` by default. Each request draws fresh
//! random candidates and reserves them with an atomic `SETNX`, giving up
//! after 10 collisions. Store failures end the request immediately.
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_HOST="localhost"
//! export REDIRECT_BASE_URL="http://localhost:3000"  # Optional
//!
//! cargo run
//!
//! curl -X POST localhost:5000/shorten -d '{"url": "https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::CodeAllocator;
    pub use crate::domain::entities::{AllocationOutcome, AllocationPolicy, ShortCode};
    pub use crate::domain::repositories::{CodeStore, StoreError, StoreResult};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryStore, RedisStore};
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::{CodeGenerator, SeededCodeGenerator};
}
