//! Application layer services implementing business logic.
//!
//! Services consume the domain store trait and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::code_allocator::CodeAllocator`] - Short code reservation with bounded retry

pub mod services;
