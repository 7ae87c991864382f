//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`store`] - Code store backends (Redis and in-memory)
//! - [`metrics`] - Prometheus recorder and allocation metrics

pub mod metrics;
pub mod store;
