//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Short code candidate generation

pub mod code_generator;

pub use code_generator::{CodeGenerator, RandomCodeGenerator, SeededCodeGenerator, generate_code};
