//! Business logic services for the application layer.

pub mod code_allocator;

pub use code_allocator::CodeAllocator;
