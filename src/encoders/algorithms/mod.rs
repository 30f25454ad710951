pub mod errors;
pub mod pool;
pub mod pooled;
pub mod radix;

// Re-export error types for public API
pub use errors::DecodeError;
