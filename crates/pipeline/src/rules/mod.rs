//! Rule implementations for the personalization pipeline.
//!
//! Each rule checks one scalar from the user signal and may append one
//! template to the catalog.

pub mod long_sessions;
pub mod low_completion;

// Re-export for convenience
pub use long_sessions::LongSessionRule;
pub use low_completion::LowCompletionRule;
