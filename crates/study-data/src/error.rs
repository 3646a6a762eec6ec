//! Error types shared by the engine crates.

use thiserror::Error;

/// Errors raised while generating study payloads.
///
/// None of these are caused by client input: bad or missing fields are
/// defaulted, never rejected. They only surface when the engine itself is
/// configured inconsistently or the host cannot supply randomness.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StudyError {
    /// A random range was configured with `min > max`
    #[error("Invalid range for {field}: {min}..={max}")]
    InvalidRange { field: String, min: i64, max: i64 },

    /// A sample asked for more distinct items than the catalog holds
    #[error("Catalog {catalog} has {available} entries but {requested} were requested")]
    CatalogTooSmall {
        catalog: String,
        requested: usize,
        available: usize,
    },

    /// The operating system refused to provide entropy for a generator
    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    /// Any other inconsistent engine setting
    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StudyError>;
