//! # Study Data Crate
//!
//! Domain types and fixed catalogs for the StudyAI recommendation service.
//!
//! ## Main Components
//!
//! - **types**: Recommendation, signal, schedule, analytics and prediction types
//! - **catalog**: The static tables every payload is drawn from
//! - **signal**: Lenient parsing of client request bodies
//! - **error**: Error types for the engine crates
//!
//! ## Example Usage
//!
//! ```ignore
//! use study_data::{catalog, signal::optional_signal};
//!
//! let base = catalog::base_recommendations();
//! let signal = optional_signal(br#"{"completion_rate": 0.4}"#);
//!
//! assert_eq!(base.len(), 5);
//! assert!(signal.is_some());
//! ```

// Public modules
pub mod catalog;
pub mod error;
pub mod signal;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{Result, StudyError};
pub use types::{
    PerformanceFactor,
    PerformancePrediction,
    Priority,
    RecommendationTemplate,
    ScheduleSlot,
    StudyAnalytics,
    Trends,
    UserSignal,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_signal_reads_as_zero() {
        let signal = UserSignal::default();

        assert_eq!(signal.completion_rate(), 0.0);
        assert_eq!(signal.average_session_time_minutes(), 0.0);
        assert!(!signal.consistent_schedule());
        assert!(!signal.regular_breaks());
    }

    #[test]
    fn test_signal_builders() {
        let signal = UserSignal::default()
            .with_completion_rate(0.9)
            .with_average_session_time(45.0)
            .with_consistent_schedule(true)
            .with_regular_breaks(true);

        assert_eq!(signal.completion_rate(), 0.9);
        assert_eq!(signal.average_session_time_minutes(), 45.0);
        assert!(signal.consistent_schedule());
        assert!(signal.regular_breaks());
    }

    #[test]
    fn test_error_messages() {
        let err = StudyError::CatalogTooSmall {
            catalog: "subjects".to_string(),
            requested: 6,
            available: 5,
        };
        assert_eq!(
            err.to_string(),
            "Catalog subjects has 5 entries but 6 were requested"
        );
    }
}
