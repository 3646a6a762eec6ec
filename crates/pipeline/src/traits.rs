//! Core traits for the personalization pipeline.
//!
//! This module defines the PersonalizationRule trait that allows
//! composable, independent rules to extend the recommendation catalog.

use anyhow::Result;
use study_data::{RecommendationTemplate, UserSignal};

/// Core trait for personalizing the recommendation catalog.
///
/// All rules must implement this trait to be used in the RulePipeline.
///
/// ## Design Note
/// - `Send + Sync` lets one pipeline serve concurrent requests
/// - Rules take ownership of the catalog and return the extended catalog
/// - Rules are independent: none may depend on what another rule added
pub trait PersonalizationRule: Send + Sync {
    /// Returns the name of this rule (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this rule to the current catalog.
    ///
    /// # Arguments
    /// * `recommendations` - The catalog so far (takes ownership)
    /// * `signal` - Study behaviour reported by the client
    ///
    /// # Returns
    /// * `Ok(Vec<RecommendationTemplate>)` - The catalog, possibly extended
    /// * `Err` - If the rule cannot be evaluated
    fn apply(
        &self,
        recommendations: Vec<RecommendationTemplate>,
        signal: &UserSignal,
    ) -> Result<Vec<RecommendationTemplate>>;
}
