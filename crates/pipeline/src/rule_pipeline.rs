//! The RulePipeline runs personalization rules in order.
//!
//! Rules are chained with the builder pattern, just like request filters
//! in a candidate pipeline.

use crate::rules::{LongSessionRule, LowCompletionRule};
use crate::traits::PersonalizationRule;
use anyhow::Result;
use study_data::{RecommendationTemplate, UserSignal};

/// Chains multiple rules together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = RulePipeline::new()
///     .add_rule(LowCompletionRule::new(0.7))
///     .add_rule(LongSessionRule::new(120.0));
///
/// let catalog = pipeline.apply(catalog::base_recommendations(), &signal)?;
/// ```
pub struct RulePipeline {
    rules: Vec<Box<dyn PersonalizationRule>>,
}

impl RulePipeline {
    /// Create a new empty RulePipeline.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The two rules the service ships with, at the given thresholds.
    pub fn standard(completion_rate_threshold: f64, long_session_minutes: f64) -> Self {
        Self::new()
            .add_rule(LowCompletionRule::new(completion_rate_threshold))
            .add_rule(LongSessionRule::new(long_session_minutes))
    }

    /// Add a rule to the pipeline (builder pattern).
    pub fn add_rule(mut self, rule: impl PersonalizationRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply all rules in sequence to the catalog.
    ///
    /// # Returns
    /// * `Ok(Vec<RecommendationTemplate>)` - The catalog after all rules
    /// * `Err` - If any rule fails
    pub fn apply(
        &self,
        recommendations: Vec<RecommendationTemplate>,
        signal: &UserSignal,
    ) -> Result<Vec<RecommendationTemplate>> {
        let mut current = recommendations;
        for rule in &self.rules {
            let before = current.len();
            current = rule.apply(current, signal)?;
            tracing::debug!(
                "Applied rule: {} (catalog {} -> {})",
                rule.name(),
                before,
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for RulePipeline {
    fn default() -> Self {
        Self::new()
    }
}
