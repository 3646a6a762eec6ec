//! Rule for students who leave too many tasks unfinished.

use crate::traits::PersonalizationRule;
use anyhow::Result;
use study_data::{catalog, RecommendationTemplate, UserSignal};

/// Suggests task decomposition when the completion rate is low.
///
/// A missing completion rate reads as `0.0`, so a signal without the field
/// always triggers this rule.
pub struct LowCompletionRule {
    threshold: f64,
}

impl LowCompletionRule {
    /// # Arguments
    /// * `threshold` - Completion rates strictly below this trigger the rule (typically 0.7)
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl PersonalizationRule for LowCompletionRule {
    fn name(&self) -> &str {
        "LowCompletionRule"
    }

    fn apply(
        &self,
        mut recommendations: Vec<RecommendationTemplate>,
        signal: &UserSignal,
    ) -> Result<Vec<RecommendationTemplate>> {
        if signal.completion_rate() < self.threshold {
            recommendations.push(catalog::task_decomposition());
        }
        Ok(recommendations)
    }
}
