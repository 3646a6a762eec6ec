//! Rule for students whose sessions run too long.

use crate::traits::PersonalizationRule;
use anyhow::Result;
use study_data::{catalog, RecommendationTemplate, UserSignal};

/// Suggests shorter, more frequent sessions above a session-length limit.
pub struct LongSessionRule {
    max_minutes: f64,
}

impl LongSessionRule {
    /// # Arguments
    /// * `max_minutes` - Average sessions strictly longer than this trigger the rule (typically 120)
    pub fn new(max_minutes: f64) -> Self {
        Self { max_minutes }
    }
}

impl PersonalizationRule for LongSessionRule {
    fn name(&self) -> &str {
        "LongSessionRule"
    }

    fn apply(
        &self,
        mut recommendations: Vec<RecommendationTemplate>,
        signal: &UserSignal,
    ) -> Result<Vec<RecommendationTemplate>> {
        if signal.average_session_time_minutes() > self.max_minutes {
            recommendations.push(catalog::shorter_sessions());
        }
        Ok(recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_session_rule() {
        let rule = LongSessionRule::new(120.0);

        let long = UserSignal::default().with_average_session_time(121.0);
        let result = rule.apply(vec![], &long).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Shorter Study Sessions");

        let exact = UserSignal::default().with_average_session_time(120.0);
        assert!(rule.apply(vec![], &exact).unwrap().is_empty());

        assert!(rule.apply(vec![], &UserSignal::default()).unwrap().is_empty());
    }
}
