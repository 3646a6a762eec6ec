//! Core domain types for the study recommendation service.
//!
//! Everything here is a plain data structure: built fresh for each
//! request, serialized to JSON, then dropped. Field renames follow the
//! wire format the web client already consumes.

use serde::{Deserialize, Serialize};

// =============================================================================
// Recommendation Types
// =============================================================================

/// How urgently a recommendation should be surfaced to the student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A static, pre-authored study suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationTemplate {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// Machine-readable grouping, e.g. `session_optimization`
    #[serde(rename = "type")]
    pub category: String,
}

impl RecommendationTemplate {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority,
            category: category.into(),
        }
    }
}

// =============================================================================
// User Signal
// =============================================================================

/// Optional client-supplied fields describing recent study behaviour.
///
/// Every field may be missing. Readers go through the accessor methods,
/// which substitute `0.0` / `false` for absent values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSignal {
    /// Share of planned tasks finished, expected in `[0, 1]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_rate: Option<f64>,

    #[serde(alias = "average_session_time", skip_serializing_if = "Option::is_none")]
    pub average_session_time_minutes: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistent_schedule: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_breaks: Option<bool>,
}

impl UserSignal {
    pub fn completion_rate(&self) -> f64 {
        self.completion_rate.unwrap_or(0.0)
    }

    pub fn average_session_time_minutes(&self) -> f64 {
        self.average_session_time_minutes.unwrap_or(0.0)
    }

    pub fn consistent_schedule(&self) -> bool {
        self.consistent_schedule.unwrap_or(false)
    }

    pub fn regular_breaks(&self) -> bool {
        self.regular_breaks.unwrap_or(false)
    }

    /// Builder helpers, mostly for tests and the CLI
    pub fn with_completion_rate(mut self, rate: f64) -> Self {
        self.completion_rate = Some(rate);
        self
    }

    pub fn with_average_session_time(mut self, minutes: f64) -> Self {
        self.average_session_time_minutes = Some(minutes);
        self
    }

    pub fn with_consistent_schedule(mut self, consistent: bool) -> Self {
        self.consistent_schedule = Some(consistent);
        self
    }

    pub fn with_regular_breaks(mut self, regular: bool) -> Self {
        self.regular_breaks = Some(regular);
        self
    }
}

// =============================================================================
// Schedule Types
// =============================================================================

/// One suggested study block in the optimized day plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    /// Start time as "HH:MM"
    #[serde(rename = "time")]
    pub time_of_day: String,

    #[serde(rename = "duration")]
    pub duration_minutes: u32,

    /// Synthetic ranking score in `[0.7, 0.95)`
    pub effectiveness_score: f64,

    #[serde(rename = "recommended_subjects")]
    pub subjects: Vec<String>,
}

// =============================================================================
// Analytics Types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trends {
    pub weekly_improvement: f64,
    pub consistency_score: u32,
    pub peak_hours: Vec<String>,
}

/// Payload of `POST /api/analytics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyAnalytics {
    pub efficiency: u8,

    /// Hours of focused study per day, one decimal place
    #[serde(rename = "focusTime")]
    pub focus_time: f64,

    #[serde(rename = "recommendedBreaks")]
    pub recommended_breaks: Vec<String>,

    pub trends: Trends,
    pub insights: Vec<String>,
}

// =============================================================================
// Prediction Types
// =============================================================================

/// A named contributor to the performance prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceFactor {
    #[serde(rename = "factor")]
    pub name: String,

    #[serde(rename = "impact")]
    pub impact_weight: f64,

    pub current_score: f64,
}

/// Payload of `POST /api/prediction/performance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePrediction {
    pub predicted_score: f64,
    pub confidence: f64,
    pub factors: Vec<PerformanceFactor>,
    pub recommendations: Vec<RecommendationTemplate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_template_serializes_category_as_type() {
        let template = RecommendationTemplate::new("T", "D", Priority::High, "memory_enhancement");
        let value = serde_json::to_value(&template).unwrap();

        assert_eq!(value["type"], "memory_enhancement");
        assert_eq!(value["priority"], "High");
        assert!(value.get("category").is_none());
    }

    #[test]
    fn test_signal_accepts_short_session_key() {
        let signal: UserSignal =
            serde_json::from_value(json!({ "average_session_time": 150 })).unwrap();
        assert_eq!(signal.average_session_time_minutes(), 150.0);
        assert_eq!(signal.completion_rate(), 0.0);
        assert!(!signal.regular_breaks());
    }

    #[test]
    fn test_slot_wire_names() {
        let slot = ScheduleSlot {
            time_of_day: "09:00".to_string(),
            duration_minutes: 45,
            effectiveness_score: 0.8,
            subjects: vec!["History".to_string(), "Science".to_string()],
        };
        let value = serde_json::to_value(&slot).unwrap();

        assert_eq!(value["time"], "09:00");
        assert_eq!(value["duration"], 45);
        assert_eq!(value["recommended_subjects"][1], "Science");
    }

    #[test]
    fn test_analytics_camel_case_fields() {
        let analytics = StudyAnalytics {
            efficiency: 80,
            focus_time: 4.2,
            recommended_breaks: vec!["25min".to_string()],
            trends: Trends {
                weekly_improvement: 1.5,
                consistency_score: 70,
                peak_hours: vec![],
            },
            insights: vec![],
        };
        let value = serde_json::to_value(&analytics).unwrap();

        assert_eq!(value["focusTime"], 4.2);
        assert_eq!(value["recommendedBreaks"][0], "25min");
        assert_eq!(value["trends"]["consistency_score"], 70);
    }
}
