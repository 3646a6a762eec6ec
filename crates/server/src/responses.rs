//! API response types matching the web client contract

use chrono::Utc;
use serde::Serialize;
use study_data::{PerformancePrediction, RecommendationTemplate, ScheduleSlot, StudyAnalytics};

/// Current time as an RFC 3339 UTC timestamp
pub fn timestamp() -> String {
    Utc::now().to_rfc3339()
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Body of `GET|POST /api/recommendations`
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationsResponse {
    pub success: bool,
    pub recommendations: Vec<RecommendationTemplate>,
    pub generated_at: String,
}

impl RecommendationsResponse {
    pub fn new(recommendations: Vec<RecommendationTemplate>) -> Self {
        Self {
            success: true,
            recommendations,
            generated_at: timestamp(),
        }
    }
}

/// Body of `POST /api/analytics`
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsResponse {
    pub success: bool,
    pub analytics: StudyAnalytics,
    pub analyzed_at: String,
}

impl AnalyticsResponse {
    pub fn new(analytics: StudyAnalytics) -> Self {
        Self {
            success: true,
            analytics,
            analyzed_at: timestamp(),
        }
    }
}

/// Body of `POST /api/schedule/optimize`
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResponse {
    pub success: bool,
    pub optimized_schedule: Vec<ScheduleSlot>,
    pub optimization_score: f64,
}

impl ScheduleResponse {
    pub fn new(optimized_schedule: Vec<ScheduleSlot>, optimization_score: f64) -> Self {
        Self {
            success: true,
            optimized_schedule,
            optimization_score,
        }
    }
}

/// Body of `POST /api/prediction/performance`
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub success: bool,
    pub prediction: PerformancePrediction,
    pub predicted_at: String,
}

impl PredictionResponse {
    pub fn new(prediction: PerformancePrediction) -> Self {
        Self {
            success: true,
            prediction,
            predicted_at: timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_is_rfc3339() {
        let ts = timestamp();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn test_schedule_response_shape() {
        let value = serde_json::to_value(ScheduleResponse::new(vec![], 0.9)).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["optimization_score"], 0.9);
        assert!(value["optimized_schedule"].as_array().unwrap().is_empty());
    }
}
