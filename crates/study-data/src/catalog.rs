//! Fixed catalogs the engine draws from.
//!
//! These tables are the whole "model": five base recommendations, two
//! personalized ones, five time slots, five subjects and five prediction
//! factors. Nothing here changes at runtime.

use crate::types::{PerformanceFactor, Priority, RecommendationTemplate};

/// Candidate start times for the optimized schedule, in display order.
pub const OPTIMAL_TIMES: [&str; 5] = ["09:00", "10:30", "14:00", "15:30", "19:00"];

/// Session lengths a schedule slot may be assigned.
pub const SESSION_DURATIONS: [u32; 3] = [45, 60, 90];

pub const SUBJECTS: [&str; 5] = ["Mathematics", "Science", "Literature", "History", "Languages"];

pub const PEAK_HOURS: [&str; 2] = ["9:00-11:00", "14:00-16:00"];

pub const INSIGHTS: [&str; 3] = [
    "Your morning sessions show 15% higher retention",
    "Consider taking breaks every 25 minutes for optimal focus",
    "Group study sessions improve comprehension by 20%",
];

/// (title, description, priority, category)
type TemplateRow = (&'static str, &'static str, Priority, &'static str);

const BASE_RECOMMENDATIONS: [TemplateRow; 5] = [
    (
        "Optimize Study Sessions",
        "Based on your performance data, consider 45-minute focused sessions with 15-minute breaks",
        Priority::High,
        "session_optimization",
    ),
    (
        "Peak Performance Hours",
        "Your best study times appear to be between 9-11 AM and 2-4 PM",
        Priority::Medium,
        "timing_optimization",
    ),
    (
        "Subject Rotation Strategy",
        "Alternate between analytical and creative subjects to maximize retention",
        Priority::Medium,
        "subject_management",
    ),
    (
        "Memory Consolidation",
        "Review material within 24 hours and again after 7 days for better retention",
        Priority::High,
        "memory_enhancement",
    ),
    (
        "Group Study Benefits",
        "Join study groups for complex topics - collaborative learning shows 23% improvement",
        Priority::Low,
        "collaborative_learning",
    ),
];

const TASK_DECOMPOSITION: TemplateRow = (
    "Improve Task Completion",
    "Break down large tasks into smaller, manageable chunks to improve completion rates",
    Priority::High,
    "task_management",
);

const SHORTER_SESSIONS: TemplateRow = (
    "Shorter Study Sessions",
    "Consider shorter, more frequent sessions to maintain focus and prevent burnout",
    Priority::Medium,
    "session_duration",
);

/// (factor, impact weight, current score)
const PERFORMANCE_FACTORS: [(&str, f64, f64); 5] = [
    ("Study Consistency", 0.3, 0.8),
    ("Session Duration", 0.25, 0.7),
    ("Break Management", 0.2, 0.85),
    ("Subject Variety", 0.15, 0.6),
    ("Group Participation", 0.1, 0.4),
];

fn from_row(row: &TemplateRow) -> RecommendationTemplate {
    let (title, description, priority, category) = *row;
    RecommendationTemplate::new(title, description, priority, category)
}

/// The five recommendations every student is eligible for.
pub fn base_recommendations() -> Vec<RecommendationTemplate> {
    BASE_RECOMMENDATIONS.iter().map(from_row).collect()
}

/// Added when the student finishes too few of their planned tasks.
pub fn task_decomposition() -> RecommendationTemplate {
    from_row(&TASK_DECOMPOSITION)
}

/// Added when the student's sessions run too long.
pub fn shorter_sessions() -> RecommendationTemplate {
    from_row(&SHORTER_SESSIONS)
}

pub fn performance_factors() -> Vec<PerformanceFactor> {
    PERFORMANCE_FACTORS
        .iter()
        .map(|&(name, impact_weight, current_score)| PerformanceFactor {
            name: name.to_string(),
            impact_weight,
            current_score,
        })
        .collect()
}

pub fn insights() -> Vec<String> {
    INSIGHTS.iter().map(|s| s.to_string()).collect()
}

pub fn peak_hours() -> Vec<String> {
    PEAK_HOURS.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_titles_are_unique() {
        let mut all = base_recommendations();
        all.push(task_decomposition());
        all.push(shorter_sessions());

        let titles: HashSet<_> = all.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles.len(), 7);
    }

    #[test]
    fn test_factor_weights_sum_to_one() {
        let total: f64 = performance_factors().iter().map(|f| f.impact_weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_factors_keep_declared_order() {
        let names: Vec<_> = performance_factors().into_iter().map(|f| f.name).collect();
        assert_eq!(names[0], "Study Consistency");
        assert_eq!(names[4], "Group Participation");
    }

    #[test]
    fn test_subjects_are_distinct() {
        let subjects: HashSet<_> = SUBJECTS.iter().collect();
        assert_eq!(subjects.len(), SUBJECTS.len());
    }
}
