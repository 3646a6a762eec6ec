//! Integration tests for the pipeline.
//!
//! These tests verify that rules and schedule generation work together
//! on realistic user signals.

use anyhow::{anyhow, Result};
use pipeline::rules::*;
use pipeline::{break_schedule, PersonalizationRule, RulePipeline, ScheduleBuilder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use study_data::{catalog, signal::optional_signal, RecommendationTemplate, UserSignal};

fn titles(recommendations: &[RecommendationTemplate]) -> Vec<&str> {
    recommendations.iter().map(|r| r.title.as_str()).collect()
}

#[test]
fn test_struggling_student_gets_both_rules() {
    let signal = optional_signal(br#"{"completion_rate": 0.4, "average_session_time": 150}"#)
        .expect("signal");

    let catalog = RulePipeline::standard(0.7, 120.0)
        .apply(catalog::base_recommendations(), &signal)
        .unwrap();

    assert_eq!(catalog.len(), 7);
    let titles = titles(&catalog);
    assert_eq!(titles[5], "Improve Task Completion");
    assert_eq!(titles[6], "Shorter Study Sessions");
}

#[test]
fn test_healthy_student_keeps_base_catalog() {
    let signal = UserSignal::default()
        .with_completion_rate(0.95)
        .with_average_session_time(50.0);

    let catalog = RulePipeline::standard(0.7, 120.0)
        .apply(catalog::base_recommendations(), &signal)
        .unwrap();

    assert_eq!(catalog, catalog::base_recommendations());
}

#[test]
fn test_rules_are_independent() {
    let long_only = UserSignal::default()
        .with_completion_rate(0.9)
        .with_average_session_time(180.0);

    let catalog = RulePipeline::standard(0.7, 120.0)
        .apply(vec![], &long_only)
        .unwrap();

    assert_eq!(titles(&catalog), vec!["Shorter Study Sessions"]);
}

struct FailingRule;

impl PersonalizationRule for FailingRule {
    fn name(&self) -> &str {
        "FailingRule"
    }

    fn apply(
        &self,
        _recommendations: Vec<RecommendationTemplate>,
        _signal: &UserSignal,
    ) -> Result<Vec<RecommendationTemplate>> {
        Err(anyhow!("rule unavailable"))
    }
}

#[test]
fn test_failing_rule_stops_pipeline() {
    let pipeline = RulePipeline::new()
        .add_rule(LowCompletionRule::new(0.7))
        .add_rule(FailingRule);

    let result = pipeline.apply(catalog::base_recommendations(), &UserSignal::default());
    assert!(result.is_err());
}

#[test]
fn test_schedule_and_breaks_together() {
    let mut rng = StdRng::seed_from_u64(2024);
    let slots = ScheduleBuilder::new().build_slots(&mut rng).unwrap();

    // Every generated duration yields a sensible break plan
    for slot in &slots {
        let breaks = break_schedule(slot.duration_minutes);
        match slot.duration_minutes {
            45 => assert_eq!(breaks, vec!["25min"]),
            60 => assert_eq!(breaks, vec!["25min", "50min"]),
            90 => assert_eq!(breaks, vec!["25min", "50min", "75min"]),
            other => panic!("unexpected duration {other}"),
        }
    }
}
