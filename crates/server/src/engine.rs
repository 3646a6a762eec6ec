//! # Study Engine
//!
//! This module turns an optional user signal into every payload the
//! service returns:
//! 1. Recommendations (base catalog + personalization rules, then a random sample)
//! 2. Efficiency score and the full analytics report
//! 3. Ranked schedule slots and in-session break offsets
//! 4. Performance prediction
//!
//! The engine holds only immutable configuration. Every random draw goes
//! through a caller-supplied `Rng`, so one engine can be shared across
//! request handlers and tests can pin the output with a seed.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

use pipeline::{break_schedule, RulePipeline, ScheduleBuilder};
use study_data::{
    catalog, PerformancePrediction, RecommendationTemplate, Result, ScheduleSlot,
    StudyAnalytics, StudyError, Trends, UserSignal,
};

/// Where per-request randomness comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomSource {
    /// Fresh OS entropy for every request
    #[default]
    Entropy,
    /// Every request starts from the same seed, so responses repeat exactly
    Seeded(u64),
}

impl RandomSource {
    /// Build the generator for one request.
    pub fn rng(&self) -> Result<StdRng> {
        match self {
            RandomSource::Entropy => StdRng::try_from_os_rng()
                .map_err(|e| StudyError::EntropyUnavailable(e.to_string())),
            RandomSource::Seeded(seed) => Ok(StdRng::seed_from_u64(*seed)),
        }
    }
}

impl From<Option<u64>> for RandomSource {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(RandomSource::Entropy, RandomSource::Seeded)
    }
}

/// Tunable constants of the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Maximum number of recommendations returned
    pub recommendation_limit: usize,
    pub completion_rate_threshold: f64,
    pub long_session_minutes: f64,
    pub efficiency_baseline_min: u8,
    pub efficiency_baseline_max: u8,
    pub consistent_schedule_bonus: u8,
    pub regular_breaks_bonus: u8,
    pub efficiency_cap: u8,
    /// Returned when the efficiency score cannot be computed
    pub efficiency_fallback: u8,
    pub subjects_per_slot: usize,
    pub default_session_minutes: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            recommendation_limit: 4,
            completion_rate_threshold: 0.7,
            long_session_minutes: 120.0,
            efficiency_baseline_min: 65,
            efficiency_baseline_max: 95,
            consistent_schedule_bonus: 5,
            regular_breaks_bonus: 3,
            efficiency_cap: 100,
            efficiency_fallback: 75,
            subjects_per_slot: 2,
            default_session_minutes: 90,
        }
    }
}

impl EngineConfig {
    /// Configure the efficiency baseline range (default: 65..=95)
    pub fn with_efficiency_baseline(mut self, min: u8, max: u8) -> Self {
        self.efficiency_baseline_min = min;
        self.efficiency_baseline_max = max;
        self
    }

    /// Configure the maximum number of recommendations (default: 4)
    pub fn with_recommendation_limit(mut self, limit: usize) -> Self {
        self.recommendation_limit = limit;
        self
    }

    /// Configure subjects per schedule slot (default: 2)
    pub fn with_subjects_per_slot(mut self, count: usize) -> Self {
        self.subjects_per_slot = count;
        self
    }

    /// Check that every random range and catalog sample is satisfiable.
    pub fn validate(&self) -> Result<()> {
        if self.efficiency_baseline_min > self.efficiency_baseline_max {
            return Err(StudyError::InvalidRange {
                field: "efficiency_baseline".to_string(),
                min: self.efficiency_baseline_min.into(),
                max: self.efficiency_baseline_max.into(),
            });
        }
        if self.efficiency_fallback > self.efficiency_cap {
            return Err(StudyError::InvalidConfig(format!(
                "efficiency fallback {} exceeds cap {}",
                self.efficiency_fallback, self.efficiency_cap
            )));
        }
        if self.subjects_per_slot > catalog::SUBJECTS.len() {
            return Err(StudyError::CatalogTooSmall {
                catalog: "subjects".to_string(),
                requested: self.subjects_per_slot,
                available: catalog::SUBJECTS.len(),
            });
        }
        Ok(())
    }
}

/// Stateless generator for every payload the service returns.
#[derive(Clone)]
pub struct StudyEngine {
    config: EngineConfig,
    rules: Arc<RulePipeline>,
    schedule: ScheduleBuilder,
}

impl StudyEngine {
    /// Create an engine from a configuration.
    ///
    /// The configuration is not validated here: an inconsistent setting
    /// shows up as a fallback value or an error from the affected
    /// operation. Call [`EngineConfig::validate`] first to reject it early.
    pub fn new(config: EngineConfig) -> Self {
        let rules = Arc::new(RulePipeline::standard(
            config.completion_rate_threshold,
            config.long_session_minutes,
        ));
        let schedule = ScheduleBuilder::new().with_subjects_per_slot(config.subjects_per_slot);
        Self {
            config,
            rules,
            schedule,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Sample up to `recommendation_limit` recommendations.
    ///
    /// With a signal, the personalization rules may first extend the base
    /// catalog. The sample has no duplicates and no meaningful order.
    #[instrument(skip(self, signal, rng), fields(personalized = signal.is_some()))]
    pub fn generate_recommendations<R: Rng + ?Sized>(
        &self,
        signal: Option<&UserSignal>,
        rng: &mut R,
    ) -> Vec<RecommendationTemplate> {
        let catalog = match signal {
            Some(signal) => self.personalized_catalog(signal),
            None => catalog::base_recommendations(),
        };

        let count = self.config.recommendation_limit.min(catalog.len());
        let sample: Vec<RecommendationTemplate> =
            catalog.choose_multiple(rng, count).cloned().collect();

        debug!(
            "Sampled {} of {} recommendations",
            sample.len(),
            catalog.len()
        );
        sample
    }

    /// Base catalog extended by the rules, or the plain base catalog if a
    /// rule fails.
    fn personalized_catalog(&self, signal: &UserSignal) -> Vec<RecommendationTemplate> {
        match self.rules.apply(catalog::base_recommendations(), signal) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("Personalization failed, using base catalog: {:#}", e);
                catalog::base_recommendations()
            }
        }
    }

    /// Efficiency score in `[baseline_min, cap]`, or the configured
    /// fallback (75) when it cannot be computed.
    pub fn analyze_efficiency<R: Rng + ?Sized>(&self, signal: &UserSignal, rng: &mut R) -> u8 {
        self.try_analyze_efficiency(signal, rng).unwrap_or_else(|e| {
            warn!(
                "Efficiency analysis failed, returning {}: {}",
                self.config.efficiency_fallback, e
            );
            self.config.efficiency_fallback
        })
    }

    /// Random baseline plus schedule and break bonuses, capped.
    ///
    /// # Errors
    /// `StudyError::InvalidRange` if the baseline range is empty.
    pub fn try_analyze_efficiency<R: Rng + ?Sized>(
        &self,
        signal: &UserSignal,
        rng: &mut R,
    ) -> Result<u8> {
        let (min, max) = (
            self.config.efficiency_baseline_min,
            self.config.efficiency_baseline_max,
        );
        if min > max {
            return Err(StudyError::InvalidRange {
                field: "efficiency_baseline".to_string(),
                min: min.into(),
                max: max.into(),
            });
        }

        let mut score = u32::from(rng.random_range(min..=max));
        if signal.consistent_schedule() {
            score += u32::from(self.config.consistent_schedule_bonus);
        }
        if signal.regular_breaks() {
            score += u32::from(self.config.regular_breaks_bonus);
        }

        let capped = score.min(u32::from(self.config.efficiency_cap));
        Ok(u8::try_from(capped).unwrap_or(self.config.efficiency_cap))
    }

    /// One slot per fixed time of day, best effectiveness first.
    ///
    /// Preferences are accepted for API compatibility and ignored.
    #[instrument(skip_all)]
    pub fn predict_optimal_schedule<R: Rng + ?Sized>(
        &self,
        _preferences: Option<&Map<String, Value>>,
        rng: &mut R,
    ) -> Result<Vec<ScheduleSlot>> {
        self.schedule.build_slots(rng)
    }

    /// Break offsets for a session of the given length.
    pub fn generate_break_schedule(&self, session_duration_minutes: u32) -> Vec<String> {
        break_schedule(session_duration_minutes)
    }

    /// Break offsets for the default session length (90 minutes).
    pub fn default_break_schedule(&self) -> Vec<String> {
        self.generate_break_schedule(self.config.default_session_minutes)
    }

    /// Full analytics report for `POST /api/analytics`.
    pub fn analyze<R: Rng + ?Sized>(&self, signal: &UserSignal, rng: &mut R) -> StudyAnalytics {
        let efficiency = self.analyze_efficiency(signal, rng);
        let focus_time = round_to(rng.random_range(3.5..=8.5), 1);

        StudyAnalytics {
            efficiency,
            focus_time,
            recommended_breaks: self.default_break_schedule(),
            trends: Trends {
                weekly_improvement: rng.random_range(-5.0..15.0),
                consistency_score: rng.random_range(60..=95),
                peak_hours: catalog::peak_hours(),
            },
            insights: catalog::insights(),
        }
    }

    /// Mock performance prediction, with recommendations for the same signal.
    pub fn predict_performance<R: Rng + ?Sized>(
        &self,
        signal: Option<&UserSignal>,
        rng: &mut R,
    ) -> PerformancePrediction {
        let predicted_score = round_to(rng.random_range(75.0..=95.0), 2);
        let confidence = round_to(rng.random_range(0.7..=0.9), 2);

        PerformancePrediction {
            predicted_score,
            confidence,
            factors: catalog::performance_factors(),
            recommendations: self.generate_recommendations(signal, rng),
        }
    }

    /// Score attached to an optimized schedule, in `[0.8, 0.95)`.
    pub fn optimization_score<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.random_range(0.8..0.95)
    }
}

impl Default for StudyEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
