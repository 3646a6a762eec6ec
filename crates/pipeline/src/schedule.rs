//! Schedule generation: day-plan slots and in-session break offsets.
//!
//! Slots are synthetic. Each fixed time of day gets a random duration, a
//! random effectiveness score and two random subjects, and the plan is
//! ranked by that score.

use rand::seq::IndexedRandom;
use rand::Rng;
use std::cmp::Ordering;
use std::ops::Range;
use study_data::{catalog, Result, ScheduleSlot, StudyError};
use tracing::debug;

/// Effectiveness scores are drawn from this half-open range.
pub const EFFECTIVENESS_RANGE: Range<f64> = 0.7..0.95;

/// Break spacing for sessions up to [`SHORT_SESSION_LIMIT`] minutes
pub const SHORT_SESSION_BREAK_STEP: u32 = 25;

/// Break spacing for anything longer
pub const LONG_SESSION_BREAK_STEP: u32 = 45;

pub const SHORT_SESSION_LIMIT: u32 = 90;

/// Builds ranked schedule slots from the fixed catalogs.
#[derive(Debug, Clone)]
pub struct ScheduleBuilder {
    times: &'static [&'static str],
    durations: &'static [u32],
    subjects: &'static [&'static str],
    subjects_per_slot: usize,
}

impl ScheduleBuilder {
    /// Create a builder over the standard catalogs, two subjects per slot.
    pub fn new() -> Self {
        Self {
            times: &catalog::OPTIMAL_TIMES,
            durations: &catalog::SESSION_DURATIONS,
            subjects: &catalog::SUBJECTS,
            subjects_per_slot: 2,
        }
    }

    /// Configure how many distinct subjects each slot gets (default: 2)
    pub fn with_subjects_per_slot(mut self, count: usize) -> Self {
        self.subjects_per_slot = count;
        self
    }

    pub fn subjects_per_slot(&self) -> usize {
        self.subjects_per_slot
    }

    /// Generate one slot per time of day, best slot first.
    ///
    /// Ties keep their time-of-day order.
    ///
    /// # Errors
    /// `StudyError::CatalogTooSmall` if a slot asks for more subjects than
    /// exist, or if there are no durations to pick from.
    pub fn build_slots<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<ScheduleSlot>> {
        if self.subjects_per_slot > self.subjects.len() {
            return Err(StudyError::CatalogTooSmall {
                catalog: "subjects".to_string(),
                requested: self.subjects_per_slot,
                available: self.subjects.len(),
            });
        }

        let mut slots = Vec::with_capacity(self.times.len());
        for time in self.times {
            let duration = *self.durations.choose(rng).ok_or_else(|| {
                StudyError::CatalogTooSmall {
                    catalog: "durations".to_string(),
                    requested: 1,
                    available: 0,
                }
            })?;
            let effectiveness_score = rng.random_range(EFFECTIVENESS_RANGE);
            let subjects = self
                .subjects
                .choose_multiple(rng, self.subjects_per_slot)
                .map(|s| s.to_string())
                .collect();

            slots.push(ScheduleSlot {
                time_of_day: time.to_string(),
                duration_minutes: duration,
                effectiveness_score,
                subjects,
            });
        }

        slots.sort_by(|a, b| {
            b.effectiveness_score
                .partial_cmp(&a.effectiveness_score)
                .unwrap_or(Ordering::Equal)
        });

        debug!("Built {} schedule slots", slots.len());
        Ok(slots)
    }
}

impl Default for ScheduleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Break offsets within a session, as `"Nmin"` strings.
///
/// Breaks are spaced 25 minutes apart for sessions up to 90 minutes and
/// 45 minutes apart otherwise. The offset at minute 0 is never emitted,
/// and neither is one at or past the end of the session.
pub fn break_schedule(session_duration_minutes: u32) -> Vec<String> {
    let step = if session_duration_minutes <= SHORT_SESSION_LIMIT {
        SHORT_SESSION_BREAK_STEP
    } else {
        LONG_SESSION_BREAK_STEP
    };

    (step..session_duration_minutes)
        .step_by(step as usize)
        .map(|offset| format!("{offset}min"))
        .collect()
}
