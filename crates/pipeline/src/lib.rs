//! Pipeline for personalizing recommendations and generating schedules.
//!
//! This crate provides:
//! - PersonalizationRule trait and implementations for extending the catalog
//! - RulePipeline for composing rules
//! - ScheduleBuilder and break_schedule for day plans
//!
//! ## Architecture
//! A recommendation request is processed in stages:
//! 1. Start from the fixed base catalog
//! 2. Rules append personalized templates based on the user signal
//! 3. The engine samples the final recommendations from the extended catalog
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{RulePipeline, ScheduleBuilder};
//! use pipeline::rules::*;
//!
//! let pipeline = RulePipeline::new()
//!     .add_rule(LowCompletionRule::new(0.7))
//!     .add_rule(LongSessionRule::new(120.0));
//!
//! let catalog = pipeline.apply(catalog::base_recommendations(), &signal)?;
//! let slots = ScheduleBuilder::new().build_slots(&mut rng)?;
//! ```

pub mod rule_pipeline;
pub mod rules;
pub mod schedule;
pub mod traits;

// Re-export main types
pub use rule_pipeline::RulePipeline;
pub use schedule::{break_schedule, ScheduleBuilder};
pub use traits::PersonalizationRule;
