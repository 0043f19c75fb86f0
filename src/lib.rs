// ABOUTME: Training load and durability analysis library for segment-based running plans
// ABOUTME: Pure computational core - parsing, aggregation, estimation - with no I/O or UI concerns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Strideplan Contributors

//! # Strideplan
//!
//! Analysis library for segment-based weekly running plans. A plan is a
//! list of segments (distance, pace, zone); from it the library derives
//! the distance-weighted average training speed (ATS), a zone
//! distribution, a durability factor (DF) via several competing
//! estimators, and a predicted marathon finish time.
//!
//! The library is a pure computational core: single-threaded, stateless
//! per evaluation, and free of I/O. A presentation layer owns the segment
//! table and scalar inputs, passes them in as values, and renders the
//! returned summaries. Degenerate inputs never panic: parse failures are
//! explicit errors, undefined metrics are `None` sentinels, and
//! out-of-range durability factors are saturated to their policy bounds.
//!
//! ## Modules
//!
//! - **units**: time/pace parsing, speed conversion, display formatting
//! - **models**: segments, plans, race results, and summary outputs
//! - **zones**: Z1-Z7 ordering, mixed tags, relative-to-MP banding
//! - **metrics**: the weekly plan analyzer
//! - **algorithms**: durability estimators and the marathon time model
//! - **plan_templates**: canned weekly structures
//! - **config**: environment-backed model configuration
//!
//! ## Example
//!
//! ```rust,ignore
//! use strideplan::metrics::PlanAnalyzer;
//! use strideplan::models::{TrainingSegment, WeeklyPlan};
//! use strideplan::zones::Zone;
//!
//! let plan = WeeklyPlan::from_segments(vec![
//!     TrainingSegment::new(10.0, "5:00", Zone::Z2.into()),
//! ]);
//! let analysis = PlanAnalyzer::new().with_durability_factor(1.03).analyze(&plan);
//! assert_eq!(analysis.summary.ats_kmh, Some(12.0));
//! ```

/// Unified error handling with standard error codes
pub mod errors;

/// Time and pace parsing, conversion, and formatting
pub mod units;

/// Core data models: segments, plans, races, and summaries
pub mod models;

/// Intensity zones, mixed tags, and banding policies
pub mod zones;

/// Weekly plan aggregation and the `PlanAnalyzer`
pub mod metrics;

/// Durability estimators and marathon time prediction
pub mod algorithms;

/// Canned weekly training structures
pub mod plan_templates;

/// Model constants grouped by domain
pub mod physiological_constants;

/// Environment-backed configuration
pub mod config;

pub use algorithms::{
    clamp_manual, DurabilityAlgorithm, DurabilityInputs, MarathonTimeModel,
};
pub use errors::{AppError, AppResult, ErrorCode};
pub use metrics::{average_training_speed, PlanAnalysis, PlanAnalyzer};
pub use models::{RaceResult, TrainingSegment, WeeklyPlan, WeeklySummary};
pub use plan_templates::PlanTemplate;
pub use zones::{Zone, ZoneBandingPolicy, ZoneSource, ZoneTag};
