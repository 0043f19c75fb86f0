// ABOUTME: Core data model - training segments, weekly plans, race results, and summary outputs
// ABOUTME: Segments are value objects; every derived field is a pure function of distance and pace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Strideplan Contributors

use crate::errors::AppResult;
use crate::units::{parse_minutes, parse_pace, speed_from_pace};
use crate::zones::{Zone, ZoneTag};
use serde::{Deserialize, Serialize};

/// One row of a segment-based weekly plan.
///
/// A workout is entered as one or more segments (warmup, reps total,
/// recoveries, cooldown) with a distance, a pace string, and a zone tag.
/// The pace stays a string at this layer; derivation happens in
/// [`TrainingSegment::metrics`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSegment {
    /// Day label, free text (e.g. "Mon")
    #[serde(default)]
    pub day: String,
    /// Workout label, free text (e.g. "Intervals")
    #[serde(default)]
    pub workout: String,
    /// Segment label within the workout (e.g. "Reps total")
    #[serde(default)]
    pub label: String,
    /// Segment distance in kilometers
    pub distance_km: f64,
    /// Pace as entered: `m:ss` per km or decimal minutes per km
    pub pace: String,
    /// Zone tag entered for this segment
    pub zone: ZoneTag,
    /// Free-text notes (e.g. "8x1k")
    #[serde(default)]
    pub notes: String,
}

impl TrainingSegment {
    /// Create a segment with the required fields; labels default to empty
    #[must_use]
    pub fn new(distance_km: f64, pace: impl Into<String>, zone: ZoneTag) -> Self {
        Self {
            day: String::new(),
            workout: String::new(),
            label: String::new(),
            distance_km,
            pace: pace.into(),
            zone,
            notes: String::new(),
        }
    }

    /// Set the day label
    #[must_use]
    pub fn with_day(mut self, day: impl Into<String>) -> Self {
        self.day = day.into();
        self
    }

    /// Set the workout label
    #[must_use]
    pub fn with_workout(mut self, workout: impl Into<String>) -> Self {
        self.workout = workout.into();
        self
    }

    /// Set the segment label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the notes field
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Derive pace, speed, and elapsed time for this segment.
    ///
    /// A non-positive distance or an unparseable/non-positive pace yields
    /// the `None`/zero sentinels; the segment then drops out of every
    /// time-weighted aggregate while still appearing in raw listings.
    #[must_use]
    pub fn metrics(&self) -> SegmentMetrics {
        if !self.distance_km.is_finite() || self.distance_km <= 0.0 {
            return SegmentMetrics::unavailable();
        }

        let Ok(pace) = parse_pace(&self.pace) else {
            return SegmentMetrics::unavailable();
        };
        if !pace.is_finite() || pace <= 0.0 {
            return SegmentMetrics::unavailable();
        }

        SegmentMetrics {
            pace_min_per_km: Some(pace),
            speed_kmh: speed_from_pace(pace),
            time_minutes: self.distance_km * pace,
        }
    }

    /// Whether this segment contributes to time-weighted aggregates
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.metrics().pace_min_per_km.is_some()
    }
}

/// Derived per-segment values; pure function of distance and pace
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentMetrics {
    /// Parsed pace in minutes per km, `None` when unparseable or invalid
    pub pace_min_per_km: Option<f64>,
    /// Speed in km/h, `None` when pace is unavailable
    pub speed_kmh: Option<f64>,
    /// Elapsed time in minutes; zero when the segment is invalid
    pub time_minutes: f64,
}

impl SegmentMetrics {
    const fn unavailable() -> Self {
        Self {
            pace_min_per_km: None,
            speed_kmh: None,
            time_minutes: 0.0,
        }
    }
}

/// An ordered collection of training segments.
///
/// Aggregation is order-independent; ordering is kept only for display.
/// The plan is passed explicitly into every computation - there is no
/// ambient model state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    /// Segment rows in entry order
    pub segments: Vec<TrainingSegment>,
}

impl WeeklyPlan {
    /// Create an empty plan
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Create a plan from existing segments
    #[must_use]
    pub fn from_segments(segments: Vec<TrainingSegment>) -> Self {
        Self { segments }
    }

    /// Append a segment
    pub fn push(&mut self, segment: TrainingSegment) {
        self.segments.push(segment);
    }

    /// Number of segment rows (including invalid ones)
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the plan has no segments
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// A completed race used as durability-estimator input; never mutated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    /// Race distance in kilometers
    pub distance_km: f64,
    /// Finish time in minutes
    pub time_minutes: f64,
}

impl RaceResult {
    /// Create a race result from distance and minutes
    #[must_use]
    pub const fn new(distance_km: f64, time_minutes: f64) -> Self {
        Self {
            distance_km,
            time_minutes,
        }
    }

    /// Create a race result from a `h:mm:ss` / `mm:ss` time string
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidFormat` when the time string is
    /// unparseable.
    pub fn from_time_str(distance_km: f64, time: &str) -> AppResult<Self> {
        Ok(Self {
            distance_km,
            time_minutes: parse_minutes(time)?,
        })
    }

    /// Average race speed in km/h, `None` for degenerate inputs
    #[must_use]
    pub fn speed_kmh(&self) -> Option<f64> {
        crate::units::speed_kmh(self.distance_km, self.time_minutes)
    }
}

/// One row of the zone-distribution output table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneDistributionEntry {
    /// The zone
    pub zone: Zone,
    /// Human-readable zone label
    pub label: String,
    /// Distance accumulated in this zone (km)
    pub distance_km: f64,
    /// Time accumulated in this zone (minutes)
    pub time_minutes: f64,
    /// Share of total weekly distance, 0-100; `None` when the week is empty
    pub percent_of_distance: Option<f64>,
}

/// Per-segment output row: the input columns plus derived values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentDetail {
    /// Day label from the input row
    pub day: String,
    /// Workout label from the input row
    pub workout: String,
    /// Segment label from the input row
    pub label: String,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Pace as entered
    pub pace: String,
    /// Effective zone tag (the user tag, or the recomputed relative zone)
    pub zone: ZoneTag,
    /// Notes from the input row
    pub notes: String,
    /// Parsed pace in minutes per km
    pub pace_min_per_km: Option<f64>,
    /// Derived speed in km/h
    pub speed_kmh: Option<f64>,
    /// Derived elapsed time in minutes
    pub time_minutes: f64,
}

/// Aggregate weekly metrics for the presentation layer.
///
/// Undefined metrics (empty week, zero valid time, missing DF) are `None`
/// and render as placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Total distance over all segments (km), invalid rows included
    pub total_distance_km: f64,
    /// Total time over valid segments (minutes)
    pub total_time_minutes: f64,
    /// Average training speed (km/h), distance-weighted over valid segments
    pub ats_kmh: Option<f64>,
    /// Durability factor applied to the prediction, when one was supplied
    pub durability_factor: Option<f64>,
    /// Predicted marathon finish time (minutes)
    pub predicted_marathon_minutes: Option<f64>,
    /// Predicted marathon pace (minutes per km)
    pub predicted_marathon_pace_min_per_km: Option<f64>,
    /// Distance in Z4 (km)
    pub z4_km: f64,
    /// Z4 share of total distance, 0-100
    pub z4_percent: Option<f64>,
    /// Distance in Z4 and above (km)
    pub quality_km: f64,
    /// Quality share of total distance, 0-100
    pub quality_percent: Option<f64>,
    /// Distance in Z1+Z2 (km)
    pub easy_km: f64,
    /// Easy share of total distance, 0-100
    pub easy_percent: Option<f64>,
    /// Largest per-(day, workout) distance: the week's long run (km)
    pub long_run_km: f64,
    /// Zone distribution over the full zone order, zero-filled
    pub zone_distribution: Vec<ZoneDistributionEntry>,
}
