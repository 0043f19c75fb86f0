// ABOUTME: Weekly plan aggregation - ATS, zone distribution, balance metrics, and per-segment details
// ABOUTME: Distance-weighted throughout; speeds are never averaged directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Strideplan Contributors

use crate::algorithms::MarathonTimeModel;
use crate::models::{
    SegmentDetail, TrainingSegment, WeeklyPlan, WeeklySummary, ZoneDistributionEntry,
};
use crate::units::speed_kmh;
use crate::zones::{Zone, ZoneSource, ZoneTag};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Complete analysis of a weekly plan: aggregate summary plus the
/// per-segment detail table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanAnalysis {
    /// Aggregate weekly metrics
    pub summary: WeeklySummary,
    /// One detail row per input segment, invalid rows included
    pub segments: Vec<SegmentDetail>,
}

/// Analyzer for segment-based weekly plans.
///
/// Stateless per evaluation: every metric is recomputed from the plan
/// passed in. Configure the zone source, an optional durability factor,
/// and the prediction model, then call [`PlanAnalyzer::analyze`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlanAnalyzer {
    /// Zone classification applied to segments
    pub zone_source: ZoneSource,
    /// Durability factor used for the marathon prediction, if any
    pub durability_factor: Option<f64>,
    /// Marathon finish-time model
    pub prediction: MarathonTimeModel,
}

impl PlanAnalyzer {
    /// Analyzer with absolute zones, no DF, and the no-offset model
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the zone classification source
    #[must_use]
    pub const fn with_zone_source(mut self, zone_source: ZoneSource) -> Self {
        self.zone_source = zone_source;
        self
    }

    /// Set the durability factor applied to the marathon prediction
    #[must_use]
    pub const fn with_durability_factor(mut self, durability_factor: f64) -> Self {
        self.durability_factor = Some(durability_factor);
        self
    }

    /// Set the marathon prediction model
    #[must_use]
    pub const fn with_prediction_model(mut self, model: MarathonTimeModel) -> Self {
        self.prediction = model;
        self
    }

    /// Compute the full analysis for a plan.
    ///
    /// Invalid segments (non-positive distance or unparseable pace) are
    /// excluded from every time-weighted aggregate but kept in the detail
    /// listing and in distance-by-zone totals.
    #[must_use]
    pub fn analyze(&self, plan: &WeeklyPlan) -> PlanAnalysis {
        let mut details = Vec::with_capacity(plan.segments.len());
        let mut total_km = 0.0;
        let mut valid_km = 0.0;
        let mut valid_minutes = 0.0;
        let mut zone_km: HashMap<Zone, f64> = HashMap::new();
        let mut zone_minutes: HashMap<Zone, f64> = HashMap::new();
        let mut workout_km: HashMap<(String, String), f64> = HashMap::new();

        for segment in &plan.segments {
            let metrics = segment.metrics();
            let zone = self.effective_zone(segment, metrics.pace_min_per_km);
            let distance = if segment.distance_km.is_finite() && segment.distance_km > 0.0 {
                segment.distance_km
            } else {
                0.0
            };

            total_km += distance;
            if metrics.pace_min_per_km.is_some() && distance > 0.0 {
                valid_km += distance;
                valid_minutes += metrics.time_minutes;
            } else {
                debug!(
                    day = %segment.day,
                    label = %segment.label,
                    "segment excluded from time-weighted aggregates"
                );
            }

            for (share_zone, weight) in zone.shares() {
                *zone_km.entry(share_zone).or_insert(0.0) += distance * weight;
                *zone_minutes.entry(share_zone).or_insert(0.0) += metrics.time_minutes * weight;
            }

            *workout_km
                .entry((segment.day.clone(), segment.workout.clone()))
                .or_insert(0.0) += distance;

            details.push(SegmentDetail {
                day: segment.day.clone(),
                workout: segment.workout.clone(),
                label: segment.label.clone(),
                distance_km: segment.distance_km,
                pace: segment.pace.clone(),
                zone,
                notes: segment.notes.clone(),
                pace_min_per_km: metrics.pace_min_per_km,
                speed_kmh: metrics.speed_kmh,
                time_minutes: metrics.time_minutes,
            });
        }

        let ats_kmh = speed_kmh(valid_km, valid_minutes);

        let percent_of = |km: f64| -> Option<f64> {
            if total_km > 0.0 {
                Some(km / total_km * 100.0)
            } else {
                None
            }
        };

        let zone_distribution: Vec<ZoneDistributionEntry> = Zone::ALL
            .iter()
            .map(|zone| {
                let km = zone_km.get(zone).copied().unwrap_or(0.0);
                ZoneDistributionEntry {
                    zone: *zone,
                    label: zone.label().to_owned(),
                    distance_km: km,
                    time_minutes: zone_minutes.get(zone).copied().unwrap_or(0.0),
                    percent_of_distance: percent_of(km),
                }
            })
            .collect();

        let km_where = |predicate: fn(Zone) -> bool| -> f64 {
            zone_km
                .iter()
                .filter(|(zone, _)| predicate(**zone))
                .map(|(_, km)| *km)
                .sum()
        };
        let z4_km = zone_km.get(&Zone::Z4).copied().unwrap_or(0.0);
        let quality_km = km_where(|zone| zone >= Zone::Z4);
        let easy_km = km_where(|zone| zone <= Zone::Z2);

        let long_run_km = workout_km
            .values()
            .copied()
            .fold(0.0_f64, f64::max);

        let durability_factor = self.durability_factor;
        let predicted_marathon_minutes = match (ats_kmh, durability_factor) {
            (Some(ats), Some(df)) => self.prediction.predict_minutes(ats, df),
            _ => None,
        };
        let predicted_marathon_pace_min_per_km =
            predicted_marathon_minutes.and_then(MarathonTimeModel::predicted_pace);

        let summary = WeeklySummary {
            total_distance_km: total_km,
            total_time_minutes: valid_minutes,
            ats_kmh,
            durability_factor,
            predicted_marathon_minutes,
            predicted_marathon_pace_min_per_km,
            z4_km,
            z4_percent: percent_of(z4_km),
            quality_km,
            quality_percent: percent_of(quality_km),
            easy_km,
            easy_percent: percent_of(easy_km),
            long_run_km,
            zone_distribution,
        };

        PlanAnalysis {
            summary,
            segments: details,
        }
    }

    /// Zone tag used for aggregation: the user tag, or the recomputed
    /// relative zone when a marathon-pace source is configured.
    fn effective_zone(&self, segment: &TrainingSegment, pace: Option<f64>) -> ZoneTag {
        match self.zone_source {
            ZoneSource::Absolute => segment.zone,
            ZoneSource::RelativeToMarathonPace {
                policy,
                mp_min_per_km,
            } => pace
                .and_then(|pace| policy.classify_pace(pace, mp_min_per_km))
                .map_or_else(
                    || {
                        warn!(
                            day = %segment.day,
                            label = %segment.label,
                            "relative zone unavailable, keeping segment tag"
                        );
                        segment.zone
                    },
                    ZoneTag::Single,
                ),
        }
    }
}

/// Distance-weighted average training speed over the valid segments of a
/// plan, in km/h.
///
/// Sums distance and time separately before dividing; `None` when no
/// valid time is accumulated. Splitting a segment into parts with the
/// same pace leaves the result unchanged.
#[must_use]
pub fn average_training_speed(segments: &[TrainingSegment]) -> Option<f64> {
    let mut total_km = 0.0;
    let mut total_minutes = 0.0;
    for segment in segments {
        let metrics = segment.metrics();
        if metrics.pace_min_per_km.is_some() {
            total_km += segment.distance_km;
            total_minutes += metrics.time_minutes;
        }
    }
    speed_kmh(total_km, total_minutes)
}
