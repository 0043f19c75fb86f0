// ABOUTME: Canned weekly training structures expanded into concrete segment rows
// ABOUTME: Pure lookup-and-scale - day fractions of weekly distance plus zone-derived target paces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Strideplan Contributors

use crate::errors::{AppError, AppResult};
use crate::models::TrainingSegment;
use crate::units::format_pace_compact;
use crate::zones::Zone;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One day of a plan template: a zone tag and a fixed fraction of the
/// weekly distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateDay {
    /// Day of week
    pub day: Weekday,
    /// Workout label
    pub workout: &'static str,
    /// Intensity zone for the day
    pub zone: Zone,
    /// Fraction of total weekly distance, 0-1
    pub fraction: f64,
}

const fn day(day: Weekday, workout: &'static str, zone: Zone, fraction: f64) -> TemplateDay {
    TemplateDay {
        day,
        workout,
        zone,
        fraction,
    }
}

/// ~80/20 intensity split: mostly Z1/Z2 with two short fast sessions
const POLARIZED: [TemplateDay; 7] = [
    day(Weekday::Mon, "Recovery", Zone::Z1, 0.08),
    day(Weekday::Tue, "Easy", Zone::Z2, 0.17),
    day(Weekday::Wed, "Intervals", Zone::Z5, 0.10),
    day(Weekday::Thu, "Easy", Zone::Z2, 0.17),
    day(Weekday::Fri, "Recovery", Zone::Z1, 0.08),
    day(Weekday::Sat, "Long run", Zone::Z2, 0.30),
    day(Weekday::Sun, "Strides", Zone::Z5, 0.10),
];

/// Volume tapering off with intensity: plenty of Z2/Z3, a little Z4/Z5
const PYRAMIDAL: [TemplateDay; 7] = [
    day(Weekday::Mon, "Easy", Zone::Z2, 0.15),
    day(Weekday::Tue, "Steady", Zone::Z3, 0.15),
    day(Weekday::Wed, "Threshold", Zone::Z4, 0.10),
    day(Weekday::Thu, "Easy", Zone::Z2, 0.15),
    day(Weekday::Fri, "Intervals", Zone::Z5, 0.05),
    day(Weekday::Sat, "Long run", Zone::Z2, 0.28),
    day(Weekday::Sun, "Recovery", Zone::Z1, 0.12),
];

/// Two weekly threshold doses plus a steady-finish long run
const THRESHOLD_FOCUS: [TemplateDay; 7] = [
    day(Weekday::Mon, "Easy", Zone::Z2, 0.14),
    day(Weekday::Tue, "Cruise intervals", Zone::Z4, 0.15),
    day(Weekday::Wed, "Easy", Zone::Z2, 0.14),
    day(Weekday::Thu, "Threshold", Zone::Z4, 0.15),
    day(Weekday::Fri, "Recovery", Zone::Z1, 0.08),
    day(Weekday::Sat, "Long run steady finish", Zone::Z3, 0.24),
    day(Weekday::Sun, "Easy", Zone::Z2, 0.10),
];

/// Aerobic base block: six days, no quality beyond steady running
const BASE_BUILD: [TemplateDay; 6] = [
    day(Weekday::Mon, "Easy", Zone::Z2, 0.16),
    day(Weekday::Tue, "Easy", Zone::Z2, 0.16),
    day(Weekday::Wed, "Steady", Zone::Z3, 0.12),
    day(Weekday::Thu, "Easy", Zone::Z2, 0.16),
    day(Weekday::Fri, "Recovery", Zone::Z1, 0.10),
    day(Weekday::Sat, "Long run", Zone::Z2, 0.30),
];

/// Named weekly training structure.
///
/// Each template maps days to a zone and a fixed fraction of the weekly
/// distance; fractions sum to 1. Expansion is stateless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanTemplate {
    /// ~80/20 easy/hard split
    #[default]
    Polarized,
    /// Pyramidal intensity distribution
    Pyramidal,
    /// Threshold-centered week
    ThresholdFocus,
    /// High-volume aerobic base week
    BaseBuild,
}

impl PlanTemplate {
    /// All templates
    pub const ALL: [Self; 4] = [
        Self::Polarized,
        Self::Pyramidal,
        Self::ThresholdFocus,
        Self::BaseBuild,
    ];

    /// Template name for configuration and display
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Polarized => "polarized",
            Self::Pyramidal => "pyramidal",
            Self::ThresholdFocus => "threshold_focus",
            Self::BaseBuild => "base_build",
        }
    }

    /// The day/zone/fraction structure of this template
    #[must_use]
    pub const fn days(self) -> &'static [TemplateDay] {
        match self {
            Self::Polarized => &POLARIZED,
            Self::Pyramidal => &PYRAMIDAL,
            Self::ThresholdFocus => &THRESHOLD_FOCUS,
            Self::BaseBuild => &BASE_BUILD,
        }
    }

    /// Target pace for a zone given a marathon pace, in minutes per km.
    ///
    /// Target speed is `mp_speed x zone factor`, so the pace divides by
    /// the factor.
    #[must_use]
    pub fn target_pace(zone: Zone, mp_min_per_km: f64) -> f64 {
        mp_min_per_km / zone.speed_factor()
    }

    /// Expand the template into concrete segments.
    ///
    /// Each day's distance is `weekly_km x fraction`; its pace derives
    /// from the zone's marathon-speed factor.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` when the weekly distance or the
    /// marathon pace is non-positive or non-finite.
    pub fn expand(self, weekly_km: f64, mp_min_per_km: f64) -> AppResult<Vec<TrainingSegment>> {
        if !weekly_km.is_finite() || weekly_km <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Weekly distance must be positive, got {weekly_km}"
            )));
        }
        if !mp_min_per_km.is_finite() || mp_min_per_km <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Marathon pace must be positive, got {mp_min_per_km}"
            )));
        }

        Ok(self
            .days()
            .iter()
            .map(|entry| {
                let pace = Self::target_pace(entry.zone, mp_min_per_km);
                TrainingSegment::new(
                    weekly_km * entry.fraction,
                    format_pace_compact(pace),
                    entry.zone.into(),
                )
                .with_day(entry.day.to_string())
                .with_workout(entry.workout)
            })
            .collect())
    }
}

impl FromStr for PlanTemplate {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "polarized" => Ok(Self::Polarized),
            "pyramidal" => Ok(Self::Pyramidal),
            "threshold_focus" => Ok(Self::ThresholdFocus),
            "base_build" => Ok(Self::BaseBuild),
            other => Err(AppError::invalid_input(format!(
                "Unknown plan template: '{other}'. Valid options: polarized, pyramidal, threshold_focus, base_build"
            ))),
        }
    }
}
