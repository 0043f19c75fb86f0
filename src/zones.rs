// ABOUTME: Intensity zone model with absolute tags and relative-to-marathon-pace banding
// ABOUTME: Supports Z1-Z7 ordering, mixed-zone tags, and the 5-band and 7-band ratio tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Strideplan Contributors

use crate::errors::AppError;
use crate::physiological_constants::zone_bands::{
    FIVE_BAND_UPPER_BOUNDS, SEVEN_BAND_UPPER_BOUNDS,
};
use crate::physiological_constants::zone_speed_factors;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Training intensity zone, ordered from very easy (Z1) to fastest (Z7).
///
/// Absolute weekly plans typically use Z1-Z5; the seven-band
/// relative-to-marathon-pace classification uses the full range.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Zone {
    /// Very easy running
    #[default]
    Z1,
    /// Easy aerobic running
    Z2,
    /// Moderate / steady running
    Z3,
    /// Threshold / marathon-effort running
    Z4,
    /// VO2 / fast running
    Z5,
    /// Interval-speed running (relative banding only)
    Z6,
    /// Repetition-speed running (relative banding only)
    Z7,
}

impl Zone {
    /// All zones in ascending intensity order
    pub const ALL: [Self; 7] = [
        Self::Z1,
        Self::Z2,
        Self::Z3,
        Self::Z4,
        Self::Z5,
        Self::Z6,
        Self::Z7,
    ];

    /// Ordinal rank, 1 for Z1 through 7 for Z7
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Z1 => 1,
            Self::Z2 => 2,
            Self::Z3 => 3,
            Self::Z4 => 4,
            Self::Z5 => 5,
            Self::Z6 => 6,
            Self::Z7 => 7,
        }
    }

    /// Human-readable zone label for summary tables
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Z1 => "Z1 (Very easy)",
            Self::Z2 => "Z2 (Easy aerobic)",
            Self::Z3 => "Z3 (Moderate / steady)",
            Self::Z4 => "Z4 (Threshold / marathon+)",
            Self::Z5 => "Z5 (VO2 / fast)",
            Self::Z6 => "Z6 (Interval)",
            Self::Z7 => "Z7 (Repetition)",
        }
    }

    /// Target-speed factor relative to marathon speed, used by plan
    /// template expansion
    #[must_use]
    pub const fn speed_factor(self) -> f64 {
        match self {
            Self::Z1 => zone_speed_factors::Z1_FACTOR,
            Self::Z2 => zone_speed_factors::Z2_FACTOR,
            Self::Z3 => zone_speed_factors::Z3_FACTOR,
            Self::Z4 => zone_speed_factors::Z4_FACTOR,
            Self::Z5 => zone_speed_factors::Z5_FACTOR,
            Self::Z6 => zone_speed_factors::Z6_FACTOR,
            Self::Z7 => zone_speed_factors::Z7_FACTOR,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Z{}", self.ordinal())
    }
}

impl FromStr for Zone {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "Z1" => Ok(Self::Z1),
            "Z2" => Ok(Self::Z2),
            "Z3" => Ok(Self::Z3),
            "Z4" => Ok(Self::Z4),
            "Z5" => Ok(Self::Z5),
            "Z6" => Ok(Self::Z6),
            "Z7" => Ok(Self::Z7),
            other => Err(AppError::invalid_input(format!(
                "Unknown zone: '{other}'. Valid options: Z1-Z7"
            ))),
        }
    }
}

/// Zone tag attached to a segment row.
///
/// Plans occasionally label a segment with a pair like `"Z2_Z3"`; such
/// mixed tags split their distance and time evenly between the two
/// constituent zones during aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ZoneTag {
    /// A single zone
    Single(Zone),
    /// A 50/50 blend of two zones
    Mixed(Zone, Zone),
}

impl ZoneTag {
    /// Zones covered by this tag with their aggregation weights
    /// (1.0 for a single tag, 0.5 each for a mixed tag)
    #[must_use]
    pub fn shares(self) -> Vec<(Zone, f64)> {
        match self {
            Self::Single(zone) => vec![(zone, 1.0)],
            Self::Mixed(first, second) => vec![(first, 0.5), (second, 0.5)],
        }
    }

    /// Highest-intensity zone covered by this tag
    #[must_use]
    pub fn dominant(self) -> Zone {
        match self {
            Self::Single(zone) => zone,
            Self::Mixed(first, second) => first.max(second),
        }
    }
}

impl Default for ZoneTag {
    fn default() -> Self {
        Self::Single(Zone::Z1)
    }
}

impl fmt::Display for ZoneTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(zone) => write!(f, "{zone}"),
            Self::Mixed(first, second) => write!(f, "{first}_{second}"),
        }
    }
}

impl FromStr for ZoneTag {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.split_once('_') {
            None => Ok(Self::Single(trimmed.parse()?)),
            Some((first, second)) => Ok(Self::Mixed(first.parse()?, second.parse()?)),
        }
    }
}

impl From<ZoneTag> for String {
    fn from(tag: ZoneTag) -> Self {
        tag.to_string()
    }
}

impl TryFrom<String> for ZoneTag {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Zone> for ZoneTag {
    fn from(zone: Zone) -> Self {
        Self::Single(zone)
    }
}

/// Banding table for relative-to-marathon-pace classification
///
/// Buckets the speed ratio `segment_speed / mp_speed` into zones. Both
/// tables are monotonic: a higher ratio never maps to a lower zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ZoneBandingPolicy {
    /// Five bands, Z1-Z5, with Z3 centered on marathon pace
    #[default]
    FiveBand,
    /// Seven bands, Z1-Z7, with Z5 centered on marathon pace
    SevenBand,
}

/// Zones assigned by the five-band table, ascending
const FIVE_BAND_ZONES: [Zone; 5] = [Zone::Z1, Zone::Z2, Zone::Z3, Zone::Z4, Zone::Z5];

/// Zones assigned by the seven-band table, ascending
const SEVEN_BAND_ZONES: [Zone; 7] = [
    Zone::Z1,
    Zone::Z2,
    Zone::Z3,
    Zone::Z4,
    Zone::Z5,
    Zone::Z6,
    Zone::Z7,
];

impl ZoneBandingPolicy {
    /// Classify a speed ratio (`segment_speed / mp_speed`) into a zone
    #[must_use]
    pub fn classify(self, speed_ratio: f64) -> Zone {
        match self {
            Self::FiveBand => Self::bucket(speed_ratio, &FIVE_BAND_UPPER_BOUNDS, &FIVE_BAND_ZONES),
            Self::SevenBand => {
                Self::bucket(speed_ratio, &SEVEN_BAND_UPPER_BOUNDS, &SEVEN_BAND_ZONES)
            }
        }
    }

    /// Classify a segment pace against a marathon pace, both in minutes
    /// per km. `None` when either pace is non-positive or non-finite.
    #[must_use]
    pub fn classify_pace(self, segment_pace: f64, marathon_pace: f64) -> Option<Zone> {
        if !segment_pace.is_finite()
            || !marathon_pace.is_finite()
            || segment_pace <= 0.0
            || marathon_pace <= 0.0
        {
            return None;
        }
        // speed_ratio = seg_speed / mp_speed = mp_pace / seg_pace
        Some(self.classify(marathon_pace / segment_pace))
    }

    /// Number of bands in this table
    #[must_use]
    pub const fn band_count(self) -> usize {
        match self {
            Self::FiveBand => 5,
            Self::SevenBand => 7,
        }
    }

    /// Policy name for configuration and display
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FiveBand => "five_band",
            Self::SevenBand => "seven_band",
        }
    }

    fn bucket(speed_ratio: f64, upper_bounds: &[f64], zones: &[Zone]) -> Zone {
        for (bound, zone) in upper_bounds.iter().zip(zones) {
            if speed_ratio < *bound {
                return *zone;
            }
        }
        zones[zones.len() - 1]
    }
}

impl FromStr for ZoneBandingPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "five_band" | "5" => Ok(Self::FiveBand),
            "seven_band" | "7" => Ok(Self::SevenBand),
            other => Err(AppError::invalid_input(format!(
                "Unknown banding policy: '{other}'. Valid options: five_band, seven_band"
            ))),
        }
    }
}

/// Which classification the analyzer applies to segments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ZoneSource {
    /// Use the zone tag entered on each segment row
    #[default]
    Absolute,
    /// Recompute each segment's zone from its pace relative to a marathon
    /// pace; the user tag is ignored
    RelativeToMarathonPace {
        /// Banding table to apply
        policy: ZoneBandingPolicy,
        /// Reference marathon pace in minutes per km
        mp_min_per_km: f64,
    },
}
