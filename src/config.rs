// ABOUTME: Model configuration with environment-variable overrides and compiled defaults
// ABOUTME: Covers the prediction offset, Riegel exponent, and zone banding selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Strideplan Contributors

use crate::algorithms::MarathonTimeModel;
use crate::physiological_constants::riegel::RIEGEL_EXPONENT;
use crate::zones::ZoneBandingPolicy;
use serde::{Deserialize, Serialize};
use std::env;

/// Marathon prediction configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionConfig {
    /// Flat offset added to the power-law prediction (minutes)
    pub offset_minutes: f64,
    /// Riegel power-law exponent used by the durability estimators
    pub riegel_exponent: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            offset_minutes: 0.0,
            riegel_exponent: RIEGEL_EXPONENT,
        }
    }
}

impl PredictionConfig {
    /// Load prediction configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            offset_minutes: env::var("STRIDEPLAN_MPT_OFFSET_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0.0),
            riegel_exponent: env::var("STRIDEPLAN_RIEGEL_EXPONENT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(RIEGEL_EXPONENT),
        }
    }

    /// Build the prediction model described by this configuration
    #[must_use]
    pub const fn model(&self) -> MarathonTimeModel {
        MarathonTimeModel::with_offset(self.offset_minutes)
    }
}

/// Zone classification configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ZoneConfig {
    /// Banding table for relative-to-marathon-pace classification
    pub banding: ZoneBandingPolicy,
}

impl ZoneConfig {
    /// Load zone configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            banding: env::var("STRIDEPLAN_ZONE_BANDING")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prediction = PredictionConfig::default();
        assert!((prediction.offset_minutes).abs() < f64::EPSILON);
        assert!((prediction.riegel_exponent - 1.06).abs() < f64::EPSILON);
        assert_eq!(ZoneConfig::default().banding, ZoneBandingPolicy::FiveBand);
    }

    #[test]
    fn test_model_carries_offset() {
        let config = PredictionConfig {
            offset_minutes: 8.0,
            ..PredictionConfig::default()
        };
        assert!((config.model().offset_minutes - 8.0).abs() < f64::EPSILON);
    }
}
