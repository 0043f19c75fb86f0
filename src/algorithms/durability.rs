// ABOUTME: Durability factor estimation with multiple independent strategy implementations
// ABOUTME: Decay+volume, race-ratio, regression, and tunable zone-balance estimators with per-variant clamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Strideplan Contributors

use crate::algorithms::prediction::riegel_predict;
use crate::errors::{AppError, AppResult};
use crate::models::WeeklySummary;
use crate::physiological_constants::durability::{
    DECAY_SENSITIVITY, DECAY_VOLUME_DF_MAX, DECAY_VOLUME_DF_MIN, MANUAL_DF_MAX, MANUAL_DF_MIN,
    RACE_RATIO_DF_MAX, RACE_RATIO_DF_MIN, REFERENCE_ANNUAL_VOLUME_KM, REGRESSION_ATS_COEFF,
    REGRESSION_DF_MAX, REGRESSION_DF_MIN, REGRESSION_ELEVATION_COEFF, REGRESSION_GAP_COEFF,
    REGRESSION_INTERCEPT, TYPICAL_DECAY_RATIO, VOLUME_ADJUSTMENT_RATE, ZONE_BALANCE_BASE_DF,
    ZONE_BALANCE_DF_CAP, ZONE_BALANCE_DF_MIN, ZONE_BALANCE_EASY_RATE, ZONE_BALANCE_LONG_RUN_RATE,
    ZONE_BALANCE_QUALITY_PENALTY,
};
use crate::physiological_constants::riegel::{
    HALF_MARATHON_DISTANCE_KM, MARATHON_DISTANCE_KM, RIEGEL_EXPONENT, TEN_K_DISTANCE_KM,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Inputs consumed by the durability estimators.
///
/// The strategies take independent, non-overlapping subsets of these
/// fields; each variant validates the fields it needs and ignores the
/// rest. `None` means "not provided by the caller".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct DurabilityInputs {
    /// Average training speed in km/h (regression estimator)
    pub ats_kmh: Option<f64>,
    /// Actual 10K race time in minutes
    pub ten_k_minutes: Option<f64>,
    /// Externally predicted 10K time in minutes, e.g. from a VDOT-style
    /// table (regression estimator)
    pub predicted_ten_k_minutes: Option<f64>,
    /// Actual half-marathon race time in minutes
    pub half_marathon_minutes: Option<f64>,
    /// Actual marathon race time in minutes
    pub marathon_minutes: Option<f64>,
    /// Annual running volume in km/year (decay+volume estimator)
    pub annual_volume_km: Option<f64>,
    /// Annual elevation gain in meters (regression estimator)
    pub annual_elevation_gain_m: Option<f64>,
    /// Z1+Z2 share of weekly distance, 0-100 (zone-balance estimator)
    pub easy_percent: Option<f64>,
    /// Z4+ share of weekly distance, 0-100 (zone-balance estimator)
    pub quality_percent: Option<f64>,
    /// Long-run distance in km (zone-balance estimator)
    pub long_run_km: Option<f64>,
}

impl DurabilityInputs {
    /// Seed the weekly-plan-derived fields from an analyzer summary;
    /// race times and annual figures are added separately
    #[must_use]
    pub fn from_summary(summary: &WeeklySummary) -> Self {
        Self {
            ats_kmh: summary.ats_kmh,
            easy_percent: summary.easy_percent,
            quality_percent: summary.quality_percent,
            long_run_km: Some(summary.long_run_km),
            ..Self::default()
        }
    }

    /// Set the actual 10K time in minutes
    #[must_use]
    pub const fn with_ten_k(mut self, minutes: f64) -> Self {
        self.ten_k_minutes = Some(minutes);
        self
    }

    /// Set the actual half-marathon time in minutes
    #[must_use]
    pub const fn with_half_marathon(mut self, minutes: f64) -> Self {
        self.half_marathon_minutes = Some(minutes);
        self
    }

    /// Set the actual marathon time in minutes
    #[must_use]
    pub const fn with_marathon(mut self, minutes: f64) -> Self {
        self.marathon_minutes = Some(minutes);
        self
    }

    /// Set the annual volume in km/year
    #[must_use]
    pub const fn with_annual_volume(mut self, km: f64) -> Self {
        self.annual_volume_km = Some(km);
        self
    }

    /// Set the annual elevation gain in meters
    #[must_use]
    pub const fn with_annual_elevation_gain(mut self, meters: f64) -> Self {
        self.annual_elevation_gain_m = Some(meters);
        self
    }

    /// Set the externally predicted 10K time in minutes
    #[must_use]
    pub const fn with_predicted_ten_k(mut self, minutes: f64) -> Self {
        self.predicted_ten_k_minutes = Some(minutes);
        self
    }
}

/// Durability factor estimation strategy.
///
/// The estimators are alternative experimental models, not refinements of
/// one another: they take disjoint inputs, use different clamp ranges, and
/// are never blended. Callers pick one and compare.
///
/// - `DecayVolume`: marathon decay ratio vs a Riegel prediction, adjusted
///   by annual volume
/// - `RaceRatio`: averaged Riegel predictions from shorter races over the
///   actual marathon time
/// - `Regression`: linear model over ATS, elevation gain, and 10K gap
/// - `ZoneBalance`: tunable coefficients over the weekly zone balance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DurabilityAlgorithm {
    /// Decay-ratio estimator with annual-volume adjustment
    ///
    /// `base = 1 + (1.08 - actual/predicted) x 1.5`, scaled by
    /// `1 + 0.15 x (volume - 6000)/6000`. Clamp [0.75, 1.30].
    ///
    /// Requires: 10K time, marathon time, annual volume.
    DecayVolume,

    /// Averaged race-prediction ratio
    ///
    /// `DF = mean(Riegel predictions) / actual marathon`; a missing or
    /// non-positive actual time yields the neutral 1.0. Clamp [0.80, 1.20].
    ///
    /// Requires: a 10K and/or half-marathon time.
    #[default]
    RaceRatio,

    /// Linear regression heuristic
    ///
    /// `DF = 1.768 - 0.049xATS - 0.0000069xgain + 0.118xgap10k` with
    /// `gap10k = (actual - predicted)/predicted`. Clamp [0.80, 1.20].
    ///
    /// Requires: ATS, annual elevation gain, actual and predicted 10K.
    Regression,

    /// Tunable zone-balance model
    ///
    /// `DF = base + a_easy x easy%/10 + a_long x longRun/10 -
    /// a_z4 x quality%/10`, clamped to [0.50, cap]. Coefficients are meant
    /// to be adjusted until the model matches real outcomes.
    ///
    /// Requires: easy percent, quality percent, long-run distance.
    ZoneBalance {
        /// Starting DF before adjustments
        base_df: f64,
        /// Credit per 10 percentage points of Z1+Z2 volume
        easy_rate: f64,
        /// Credit per 10 km of long run
        long_run_rate: f64,
        /// Penalty per 10 percentage points of Z4+ volume
        quality_penalty: f64,
        /// Upper saturation bound
        max_df: f64,
    },
}

impl DurabilityAlgorithm {
    /// Zone-balance estimator with the default coefficients
    #[must_use]
    pub const fn zone_balance() -> Self {
        Self::ZoneBalance {
            base_df: ZONE_BALANCE_BASE_DF,
            easy_rate: ZONE_BALANCE_EASY_RATE,
            long_run_rate: ZONE_BALANCE_LONG_RUN_RATE,
            quality_penalty: ZONE_BALANCE_QUALITY_PENALTY,
            max_df: ZONE_BALANCE_DF_CAP,
        }
    }

    /// Estimate the durability factor from the provided inputs.
    ///
    /// The result is always saturated to this estimator's clamp bounds;
    /// out-of-range model output is a saturation case, not an error.
    ///
    /// # Errors
    ///
    /// Returns `AppError::MissingRequiredField` when a field this variant
    /// needs is absent, and `AppError::InvalidInput` when a provided field
    /// is non-finite or out of domain (e.g. a non-positive race time).
    pub fn calculate(&self, inputs: &DurabilityInputs) -> AppResult<f64> {
        let df = match self {
            Self::DecayVolume => Self::calculate_decay_volume(inputs)?,
            Self::RaceRatio => Self::calculate_race_ratio(inputs)?,
            Self::Regression => Self::calculate_regression(inputs)?,
            Self::ZoneBalance {
                base_df,
                easy_rate,
                long_run_rate,
                quality_penalty,
                max_df: _,
            } => Self::calculate_zone_balance(
                inputs,
                *base_df,
                *easy_rate,
                *long_run_rate,
                *quality_penalty,
            )?,
        };

        let (low, high) = self.clamp_bounds();
        Ok(df.clamp(low, high))
    }

    /// Saturation bounds applied to this estimator's output
    #[must_use]
    pub const fn clamp_bounds(&self) -> (f64, f64) {
        match self {
            Self::DecayVolume => (DECAY_VOLUME_DF_MIN, DECAY_VOLUME_DF_MAX),
            Self::RaceRatio => (RACE_RATIO_DF_MIN, RACE_RATIO_DF_MAX),
            Self::Regression => (REGRESSION_DF_MIN, REGRESSION_DF_MAX),
            Self::ZoneBalance { max_df, .. } => (ZONE_BALANCE_DF_MIN, *max_df),
        }
    }

    fn calculate_decay_volume(inputs: &DurabilityInputs) -> AppResult<f64> {
        let ten_k = require_positive(inputs.ten_k_minutes, "ten_k_minutes")?;
        let marathon = require_positive(inputs.marathon_minutes, "marathon_minutes")?;
        let volume = require_non_negative(inputs.annual_volume_km, "annual_volume_km")?;

        let predicted = riegel_predict(
            TEN_K_DISTANCE_KM,
            ten_k,
            MARATHON_DISTANCE_KM,
            RIEGEL_EXPONENT,
        )?;
        let decay_ratio = marathon / predicted;
        let base_df = (TYPICAL_DECAY_RATIO - decay_ratio).mul_add(DECAY_SENSITIVITY, 1.0);

        let volume_deviation = (volume - REFERENCE_ANNUAL_VOLUME_KM) / REFERENCE_ANNUAL_VOLUME_KM;
        let volume_adjustment = volume_deviation.mul_add(VOLUME_ADJUSTMENT_RATE, 1.0);

        Ok(base_df * volume_adjustment)
    }

    fn calculate_race_ratio(inputs: &DurabilityInputs) -> AppResult<f64> {
        let mut predictions = Vec::with_capacity(2);
        if let Some(ten_k) = inputs.ten_k_minutes {
            let ten_k = require_positive(Some(ten_k), "ten_k_minutes")?;
            predictions.push(riegel_predict(
                TEN_K_DISTANCE_KM,
                ten_k,
                MARATHON_DISTANCE_KM,
                RIEGEL_EXPONENT,
            )?);
        }
        if let Some(half) = inputs.half_marathon_minutes {
            let half = require_positive(Some(half), "half_marathon_minutes")?;
            predictions.push(riegel_predict(
                HALF_MARATHON_DISTANCE_KM,
                half,
                MARATHON_DISTANCE_KM,
                RIEGEL_EXPONENT,
            )?);
        }

        if predictions.is_empty() {
            return Err(AppError::invalid_input(
                "Race-ratio estimator needs a 10K or half-marathon time",
            ));
        }

        // A missing or non-positive actual marathon time is neutral, not
        // an error: the runner simply has no marathon on record yet.
        let actual = match inputs.marathon_minutes {
            Some(minutes) if minutes.is_finite() && minutes > 0.0 => minutes,
            _ => return Ok(1.0),
        };

        let average_predicted = predictions.iter().sum::<f64>() / predictions.len() as f64;
        Ok(average_predicted / actual)
    }

    fn calculate_regression(inputs: &DurabilityInputs) -> AppResult<f64> {
        let ats = require_positive(inputs.ats_kmh, "ats_kmh")?;
        let elevation =
            require_non_negative(inputs.annual_elevation_gain_m, "annual_elevation_gain_m")?;
        let actual_ten_k = require_positive(inputs.ten_k_minutes, "ten_k_minutes")?;
        let predicted_ten_k =
            require_positive(inputs.predicted_ten_k_minutes, "predicted_ten_k_minutes")?;

        let gap_ten_k = (actual_ten_k - predicted_ten_k) / predicted_ten_k;

        let df = REGRESSION_GAP_COEFF.mul_add(
            gap_ten_k,
            REGRESSION_ELEVATION_COEFF.mul_add(
                elevation,
                REGRESSION_ATS_COEFF.mul_add(ats, REGRESSION_INTERCEPT),
            ),
        );
        Ok(df)
    }

    fn calculate_zone_balance(
        inputs: &DurabilityInputs,
        base_df: f64,
        easy_rate: f64,
        long_run_rate: f64,
        quality_penalty: f64,
    ) -> AppResult<f64> {
        let easy = require_non_negative(inputs.easy_percent, "easy_percent")?;
        let quality = require_non_negative(inputs.quality_percent, "quality_percent")?;
        let long_run = require_non_negative(inputs.long_run_km, "long_run_km")?;

        let df = quality_penalty.mul_add(
            -(quality / 10.0),
            long_run_rate.mul_add(
                long_run / 10.0,
                easy_rate.mul_add(easy / 10.0, base_df),
            ),
        );
        Ok(df)
    }

    /// Estimator name for configuration and display
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DecayVolume => "decay_volume",
            Self::RaceRatio => "race_ratio",
            Self::Regression => "regression",
            Self::ZoneBalance { .. } => "zone_balance",
        }
    }

    /// Short description of the estimator
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::DecayVolume => {
                "Marathon decay ratio vs Riegel prediction with annual-volume adjustment".to_owned()
            }
            Self::RaceRatio => {
                "Averaged Riegel marathon predictions over the actual marathon time".to_owned()
            }
            Self::Regression => {
                "Linear regression over ATS, elevation gain, and 10K gap".to_owned()
            }
            Self::ZoneBalance { base_df, .. } => {
                format!("Tunable zone-balance model (base DF {base_df:.2})")
            }
        }
    }

    /// The estimator formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::DecayVolume => {
                "DF = (1 + (1.08 - decay) x 1.5) x (1 + 0.15 x (vol - 6000)/6000)"
            }
            Self::RaceRatio => "DF = mean(Riegel predictions) / actual marathon",
            Self::Regression => "DF = 1.768 - 0.049xATS - 0.0000069xgain + 0.118xgap10k",
            Self::ZoneBalance { .. } => {
                "DF = base + a_easy x easy%/10 + a_long x long/10 - a_z4 x quality%/10"
            }
        }
    }
}

impl FromStr for DurabilityAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "decay_volume" => Ok(Self::DecayVolume),
            "race_ratio" => Ok(Self::RaceRatio),
            "regression" => Ok(Self::Regression),
            "zone_balance" => Ok(Self::zone_balance()),
            other => Err(AppError::invalid_input(format!(
                "Unknown durability estimator: '{other}'. Valid options: decay_volume, race_ratio, regression, zone_balance"
            ))),
        }
    }
}

/// Saturate a manually entered durability factor to the allowed entry
/// range [0.50, 2.00]. Non-finite input falls back to the neutral 1.0.
#[must_use]
pub fn clamp_manual(durability_factor: f64) -> f64 {
    if !durability_factor.is_finite() {
        return 1.0;
    }
    durability_factor.clamp(MANUAL_DF_MIN, MANUAL_DF_MAX)
}

fn require_positive(value: Option<f64>, field: &str) -> AppResult<f64> {
    let value = value.ok_or_else(|| AppError::missing_field(field))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "{field} must be a positive finite number, got {value}"
        )));
    }
    Ok(value)
}

fn require_non_negative(value: Option<f64>, field: &str) -> AppResult<f64> {
    let value = value.ok_or_else(|| AppError::missing_field(field))?;
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::invalid_input(format!(
            "{field} must be a non-negative finite number, got {value}"
        )));
    }
    Ok(value)
}
