// ABOUTME: Marathon finish-time prediction from average training speed and durability factor
// ABOUTME: Power-law model with a configurable flat offset, plus the shared Riegel helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Strideplan Contributors

use crate::errors::{AppError, AppResult};
use crate::physiological_constants::marathon_prediction::{MPT_COEFFICIENT, MPT_EXPONENT};
use crate::physiological_constants::riegel::MARATHON_DISTANCE_KM;
use serde::{Deserialize, Serialize};

/// Marathon finish-time model fitted to average training speed.
///
/// `MPT_minutes = 4666 x ATS^-1.33 / DF + offset`
///
/// One model revision carried a flat +8-minute offset; the offset is a
/// configurable parameter defaulting to zero rather than a silent choice
/// (see `marathon_prediction::LEGACY_OFFSET_MINUTES`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MarathonTimeModel {
    /// Flat offset added to the power-law prediction (minutes)
    pub offset_minutes: f64,
}

impl MarathonTimeModel {
    /// Model with no offset (the default form)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offset_minutes: 0.0,
        }
    }

    /// Model with a flat offset in minutes
    #[must_use]
    pub const fn with_offset(offset_minutes: f64) -> Self {
        Self { offset_minutes }
    }

    /// Predict the marathon finish time in minutes.
    ///
    /// `None` when ATS or DF is non-positive or non-finite; callers must
    /// check before formatting.
    #[must_use]
    pub fn predict_minutes(self, ats_kmh: f64, durability_factor: f64) -> Option<f64> {
        if !ats_kmh.is_finite()
            || !durability_factor.is_finite()
            || ats_kmh <= 0.0
            || durability_factor <= 0.0
        {
            return None;
        }
        let minutes = MPT_COEFFICIENT * ats_kmh.powf(MPT_EXPONENT) / durability_factor
            + self.offset_minutes;
        minutes.is_finite().then_some(minutes)
    }

    /// Marathon pace in minutes per km for a predicted finish time
    #[must_use]
    pub fn predicted_pace(mpt_minutes: f64) -> Option<f64> {
        if !mpt_minutes.is_finite() || mpt_minutes <= 0.0 {
            return None;
        }
        Some(mpt_minutes / MARATHON_DISTANCE_KM)
    }

    /// The model formula as a string
    #[must_use]
    pub fn formula(self) -> String {
        if self.offset_minutes.abs() < f64::EPSILON {
            "MPT = 4666 x ATS^-1.33 / DF".to_owned()
        } else {
            format!(
                "MPT = 4666 x ATS^-1.33 / DF + {offset}",
                offset = self.offset_minutes
            )
        }
    }
}

/// Predict a race time with Riegel's power law.
///
/// `T2 = T1 x (D2/D1)^exponent`
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if any distance or time is
/// non-positive or non-finite.
pub fn riegel_predict(
    known_distance_km: f64,
    known_minutes: f64,
    target_distance_km: f64,
    exponent: f64,
) -> AppResult<f64> {
    if known_distance_km <= 0.0 || known_minutes <= 0.0 || target_distance_km <= 0.0 {
        return Err(AppError::invalid_input(
            "All distances and times must be positive",
        ));
    }
    if !known_distance_km.is_finite() || !known_minutes.is_finite() || !target_distance_km.is_finite()
    {
        return Err(AppError::invalid_input(
            "All distances and times must be finite",
        ));
    }

    let distance_ratio = target_distance_km / known_distance_km;
    Ok(known_minutes * distance_ratio.powf(exponent))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::physiological_constants::riegel::{RIEGEL_EXPONENT, TEN_K_DISTANCE_KM};

    #[test]
    fn test_predict_matches_power_law() {
        let model = MarathonTimeModel::new();
        let predicted = model.predict_minutes(13.2, 1.0).unwrap();
        let expected = 4666.0 * 13.2_f64.powf(-1.33);
        assert!((predicted - expected).abs() < 1e-9);
    }

    #[test]
    fn test_offset_variant_adds_flat_minutes() {
        let base = MarathonTimeModel::new().predict_minutes(13.2, 1.0).unwrap();
        let offset = MarathonTimeModel::with_offset(8.0)
            .predict_minutes(13.2, 1.0)
            .unwrap();
        assert!((offset - base - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_undefined_for_degenerate_inputs() {
        let model = MarathonTimeModel::new();
        assert_eq!(model.predict_minutes(0.0, 1.0), None);
        assert_eq!(model.predict_minutes(12.0, 0.0), None);
        assert_eq!(model.predict_minutes(f64::NAN, 1.0), None);
        assert_eq!(model.predict_minutes(12.0, -0.5), None);
    }

    #[test]
    fn test_riegel_10k_to_marathon() {
        // 40:00 10K predicts ~3:05 marathon with the 1.06 exponent
        let predicted = riegel_predict(
            TEN_K_DISTANCE_KM,
            40.0,
            MARATHON_DISTANCE_KM,
            RIEGEL_EXPONENT,
        )
        .unwrap();
        let expected = 40.0 * (MARATHON_DISTANCE_KM / TEN_K_DISTANCE_KM).powf(RIEGEL_EXPONENT);
        assert!((predicted - expected).abs() < 1e-9);
        assert!(predicted > 180.0 && predicted < 190.0);
    }

    #[test]
    fn test_riegel_rejects_degenerate_inputs() {
        assert!(riegel_predict(0.0, 40.0, 42.195, 1.06).is_err());
        assert!(riegel_predict(10.0, -1.0, 42.195, 1.06).is_err());
        assert!(riegel_predict(10.0, 40.0, f64::INFINITY, 1.06).is_err());
    }
}
