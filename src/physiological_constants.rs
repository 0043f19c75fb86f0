//! Model constants for training load and durability analysis
//!
//! This module contains the fixed coefficients used throughout the analysis
//! system. Values come from established race-prediction literature (Riegel's
//! power law) and from fitting the durability estimators against real
//! marathon outcomes.

/// Race distances and power-law race prediction
///
/// Reference:
/// - Riegel, P.S. (1981). "Athletic records and human endurance."
///   *American Scientist*, 69(3), 285-290.
pub mod riegel {
    /// Riegel power-law exponent for running (typical range 1.03-1.08)
    pub const RIEGEL_EXPONENT: f64 = 1.06;

    /// Marathon distance in kilometers
    pub const MARATHON_DISTANCE_KM: f64 = 42.195;

    /// Half marathon distance in kilometers
    pub const HALF_MARATHON_DISTANCE_KM: f64 = 21.097_5;

    /// 10K reference distance in kilometers
    pub const TEN_K_DISTANCE_KM: f64 = 10.0;
}

/// Marathon finish-time model fitted to average training speed
///
/// `MPT_minutes = MPT_COEFFICIENT x ATS^MPT_EXPONENT / DF`
pub mod marathon_prediction {
    /// Multiplier of the ATS power law (minutes at ATS = 1 km/h)
    pub const MPT_COEFFICIENT: f64 = 4666.0;

    /// Exponent of the ATS power law
    pub const MPT_EXPONENT: f64 = -1.33;

    /// Flat offset carried by one revision of the model (minutes).
    /// Kept selectable; the default model applies no offset.
    pub const LEGACY_OFFSET_MINUTES: f64 = 8.0;
}

/// Durability factor estimator coefficients and saturation bounds
///
/// Three independent estimators plus the tunable zone-balance model; each
/// clamps to its own range rather than rejecting out-of-range results.
pub mod durability {
    /// Typical marathon decay ratio (actual/Riegel-predicted) for a
    /// well-trained runner; the decay+volume estimator measures deviation
    /// from this reference
    pub const TYPICAL_DECAY_RATIO: f64 = 1.08;

    /// Sensitivity of the decay+volume estimator to decay-ratio deviation
    pub const DECAY_SENSITIVITY: f64 = 1.5;

    /// Ideal annual running volume for full durability (km/year)
    pub const REFERENCE_ANNUAL_VOLUME_KM: f64 = 6000.0;

    /// DF adjustment per 100% deviation from the reference annual volume
    pub const VOLUME_ADJUSTMENT_RATE: f64 = 0.15;

    /// Decay+volume estimator saturation bounds
    pub const DECAY_VOLUME_DF_MIN: f64 = 0.75;
    pub const DECAY_VOLUME_DF_MAX: f64 = 1.30;

    /// Race-ratio estimator saturation bounds
    pub const RACE_RATIO_DF_MIN: f64 = 0.80;
    pub const RACE_RATIO_DF_MAX: f64 = 1.20;

    /// Regression estimator coefficients:
    /// `DF = INTERCEPT + ATS_COEFF x ATS + ELEVATION_COEFF x gain_m + GAP_COEFF x gap10k`
    pub const REGRESSION_INTERCEPT: f64 = 1.768;
    pub const REGRESSION_ATS_COEFF: f64 = -0.049;
    pub const REGRESSION_ELEVATION_COEFF: f64 = -0.000_006_9;
    pub const REGRESSION_GAP_COEFF: f64 = 0.118;

    /// Regression estimator saturation bounds
    pub const REGRESSION_DF_MIN: f64 = 0.80;
    pub const REGRESSION_DF_MAX: f64 = 1.20;

    /// Zone-balance estimator defaults: base DF plus easy-volume and
    /// long-run credits minus a quality-volume penalty, per 10 units
    pub const ZONE_BALANCE_BASE_DF: f64 = 1.00;
    pub const ZONE_BALANCE_EASY_RATE: f64 = 0.020;
    pub const ZONE_BALANCE_LONG_RUN_RATE: f64 = 0.015;
    pub const ZONE_BALANCE_QUALITY_PENALTY: f64 = 0.010;
    pub const ZONE_BALANCE_DF_MIN: f64 = 0.50;
    pub const ZONE_BALANCE_DF_CAP: f64 = 1.15;

    /// Manual DF override saturation bounds (direct user entry)
    pub const MANUAL_DF_MIN: f64 = 0.50;
    pub const MANUAL_DF_MAX: f64 = 2.00;
}

/// Speed-ratio thresholds for relative-to-marathon-pace zone banding
///
/// Each table lists ascending upper bounds on `segment_speed / mp_speed`;
/// a ratio at or above the last bound falls in the top zone.
pub mod zone_bands {
    /// Five-band table upper bounds for Z1..Z4 (Z5 is open-ended)
    pub const FIVE_BAND_UPPER_BOUNDS: [f64; 4] = [0.85, 0.95, 1.05, 1.15];

    /// Seven-band table upper bounds for Z1..Z6 (Z7 is open-ended)
    pub const SEVEN_BAND_UPPER_BOUNDS: [f64; 6] = [0.70, 0.80, 0.90, 0.95, 1.02, 1.10];
}

/// Zone target-pace factors for plan template expansion
///
/// Target speed for a zone is `mp_speed x factor`, so target pace is
/// `mp_pace / factor`. Factors span recovery jogging (0.78) to repetition
/// speed (1.18).
pub mod zone_speed_factors {
    /// Z1 very easy running relative to marathon speed
    pub const Z1_FACTOR: f64 = 0.78;
    /// Z2 easy aerobic running
    pub const Z2_FACTOR: f64 = 0.86;
    /// Z3 steady / moderate running
    pub const Z3_FACTOR: f64 = 0.94;
    /// Z4 marathon-effort running
    pub const Z4_FACTOR: f64 = 1.00;
    /// Z5 threshold running
    pub const Z5_FACTOR: f64 = 1.06;
    /// Z6 interval / VO2 running
    pub const Z6_FACTOR: f64 = 1.12;
    /// Z7 repetition / speed running
    pub const Z7_FACTOR: f64 = 1.18;
}
