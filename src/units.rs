// ABOUTME: Time and pace string parsing with speed/pace conversion and display formatting
// ABOUTME: Pure, total functions - every input yields a value, a parse error, or a None sentinel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Strideplan Contributors

use crate::errors::{AppError, AppResult};

/// Parse a time string into minutes.
///
/// Accepts `h:mm:ss`, `mm:ss`, or a bare number read as decimal minutes.
/// Component values are not range-checked (`"7:75"` is 8.25 minutes), only
/// required to be numeric.
///
/// # Errors
///
/// Returns `AppError::InvalidFormat` when the string is empty, a component
/// is non-numeric, the result is non-finite, or there are more than two
/// colons.
pub fn parse_minutes(input: &str) -> AppResult<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_format("empty time string"));
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    let minutes = match parts.as_slice() {
        [minutes] => parse_component(minutes, trimmed)?,
        [minutes, seconds] => {
            parse_component(minutes, trimmed)? + parse_component(seconds, trimmed)? / 60.0
        }
        [hours, minutes, seconds] => {
            parse_component(hours, trimmed)?.mul_add(
                60.0,
                parse_component(minutes, trimmed)?,
            ) + parse_component(seconds, trimmed)? / 60.0
        }
        _ => {
            return Err(AppError::invalid_format(format!(
                "time '{trimmed}' has too many components (expected h:mm:ss, mm:ss, or minutes)"
            )))
        }
    };

    if minutes.is_finite() {
        Ok(minutes)
    } else {
        Err(AppError::invalid_format(format!(
            "time '{trimmed}' is not a finite number of minutes"
        )))
    }
}

/// Parse a pace string into minutes per kilometer.
///
/// Accepts `m:ss` (e.g. `"4:30"`) or a bare number read as decimal minutes
/// per km (e.g. `"4.5"`). The three-component form is a time, not a pace,
/// and is rejected.
///
/// # Errors
///
/// Returns `AppError::InvalidFormat` for empty, non-numeric, non-finite, or
/// multi-colon input.
pub fn parse_pace(input: &str) -> AppResult<f64> {
    let trimmed = input.trim();
    if trimmed.matches(':').count() > 1 {
        return Err(AppError::invalid_format(format!(
            "pace '{trimmed}' must be m:ss or decimal minutes per km"
        )));
    }
    parse_minutes(trimmed)
}

fn parse_component(part: &str, original: &str) -> AppResult<f64> {
    part.trim().parse::<f64>().map_err(|_| {
        AppError::invalid_format(format!(
            "non-numeric component '{part}' in time '{original}'"
        ))
    })
}

/// Speed in km/h from distance and elapsed minutes.
///
/// `None` when the elapsed time is non-positive or either input is
/// non-finite.
#[must_use]
pub fn speed_kmh(distance_km: f64, time_minutes: f64) -> Option<f64> {
    if !distance_km.is_finite() || !time_minutes.is_finite() || time_minutes <= 0.0 {
        return None;
    }
    let speed = distance_km / (time_minutes / 60.0);
    speed.is_finite().then_some(speed)
}

/// Pace in minutes per km from speed in km/h; `None` for non-positive or
/// non-finite speed.
#[must_use]
pub fn pace_from_speed(speed_kmh: f64) -> Option<f64> {
    if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
        return None;
    }
    Some(60.0 / speed_kmh)
}

/// Speed in km/h from pace in minutes per km; `None` for non-positive or
/// non-finite pace.
#[must_use]
pub fn speed_from_pace(pace_min_per_km: f64) -> Option<f64> {
    if !pace_min_per_km.is_finite() || pace_min_per_km <= 0.0 {
        return None;
    }
    Some(60.0 / pace_min_per_km)
}

/// Format minutes as `h:mm:ss` with zero-padded minutes and seconds.
///
/// Always three components (`125.5` minutes renders as `"2:05:30"`).
/// Negative and non-finite inputs clamp to `"0:00:00"`.
#[must_use]
pub fn format_hms(minutes: f64) -> String {
    if !minutes.is_finite() {
        return "0:00:00".to_owned();
    }
    let total_seconds = (minutes * 60.0).round().max(0.0) as u64;
    let hours = total_seconds / 3600;
    let mins = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{hours}:{mins:02}:{secs:02}")
}

/// Format a pace in minutes per km as `"m:ss /km"`.
///
/// Rounding that produces 60 seconds rolls over into the minute
/// (`4.999 → "5:00 /km"`, never `"4:60"`). Non-positive or non-finite
/// paces render as `"N/A"`.
#[must_use]
pub fn format_pace(min_per_km: f64) -> String {
    let compact = format_pace_compact(min_per_km);
    if compact == "N/A" {
        compact
    } else {
        format!("{compact} /km")
    }
}

/// Format a pace as `"m:ss"` without the unit suffix, for storage in
/// segment rows.
#[must_use]
pub fn format_pace_compact(min_per_km: f64) -> String {
    if !min_per_km.is_finite() || min_per_km <= 0.0 {
        return "N/A".to_owned();
    }
    let mut minutes = min_per_km.floor() as u64;
    let mut seconds = ((min_per_km - min_per_km.floor()) * 60.0).round() as u64;
    if seconds == 60 {
        minutes += 1;
        seconds = 0;
    }
    format!("{minutes}:{seconds:02}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes_all_forms() {
        assert!((parse_minutes("4:30").unwrap() - 4.5).abs() < f64::EPSILON);
        assert!((parse_minutes("1:05:30").unwrap() - 65.5).abs() < f64::EPSILON);
        assert!((parse_minutes("90").unwrap() - 90.0).abs() < f64::EPSILON);
        assert!((parse_minutes(" 4.5 ").unwrap() - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_minutes_failures() {
        assert!(parse_minutes("").is_err());
        assert!(parse_minutes("   ").is_err());
        assert!(parse_minutes("abc").is_err());
        assert!(parse_minutes("4:xx").is_err());
        assert!(parse_minutes("1:2:3:4").is_err());
        assert!(parse_minutes("inf").is_err());
        assert!(parse_minutes("NaN").is_err());
    }

    #[test]
    fn test_parse_pace_rejects_three_components() {
        assert!(parse_pace("1:10:00").is_err());
        assert!((parse_pace("4:30").unwrap() - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_speed_pace_round_trip() {
        let speed = 12.5;
        let pace = pace_from_speed(speed).unwrap();
        let back = speed_from_pace(pace).unwrap();
        assert!((back - speed).abs() < 1e-9);
    }

    #[test]
    fn test_speed_undefined_for_zero_time() {
        assert_eq!(speed_kmh(10.0, 0.0), None);
        assert_eq!(speed_kmh(10.0, -5.0), None);
        assert_eq!(speed_kmh(10.0, f64::NAN), None);
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(125.5), "2:05:30");
        assert_eq!(format_hms(0.0), "0:00:00");
        assert_eq!(format_hms(-3.0), "0:00:00");
        assert_eq!(format_hms(59.999), "1:00:00");
    }

    #[test]
    fn test_format_pace_rollover() {
        assert_eq!(format_pace(4.5), "4:30 /km");
        assert_eq!(format_pace(4.999), "5:00 /km");
        assert_eq!(format_pace(0.0), "N/A");
        assert_eq!(format_pace(f64::NAN), "N/A");
    }
}
