// ABOUTME: Integration tests for time/pace parsing, conversion, and formatting
// ABOUTME: Covers parser totality, round-trips, and the second-rollover formatting cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Strideplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use strideplan::units::{
    format_hms, format_pace, format_pace_compact, pace_from_speed, parse_minutes, parse_pace,
    speed_from_pace, speed_kmh,
};

#[test]
fn test_parse_minutes_three_forms() {
    assert!((parse_minutes("2:05:30").unwrap() - 125.5).abs() < 1e-9);
    assert!((parse_minutes("42:12").unwrap() - 42.2).abs() < 1e-9);
    assert!((parse_minutes("95.25").unwrap() - 95.25).abs() < 1e-9);
}

#[test]
fn test_parse_is_total_over_garbage() {
    for input in ["", "  ", "::", "a:b:c", "4:5:6:7", "NaN", "inf", "-inf", "4:NaN"] {
        assert!(
            parse_minutes(input).is_err(),
            "'{input}' should be unparseable"
        );
    }
}

#[test]
fn test_pace_parser_accepts_decimal_and_mss() {
    assert!((parse_pace("4:30").unwrap() - 4.5).abs() < 1e-9);
    assert!((parse_pace("4.5").unwrap() - 4.5).abs() < 1e-9);
    assert!(parse_pace("0:04:30").is_err());
}

#[test]
fn test_speed_formula() {
    // speedKmh(d, t) == d / (t / 60)
    let speed = speed_kmh(10.0, 50.0).unwrap();
    assert!((speed - 12.0).abs() < 1e-12);
    let pace = pace_from_speed(speed).unwrap();
    assert!((pace - 5.0).abs() < 1e-12);
}

#[test]
fn test_pace_speed_round_trip_tolerance() {
    for speed in [7.5, 10.0, 12.34, 16.0, 21.1] {
        let round_tripped = speed_from_pace(pace_from_speed(speed).unwrap()).unwrap();
        assert!((round_tripped - speed).abs() < 1e-9, "speed {speed}");
    }
}

#[test]
fn test_undefined_conversions() {
    assert_eq!(speed_kmh(10.0, 0.0), None);
    assert_eq!(speed_kmh(f64::NAN, 50.0), None);
    assert_eq!(pace_from_speed(0.0), None);
    assert_eq!(speed_from_pace(-4.0), None);
}

#[test]
fn test_format_hms_examples() {
    assert_eq!(format_hms(125.5), "2:05:30");
    assert_eq!(format_hms(50.0), "0:50:00");
    assert_eq!(format_hms(181.0), "3:01:00");
    // Negative and non-finite inputs clamp to zero
    assert_eq!(format_hms(-1.0), "0:00:00");
    assert_eq!(format_hms(f64::INFINITY), "0:00:00");
}

#[test]
fn test_format_pace_with_rollover() {
    assert_eq!(format_pace(4.5), "4:30 /km");
    // Rounding up to a full minute must not render ":60"
    assert_eq!(format_pace(4.999_9), "5:00 /km");
    assert_eq!(format_pace_compact(4.999_9), "5:00");
    assert_eq!(format_pace(0.0), "N/A");
    assert_eq!(format_pace(f64::NEG_INFINITY), "N/A");
}
