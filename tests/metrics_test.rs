// ABOUTME: Integration tests for weekly plan aggregation through the public analyzer API
// ABOUTME: Covers ATS weighting, zone distribution, balance metrics, and sentinel behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Strideplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use strideplan::metrics::{average_training_speed, PlanAnalyzer};
use strideplan::models::{TrainingSegment, WeeklyPlan};
use strideplan::zones::{Zone, ZoneTag};

fn seg(day: &str, workout: &str, distance_km: f64, pace: &str, zone: Zone) -> TrainingSegment {
    TrainingSegment::new(distance_km, pace, zone.into())
        .with_day(day)
        .with_workout(workout)
}

/// The default example week: intervals, easy days, strides, cruise reps,
/// a long run with a steady finish, and a very easy day.
fn example_week() -> WeeklyPlan {
    WeeklyPlan::from_segments(vec![
        seg("Mon", "Intervals", 3.0, "5:10", Zone::Z2),
        seg("Mon", "Intervals", 8.0, "4:05", Zone::Z4),
        seg("Mon", "Intervals", 2.4, "5:40", Zone::Z1),
        seg("Mon", "Intervals", 3.0, "5:15", Zone::Z2),
        seg("Tue", "Easy", 12.0, "5:10", Zone::Z2),
        seg("Wed", "Steady + strides", 12.0, "5:05", Zone::Z2),
        seg("Wed", "Steady + strides", 0.6, "3:30", Zone::Z5),
        seg("Wed", "Steady + strides", 0.6, "5:30", Zone::Z1),
        seg("Thu", "Cruise", 3.0, "5:10", Zone::Z2),
        seg("Thu", "Cruise", 8.0, "4:20", Zone::Z4),
        seg("Thu", "Cruise", 2.0, "5:15", Zone::Z1),
        seg("Thu", "Cruise", 2.0, "5:15", Zone::Z2),
        seg("Sat", "Long run", 22.0, "4:55", Zone::Z2),
        seg("Sat", "Long run", 4.0, "4:25", Zone::Z3),
        seg("Sun", "Very easy", 8.0, "5:35", Zone::Z1),
    ])
}

#[test]
fn test_example_week_totals() {
    let analysis = PlanAnalyzer::new().analyze(&example_week());
    let summary = &analysis.summary;

    assert!((summary.total_distance_km - 90.6).abs() < 1e-9);
    // A realistic training week averages between easy and threshold speed
    let ats = summary.ats_kmh.unwrap();
    assert!(ats > 11.0 && ats < 13.0, "ATS {ats}");
    assert!((summary.long_run_km - 26.0).abs() < 1e-9);
    // Z4 volume: two 8 km rep blocks
    assert!((summary.z4_km - 16.0).abs() < 1e-9);
    assert!(summary.easy_percent.unwrap() > 60.0);
    assert_eq!(analysis.segments.len(), 15);
}

#[test]
fn test_end_to_end_single_segment() {
    // 10 km at "5:00" -> pace 5.0 -> speed 12 km/h -> 50 min -> ATS 12
    let plan = WeeklyPlan::from_segments(vec![seg("Mon", "Easy", 10.0, "5:00", Zone::Z2)]);
    let analysis = PlanAnalyzer::new().analyze(&plan);

    let detail = &analysis.segments[0];
    assert_eq!(detail.pace_min_per_km, Some(5.0));
    assert_eq!(detail.speed_kmh, Some(12.0));
    assert!((detail.time_minutes - 50.0).abs() < 1e-12);
    assert_eq!(analysis.summary.ats_kmh, Some(12.0));
}

#[test]
fn test_ats_split_invariance() {
    let joined = [seg("Tue", "Easy", 14.0, "5:20", Zone::Z2)];
    let split = [
        seg("Tue", "Easy", 9.0, "5:20", Zone::Z2),
        seg("Tue", "Easy", 5.0, "5:20", Zone::Z2),
    ];
    let whole = average_training_speed(&joined).unwrap();
    let parts = average_training_speed(&split).unwrap();
    assert!((whole - parts).abs() < 1e-12);
}

#[test]
fn test_zone_distribution_percentages_sum_to_100() {
    let analysis = PlanAnalyzer::new().analyze(&example_week());
    let total_percent: f64 = analysis
        .summary
        .zone_distribution
        .iter()
        .filter_map(|entry| entry.percent_of_distance)
        .sum();
    assert!((total_percent - 100.0).abs() < 1e-6);
}

#[test]
fn test_mixed_zone_splits_between_constituents() {
    let plan = WeeklyPlan::from_segments(vec![TrainingSegment::new(
        10.0,
        "5:00",
        ZoneTag::Mixed(Zone::Z2, Zone::Z3),
    )]);
    let analysis = PlanAnalyzer::new().analyze(&plan);
    let km_for = |zone: Zone| {
        analysis
            .summary
            .zone_distribution
            .iter()
            .find(|entry| entry.zone == zone)
            .unwrap()
            .distance_km
    };
    assert!((km_for(Zone::Z2) - 5.0).abs() < 1e-12);
    assert!((km_for(Zone::Z3) - 5.0).abs() < 1e-12);
    // Time splits too: 50 minutes total, 25 each
    let minutes: f64 = analysis
        .summary
        .zone_distribution
        .iter()
        .map(|entry| entry.time_minutes)
        .sum();
    assert!((minutes - 50.0).abs() < 1e-12);
}

#[test]
fn test_unparseable_pace_does_not_poison_the_week() {
    let plan = WeeklyPlan::from_segments(vec![
        seg("Mon", "Easy", 10.0, "5:00", Zone::Z2),
        seg("Tue", "Easy", 10.0, "five-ish", Zone::Z2),
    ]);
    let analysis = PlanAnalyzer::new().analyze(&plan);
    // ATS sees only the valid row; the invalid row still lists
    assert_eq!(analysis.summary.ats_kmh, Some(12.0));
    assert_eq!(analysis.segments[1].pace_min_per_km, None);
    assert!((analysis.segments[1].time_minutes).abs() < f64::EPSILON);
}

#[test]
fn test_prediction_fills_when_df_supplied() {
    let analyzer = PlanAnalyzer::new().with_durability_factor(1.0);
    let plan = WeeklyPlan::from_segments(vec![seg("Mon", "Easy", 10.0, "5:00", Zone::Z2)]);
    let summary = analyzer.analyze(&plan).summary;

    let expected = 4666.0 * 12.0_f64.powf(-1.33);
    let predicted = summary.predicted_marathon_minutes.unwrap();
    assert!((predicted - expected).abs() < 1e-9);
    let pace = summary.predicted_marathon_pace_min_per_km.unwrap();
    assert!((pace - predicted / 42.195).abs() < 1e-9);
}

#[test]
fn test_no_df_means_no_prediction() {
    let plan = WeeklyPlan::from_segments(vec![seg("Mon", "Easy", 10.0, "5:00", Zone::Z2)]);
    let summary = PlanAnalyzer::new().analyze(&plan).summary;
    assert_eq!(summary.durability_factor, None);
    assert_eq!(summary.predicted_marathon_minutes, None);
}
