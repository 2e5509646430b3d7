// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard aggregation behavior through the public API.

use chrono::{Days, NaiveDate};
use fittrack_stats::models::{WorkoutRecord, WorkoutType};
use fittrack_stats::services::{
    compute_totals, compute_weekly_streak, rank_top_performers, MAX_STREAK_LOOKBACK_DAYS,
};

mod common;
use common::workout_on;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn day_str(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[test]
fn test_totals_empty_input_is_all_zero() {
    let totals = compute_totals(&[]);
    assert_eq!(totals.total_workouts, 0);
    assert_eq!(totals.total_duration_minutes, 0.0);
    assert_eq!(totals.total_distance_km, 0.0);
}

#[test]
fn test_total_workouts_matches_length() {
    for n in [1usize, 2, 7, 40] {
        let records: Vec<WorkoutRecord> = (0..n)
            .map(|i| workout_on("u1", &format!("2024-01-{:02}", i % 28 + 1)))
            .collect();
        assert_eq!(compute_totals(&records).total_workouts as usize, n);
    }
}

#[test]
fn test_null_distance_contributes_zero() {
    let row: WorkoutRecord = serde_json::from_str(
        r#"{"id":"w1","user_id":"u1","type":"cycle","date":"2024-01-01","duration_minutes":20,"distance_km":null}"#,
    )
    .unwrap();
    let other = WorkoutRecord {
        distance_km: Some(12.0),
        ..workout_on("u1", "2024-01-02")
    };

    let totals = compute_totals(&[row, other]);
    assert!(!totals.total_distance_km.is_nan());
    assert_eq!(totals.total_distance_km, 12.0);
    assert_eq!(totals.total_duration_minutes, 50.0);
}

#[test]
fn test_totals_invariant_under_reordering() {
    let mut records = vec![
        WorkoutRecord {
            workout_type: WorkoutType::Swim,
            duration_minutes: Some(25.0),
            distance_km: Some(1.0),
            ..workout_on("u1", "2024-02-01")
        },
        WorkoutRecord {
            duration_minutes: None,
            distance_km: Some(4.0),
            ..workout_on("u1", "2024-02-02")
        },
        workout_on("u1", "2024-02-03"),
    ];

    let expected = compute_totals(&records);
    records.rotate_left(1);
    assert_eq!(compute_totals(&records), expected);
    records.reverse();
    assert_eq!(compute_totals(&records), expected);
}

#[test]
fn test_streak_of_three_ending_today() {
    let today = ymd(2024, 6, 15);
    let records: Vec<WorkoutRecord> = [0u64, 1, 2, 4]
        .iter()
        .map(|&back| workout_on("u1", &day_str(today - Days::new(back))))
        .collect();

    assert_eq!(compute_weekly_streak(&records, today), 3);
}

#[test]
fn test_streak_zero_without_workout_today() {
    let today = ymd(2024, 6, 15);
    let records = vec![workout_on("u1", &day_str(today - Days::new(1)))];

    assert_eq!(compute_weekly_streak(&records, today), 0);
}

#[test]
fn test_streak_is_deterministic() {
    let today = ymd(2024, 6, 15);
    let records = vec![
        workout_on("u1", "2024-06-15T05:00:00Z"),
        workout_on("u1", "2024-06-14"),
    ];

    let first = compute_weekly_streak(&records, today);
    for _ in 0..5 {
        assert_eq!(compute_weekly_streak(&records, today), first);
    }
}

#[test]
fn test_streak_never_exceeds_distinct_days() {
    let today = ymd(2024, 6, 15);
    let records = vec![
        workout_on("u1", "2024-06-15"),
        workout_on("u1", "2024-06-15T20:00:00Z"),
        workout_on("u1", "2024-06-14"),
    ];

    // Two distinct days, so at most three
    assert!(compute_weekly_streak(&records, today) <= 3);
}

#[test]
fn test_streak_terminates_for_far_future_today() {
    let records = vec![workout_on("u1", "2024-06-15")];
    assert_eq!(compute_weekly_streak(&records, ymd(9999, 12, 31)), 0);
}

#[test]
fn test_streak_capped_for_very_long_history() {
    let today = ymd(2024, 6, 15);
    let records: Vec<WorkoutRecord> = (0..(MAX_STREAK_LOOKBACK_DAYS as u64 + 30))
        .map(|back| workout_on("u1", &day_str(today - Days::new(back))))
        .collect();

    assert_eq!(compute_weekly_streak(&records, today), MAX_STREAK_LOOKBACK_DAYS);
}

#[test]
fn test_leaderboard_example() {
    let ranks = rank_top_performers(["a", "b", "a", "a"], 2);

    assert_eq!(ranks.len(), 2);
    assert_eq!(
        (ranks[0].user_id.as_str(), ranks[0].workout_count, ranks[0].rank),
        ("a", 3, 1)
    );
    assert_eq!(
        (ranks[1].user_id.as_str(), ranks[1].workout_count, ranks[1].rank),
        ("b", 1, 2)
    );
}

#[test]
fn test_leaderboard_tie_preserves_first_occurrence() {
    let ranks = rank_top_performers(["x", "y"], 5);

    assert_eq!(ranks[0].user_id, "x");
    assert_eq!(ranks[1].user_id, "y");
    assert_eq!(ranks[0].workout_count, ranks[1].workout_count);
}

#[test]
fn test_leaderboard_limit_larger_than_users() {
    let ranks = rank_top_performers(["a", "b", "c", "c"], 10);
    let ranks: Vec<(&str, u32)> = ranks.iter().map(|r| (r.user_id.as_str(), r.rank)).collect();
    assert_eq!(ranks, vec![("c", 1), ("a", 2), ("b", 3)]);
}
