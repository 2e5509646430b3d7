// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard statistics computed from raw workout rows.
//!
//! All functions here are pure: they never read the clock, never mutate
//! their inputs, and never fail. Rows with missing numbers count as zero;
//! rows with unparsable dates are skipped for date-based statistics only.

use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::models::{
    AggregateStats, DashboardStats, DayWorkouts, NormalizedWorkout, PerformerRank, TypeSummary,
    WorkoutRecord, WorkoutTotals, WorkoutType,
};
use crate::time_utils::{month_key, parse_utc_timestamp};

/// Default cap on the backward walk in [`compute_weekly_streak`] (about ten years).
pub const MAX_STREAK_LOOKBACK_DAYS: u32 = 3650;

/// Add two non-negative amounts, saturating at `f64::MAX` instead of
/// overflowing to infinity (which JSON cannot represent).
pub(crate) fn saturating_add(total: f64, value: f64) -> f64 {
    let sum = total + value;
    if sum.is_finite() {
        sum
    } else {
        f64::MAX
    }
}

/// Count, duration and distance totals.
pub fn compute_totals(records: &[WorkoutRecord]) -> WorkoutTotals {
    let normalized: Vec<NormalizedWorkout> =
        records.iter().map(WorkoutRecord::normalize).collect();
    totals_of(&normalized)
}

fn totals_of(workouts: &[NormalizedWorkout]) -> WorkoutTotals {
    workouts
        .iter()
        .fold(WorkoutTotals::default(), |mut totals, workout| {
            totals.total_workouts += 1;
            totals.total_duration_minutes =
                saturating_add(totals.total_duration_minutes, workout.duration_minutes);
            totals.total_distance_km = saturating_add(totals.total_distance_km, workout.distance_km);
            totals
        })
}

/// Number of consecutive calendar days, ending at `today`, with at least
/// one workout.
///
/// `today` counts only if a workout exists on it; a gap on `today` yields 0
/// even when yesterday had a workout.
pub fn compute_weekly_streak(records: &[WorkoutRecord], today: NaiveDate) -> u32 {
    compute_weekly_streak_bounded(records, today, MAX_STREAK_LOOKBACK_DAYS)
}

/// [`compute_weekly_streak`] with an explicit cap on days examined.
pub fn compute_weekly_streak_bounded(
    records: &[WorkoutRecord],
    today: NaiveDate,
    max_days: u32,
) -> u32 {
    let days = workout_days(records);
    streak_ending_at(&days, today, max_days)
}

fn workout_days(records: &[WorkoutRecord]) -> HashSet<NaiveDate> {
    let normalized: Vec<NormalizedWorkout> =
        records.iter().map(WorkoutRecord::normalize).collect();
    days_of(records, &normalized).0
}

/// Distinct workout days plus the number of rows skipped for a bad date.
/// `records` and `normalized` must be index-aligned.
fn days_of(
    records: &[WorkoutRecord],
    normalized: &[NormalizedWorkout],
) -> (HashSet<NaiveDate>, u32) {
    let mut days = HashSet::new();
    let mut skipped = 0;

    for (record, workout) in records.iter().zip(normalized) {
        match workout.date {
            Some(date) => {
                days.insert(date);
            }
            None => {
                skipped += 1;
                tracing::debug!(workout_id = %record.id, date = %record.date, "Skipping unparsable workout date");
            }
        }
    }

    (days, skipped)
}

fn streak_ending_at(days: &HashSet<NaiveDate>, today: NaiveDate, max_days: u32) -> u32 {
    let mut streak = 0;
    let mut day = Some(today);

    while let Some(current) = day {
        if streak >= max_days || !days.contains(&current) {
            break;
        }
        streak += 1;
        day = current.pred_opt();
    }

    streak
}

/// Rank users by number of workout rows.
///
/// Ties keep the order in which each user first appears in the input, and
/// every row receives a distinct 1-based rank. `limit <= 0` yields nothing.
pub fn rank_top_performers<'a, I>(user_ids: I, limit: i64) -> Vec<PerformerRank>
where
    I: IntoIterator<Item = &'a str>,
{
    let limit = match usize::try_from(limit) {
        Ok(limit) if limit > 0 => limit,
        _ => return Vec::new(),
    };

    // Insertion order doubles as first-occurrence order.
    let mut counts: Vec<(&str, u32)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for user_id in user_ids {
        match index.get(user_id).copied() {
            Some(i) => counts[i].1 += 1,
            None => {
                index.insert(user_id, counts.len());
                counts.push((user_id, 1));
            }
        }
    }

    // `sort_by` is stable, so equal counts keep first-occurrence order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(limit)
        .zip(1u32..)
        .map(|((user_id, workout_count), rank)| PerformerRank {
            user_id: user_id.to_string(),
            workout_count,
            rank,
        })
        .collect()
}

/// Per-type count, minutes and kilometers, in [`WorkoutType::ALL`] order.
/// Types without workouts are omitted.
pub fn summarize_by_type(records: &[WorkoutRecord]) -> Vec<TypeSummary> {
    let normalized: Vec<NormalizedWorkout> =
        records.iter().map(WorkoutRecord::normalize).collect();
    type_summary_of(&normalized)
}

fn type_summary_of(workouts: &[NormalizedWorkout]) -> Vec<TypeSummary> {
    let mut by_type: BTreeMap<WorkoutType, TypeSummary> = BTreeMap::new();

    for workout in workouts {
        let entry = by_type
            .entry(workout.workout_type)
            .or_insert_with(|| TypeSummary {
                workout_type: workout.workout_type,
                workouts: 0,
                duration_minutes: 0.0,
                distance_km: 0.0,
            });
        entry.workouts += 1;
        entry.duration_minutes = saturating_add(entry.duration_minutes, workout.duration_minutes);
        entry.distance_km = saturating_add(entry.distance_km, workout.distance_km);
    }

    WorkoutType::ALL
        .iter()
        .filter_map(|t| by_type.remove(t))
        .collect()
}

/// Workout count per month ("YYYY-MM"), over rows with a parsable date.
pub fn count_by_month(records: &[WorkoutRecord]) -> BTreeMap<String, u32> {
    let normalized: Vec<NormalizedWorkout> =
        records.iter().map(WorkoutRecord::normalize).collect();
    month_counts_of(&normalized)
}

fn month_counts_of(workouts: &[NormalizedWorkout]) -> BTreeMap<String, u32> {
    let mut by_month = BTreeMap::new();
    for date in workouts.iter().filter_map(|w| w.date) {
        *by_month.entry(month_key(date)).or_insert(0) += 1;
    }
    by_month
}

/// Workouts matching an optional type and an optional UTC calendar day.
///
/// Rows with an unparsable date never match a day filter.
pub fn filter_workouts<'a>(
    records: &'a [WorkoutRecord],
    workout_type: Option<WorkoutType>,
    day: Option<NaiveDate>,
) -> Vec<&'a WorkoutRecord> {
    records
        .iter()
        .filter(|r| workout_type.map_or(true, |t| r.workout_type == t))
        .filter(|r| day.map_or(true, |d| r.normalize().date == Some(d)))
        .collect()
}

/// One entry per day of the given month, each with that day's workouts.
///
/// Returns an empty list if `year`/`month` do not name a real month.
pub fn workouts_by_day(records: &[WorkoutRecord], year: i32, month: u32) -> Vec<DayWorkouts> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let mut by_date: BTreeMap<NaiveDate, Vec<WorkoutRecord>> = BTreeMap::new();
    for record in records {
        if let Some(date) = record.normalize().date {
            if date.year() == year && date.month() == month {
                by_date.entry(date).or_default().push(record.clone());
            }
        }
    }

    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .map(|date| {
            let workouts = by_date.remove(&date).unwrap_or_default();
            DayWorkouts {
                date,
                has_workouts: !workouts.is_empty(),
                workouts,
            }
        })
        .collect()
}

/// The `n` most recent workouts, newest first.
///
/// Ordering uses the full timestamp when present. Rows with unparsable
/// dates sort last; ties keep input order.
pub fn recent_workouts(records: &[WorkoutRecord], n: usize) -> Vec<&WorkoutRecord> {
    let mut keyed: Vec<_> = records
        .iter()
        .map(|r| (parse_utc_timestamp(&r.date), r))
        .collect();

    // `None` sorts below every `Some`, so reversing puts bad dates last.
    keyed.sort_by(|a, b| b.0.cmp(&a.0));

    keyed.into_iter().take(n).map(|(_, r)| r).collect()
}

/// Totals plus streak.
pub fn compute_aggregate(records: &[WorkoutRecord], today: NaiveDate) -> AggregateStats {
    AggregateStats::new(compute_totals(records), compute_weekly_streak(records, today))
}

/// Build the full dashboard view for one user.
pub fn build_dashboard(
    records: &[WorkoutRecord],
    today: NaiveDate,
    max_lookback_days: u32,
) -> DashboardStats {
    let normalized: Vec<NormalizedWorkout> =
        records.iter().map(WorkoutRecord::normalize).collect();

    let (days, skipped_dates) = days_of(records, &normalized);
    let totals = totals_of(&normalized);

    DashboardStats {
        total_workouts: totals.total_workouts,
        total_duration_minutes: totals.total_duration_minutes,
        total_duration_hours: totals.total_duration_hours(),
        total_distance_km: totals.total_distance_km,
        weekly_streak: streak_ending_at(&days, today, max_lookback_days),
        skipped_dates,
        by_type: type_summary_of(&normalized),
        by_month: month_counts_of(&normalized),
    }
}
