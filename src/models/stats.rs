//! Derived dashboard statistics.
//!
//! Everything here is recomputed from a fresh snapshot of workout rows on
//! each refresh; nothing is stored or updated incrementally.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{WorkoutRecord, WorkoutType};

/// Count, duration and distance totals for one user's workouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutTotals {
    pub total_workouts: u32,
    /// Summed duration in minutes
    pub total_duration_minutes: f64,
    /// Summed distance in kilometers
    pub total_distance_km: f64,
}

impl WorkoutTotals {
    /// Duration converted for display. Only call at the presentation edge.
    pub fn total_duration_hours(&self) -> f64 {
        self.total_duration_minutes / 60.0
    }
}

/// Totals plus the current day streak.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AggregateStats {
    pub total_workouts: u32,
    pub total_duration_minutes: f64,
    pub total_distance_km: f64,
    /// Consecutive days with a workout, ending today
    pub weekly_streak: u32,
}

impl AggregateStats {
    pub fn new(totals: WorkoutTotals, weekly_streak: u32) -> Self {
        Self {
            total_workouts: totals.total_workouts,
            total_duration_minutes: totals.total_duration_minutes,
            total_distance_km: totals.total_distance_km,
            weekly_streak,
        }
    }

    pub fn total_duration_hours(&self) -> f64 {
        self.total_duration_minutes / 60.0
    }
}

/// Per-type breakdown (for pie charts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TypeSummary {
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    pub workouts: u32,
    pub duration_minutes: f64,
    pub distance_km: f64,
}

/// One calendar cell of the month view.
#[derive(Debug, Clone, Serialize)]
pub struct DayWorkouts {
    pub date: NaiveDate,
    pub workouts: Vec<WorkoutRecord>,
    pub has_workouts: bool,
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PerformerRank {
    pub user_id: String,
    pub workout_count: u32,
    /// 1-based position after sorting
    pub rank: u32,
}

/// Everything the dashboard shows for one user, in one response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DashboardStats {
    pub total_workouts: u32,
    pub total_duration_minutes: f64,
    pub total_duration_hours: f64,
    pub total_distance_km: f64,
    pub weekly_streak: u32,
    /// Rows whose date could not be parsed (excluded from the streak)
    pub skipped_dates: u32,
    pub by_type: Vec<TypeSummary>,
    /// Workout count per month ("YYYY-MM")
    pub by_month: BTreeMap<String, u32>,
}
