// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout rows as delivered by the data service, plus the log-workout form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::time_utils::parse_calendar_date;

/// Kind of exercise session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Run,
    Cycle,
    Swim,
    Gym,
    Other,
}

impl WorkoutType {
    /// All workout types in display order.
    pub const ALL: [WorkoutType; 5] = [
        WorkoutType::Run,
        WorkoutType::Cycle,
        WorkoutType::Swim,
        WorkoutType::Gym,
        WorkoutType::Other,
    ];
}

/// A stored workout row. Read-only input to the aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Opaque row identifier
    #[serde(default)]
    pub id: String,
    /// Owning user
    #[serde(alias = "userId")]
    pub user_id: String,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    /// Raw date string as stored (ISO 8601 date or timestamp)
    pub date: String,
    /// Duration in minutes; `null` or missing counts as 0
    #[serde(default, alias = "duration")]
    pub duration_minutes: Option<f64>,
    /// Distance in kilometers; `null` or missing counts as 0 when summing
    #[serde(default, alias = "distance")]
    pub distance_km: Option<f64>,
}

/// A workout row after numeric and date normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedWorkout {
    pub workout_type: WorkoutType,
    /// UTC calendar date, `None` if the stored date did not parse
    pub date: Option<NaiveDate>,
    pub duration_minutes: f64,
    pub distance_km: f64,
}

impl WorkoutRecord {
    /// Apply the "missing numeric is zero" rule and resolve the calendar date.
    ///
    /// Negative and non-finite values are also mapped to zero so a single
    /// bad row cannot poison a sum.
    pub fn normalize(&self) -> NormalizedWorkout {
        NormalizedWorkout {
            workout_type: self.workout_type,
            date: parse_calendar_date(&self.date),
            duration_minutes: non_negative_or_zero(self.duration_minutes),
            distance_km: non_negative_or_zero(self.distance_km),
        }
    }
}

fn non_negative_or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Minimal row used for leaderboard counting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutOwner {
    #[serde(alias = "userId")]
    pub user_id: String,
}

/// Log-workout form submission, validated before insert.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewWorkout {
    #[validate(length(min = 2, max = 50, message = "Title must be 2 to 50 characters"))]
    pub title: String,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    #[validate(custom(function = "validate_workout_date"))]
    pub date: String,
    #[validate(range(min = 1.0, message = "Duration must be at least 1 minute"))]
    #[serde(alias = "duration")]
    pub duration_minutes: f64,
    #[validate(range(min = 0.0, message = "Distance cannot be negative"))]
    #[serde(default, alias = "distance")]
    pub distance_km: Option<f64>,
    #[validate(range(min = 0.0, message = "Calories cannot be negative"))]
    #[serde(default)]
    pub calories: Option<f64>,
    #[validate(length(max = 500, message = "Notes must be at most 500 characters"))]
    #[serde(default)]
    pub notes: Option<String>,
}

fn validate_workout_date(date: &str) -> Result<(), ValidationError> {
    if date.trim().is_empty() {
        return Err(ValidationError::new("required").with_message("Please select a date".into()));
    }
    if parse_calendar_date(date).is_none() {
        return Err(ValidationError::new("date").with_message("Date is not a valid date".into()));
    }
    Ok(())
}
