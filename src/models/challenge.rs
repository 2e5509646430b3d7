// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Challenge model and the create-challenge form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// What a challenge measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    /// Kilometers
    Distance,
    /// Hours
    Duration,
    /// Number of workouts
    Workouts,
}

/// Who can see and join a challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    Public,
    Friends,
    Private,
}

/// Where a challenge sits relative to a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeStatus {
    Upcoming,
    Active,
    Past,
}

/// Stored challenge row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub goal_type: GoalType,
    pub goal_value: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub privacy: Privacy,
    #[serde(default)]
    pub created_by: String,
}

/// Create-challenge form submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_challenge_window"))]
pub struct NewChallenge {
    #[validate(length(min = 3, message = "Title must be at least 3 characters."))]
    pub title: String,
    #[validate(length(min = 10, message = "Description must be at least 10 characters."))]
    pub description: String,
    pub goal_type: GoalType,
    #[validate(range(exclusive_min = 0.0, message = "Goal value must be positive."))]
    pub goal_value: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub privacy: Privacy,
}

fn validate_challenge_window(challenge: &NewChallenge) -> Result<(), ValidationError> {
    if challenge.end_date <= challenge.start_date {
        return Err(ValidationError::new("end_date")
            .with_message("End date must be after start date.".into()));
    }
    Ok(())
}
