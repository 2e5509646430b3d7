// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON API routes.
//!
//! Callers post the rows they already fetched from the data service; the
//! handlers only aggregate and validate. "Now" is read here, at the
//! boundary, when the request does not pin it.

use crate::error::{AppError, Result};
use crate::models::{
    Challenge, ChallengeStatus, DashboardStats, NewChallenge, NewWorkout, PerformerRank,
    WorkoutOwner, WorkoutRecord,
};
use crate::services::{aggregator, challenge};
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/stats/summary", post(get_summary))
        .route("/api/stats/leaderboard", post(get_leaderboard))
        .route("/api/workouts/validate", post(validate_workout))
        .route("/api/challenges/validate", post(validate_challenge))
        .route("/api/challenges/progress", post(get_challenge_progress))
}

fn check_record_count(state: &AppState, count: usize) -> Result<()> {
    let max = state.config.max_records_per_request;
    if count > max {
        return Err(AppError::BadRequest(format!(
            "Too many workout rows: {} (max {})",
            count, max
        )));
    }
    Ok(())
}

// ─── Dashboard ───────────────────────────────────────────────

#[derive(Deserialize)]
struct SummaryRequest {
    workouts: Vec<WorkoutRecord>,
    /// Reference day for the streak (UTC calendar date)
    #[serde(default)]
    today: Option<NaiveDate>,
}

/// Totals, streak and breakdowns for one user's workouts.
async fn get_summary(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<DashboardStats>> {
    check_record_count(&state, request.workouts.len())?;

    let today = request.today.unwrap_or_else(|| Utc::now().date_naive());
    let dashboard = aggregator::build_dashboard(
        &request.workouts,
        today,
        state.config.streak_max_lookback_days,
    );

    tracing::debug!(
        workouts = dashboard.total_workouts,
        streak = dashboard.weekly_streak,
        skipped_dates = dashboard.skipped_dates,
        %today,
        "Computed dashboard stats"
    );

    Ok(Json(dashboard))
}

// ─── Leaderboard ─────────────────────────────────────────────

#[derive(Deserialize)]
struct LeaderboardRequest {
    workouts: Vec<WorkoutOwner>,
    #[serde(default)]
    limit: Option<i64>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LeaderboardResponse {
    pub entries: Vec<PerformerRank>,
}

/// Top performers by workout count.
async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LeaderboardRequest>,
) -> Result<Json<LeaderboardResponse>> {
    check_record_count(&state, request.workouts.len())?;

    let limit = request.limit.unwrap_or(state.config.leaderboard_limit);
    let entries = aggregator::rank_top_performers(
        request.workouts.iter().map(|w| w.user_id.as_str()),
        limit,
    );

    tracing::debug!(
        rows = request.workouts.len(),
        limit,
        entries = entries.len(),
        "Computed leaderboard"
    );

    Ok(Json(LeaderboardResponse { entries }))
}

// ─── Form Validation ─────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ValidationResponse {
    pub valid: bool,
}

/// Check a log-workout submission before it is inserted.
async fn validate_workout(Json(workout): Json<NewWorkout>) -> Result<Json<ValidationResponse>> {
    workout.validate()?;
    Ok(Json(ValidationResponse { valid: true }))
}

/// Check a create-challenge submission before it is inserted.
async fn validate_challenge(
    Json(challenge): Json<NewChallenge>,
) -> Result<Json<ValidationResponse>> {
    challenge.validate()?;
    Ok(Json(ValidationResponse { valid: true }))
}

// ─── Challenges ──────────────────────────────────────────────

#[derive(Deserialize)]
struct ProgressRequest {
    challenge: Challenge,
    workouts: Vec<WorkoutRecord>,
    #[serde(default)]
    now: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ChallengeProgressResponse {
    pub status: ChallengeStatus,
    pub goal_label: String,
    pub achieved: f64,
    pub percent: f64,
}

/// Status and progress of one participant in a challenge.
async fn get_challenge_progress(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ProgressRequest>,
) -> Result<Json<ChallengeProgressResponse>> {
    check_record_count(&state, request.workouts.len())?;

    if request.challenge.end_date < request.challenge.start_date {
        return Err(AppError::BadRequest(
            "Challenge end_date is before start_date".to_string(),
        ));
    }

    let now = request.now.unwrap_or_else(Utc::now);
    let progress = challenge::challenge_progress(&request.challenge, &request.workouts);

    Ok(Json(ChallengeProgressResponse {
        status: challenge::challenge_status(&request.challenge, now),
        goal_label: challenge::goal_label(&request.challenge),
        achieved: progress.achieved,
        percent: progress.percent,
    }))
}
