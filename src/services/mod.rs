// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod aggregator;
pub mod challenge;

pub use aggregator::{
    build_dashboard, compute_aggregate, compute_totals, compute_weekly_streak,
    compute_weekly_streak_bounded, count_by_month, filter_workouts, rank_top_performers,
    recent_workouts, summarize_by_type, workouts_by_day, MAX_STREAK_LOOKBACK_DAYS,
};
pub use challenge::{challenge_progress, challenge_status, goal_label, ChallengeProgress};
