// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod challenge;
pub mod stats;
pub mod workout;

pub use challenge::{Challenge, ChallengeStatus, GoalType, NewChallenge, Privacy};
pub use stats::{
    AggregateStats, DashboardStats, DayWorkouts, PerformerRank, TypeSummary, WorkoutTotals,
};
pub use workout::{NewWorkout, NormalizedWorkout, WorkoutOwner, WorkoutRecord, WorkoutType};
