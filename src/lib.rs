// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! FitTrack stats: dashboard statistics for logged workouts
//!
//! This crate turns workout rows fetched from the data service into the
//! derived values the dashboard shows: totals, the current day streak,
//! per-type breakdowns, the top-performer leaderboard, and challenge
//! progress. It also validates workout and challenge submissions.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;

/// Shared application state.
pub struct AppState {
    pub config: Config,
}
