// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Challenge status and goal progress.

use chrono::{DateTime, Utc};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Challenge, ChallengeStatus, GoalType, WorkoutRecord};
use crate::services::aggregator::saturating_add;

/// A participant's progress toward a challenge goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ChallengeProgress {
    /// Amount achieved in the goal's unit (km, hours, or workouts)
    pub achieved: f64,
    /// Share of the goal reached, capped at 100
    pub percent: f64,
}

/// Classify a challenge relative to `now`. Both ends of the window are inclusive.
pub fn challenge_status(challenge: &Challenge, now: DateTime<Utc>) -> ChallengeStatus {
    if now < challenge.start_date {
        ChallengeStatus::Upcoming
    } else if now > challenge.end_date {
        ChallengeStatus::Past
    } else {
        ChallengeStatus::Active
    }
}

/// Human-readable goal, e.g. "100 km".
pub fn goal_label(challenge: &Challenge) -> String {
    let unit = match challenge.goal_type {
        GoalType::Distance => "km",
        GoalType::Duration => "hours",
        GoalType::Workouts => "workouts",
    };
    format!("{} {}", challenge.goal_value, unit)
}

/// Progress from one participant's workouts.
///
/// Only workouts whose UTC calendar date falls within the challenge window
/// count; workouts with unparsable dates never count.
pub fn challenge_progress(challenge: &Challenge, records: &[WorkoutRecord]) -> ChallengeProgress {
    let first_day = challenge.start_date.date_naive();
    let last_day = challenge.end_date.date_naive();

    let in_window = records
        .iter()
        .map(WorkoutRecord::normalize)
        .filter(|w| matches!(w.date, Some(d) if d >= first_day && d <= last_day));

    let achieved: f64 = match challenge.goal_type {
        GoalType::Distance => in_window.map(|w| w.distance_km).fold(0.0, saturating_add),
        GoalType::Duration => {
            in_window
                .map(|w| w.duration_minutes)
                .fold(0.0, saturating_add)
                / 60.0
        }
        GoalType::Workouts => in_window.count() as f64,
    };

    let percent = if challenge.goal_value.is_finite() && challenge.goal_value > 0.0 {
        (achieved / challenge.goal_value * 100.0).min(100.0)
    } else {
        0.0
    };

    ChallengeProgress { achieved, percent }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Privacy, WorkoutType};
    use chrono::TimeZone;

    fn make_challenge(goal_type: GoalType, goal_value: f64) -> Challenge {
        Challenge {
            id: "c1".to_string(),
            title: "May Challenge".to_string(),
            description: String::new(),
            goal_type,
            goal_value,
            start_date: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 5, 31, 23, 59, 59).unwrap(),
            privacy: Privacy::Public,
            created_by: "u1".to_string(),
        }
    }

    fn make_workout(date: &str, minutes: f64, km: Option<f64>) -> WorkoutRecord {
        WorkoutRecord {
            id: date.to_string(),
            user_id: "u1".to_string(),
            workout_type: WorkoutType::Run,
            date: date.to_string(),
            duration_minutes: Some(minutes),
            distance_km: km,
        }
    }

    #[test]
    fn test_status_boundaries_inclusive() {
        let challenge = make_challenge(GoalType::Workouts, 10.0);

        assert_eq!(
            challenge_status(&challenge, Utc.with_ymd_and_hms(2024, 4, 30, 23, 59, 59).unwrap()),
            ChallengeStatus::Upcoming
        );
        assert_eq!(
            challenge_status(&challenge, challenge.start_date),
            ChallengeStatus::Active
        );
        assert_eq!(
            challenge_status(&challenge, challenge.end_date),
            ChallengeStatus::Active
        );
        assert_eq!(
            challenge_status(&challenge, Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()),
            ChallengeStatus::Past
        );
    }

    #[test]
    fn test_goal_label() {
        assert_eq!(goal_label(&make_challenge(GoalType::Distance, 100.0)), "100 km");
        assert_eq!(goal_label(&make_challenge(GoalType::Duration, 12.5)), "12.5 hours");
        assert_eq!(goal_label(&make_challenge(GoalType::Workouts, 20.0)), "20 workouts");
    }

    #[test]
    fn test_distance_progress_ignores_out_of_window() {
        let challenge = make_challenge(GoalType::Distance, 100.0);
        let records = vec![
            make_workout("2024-05-02", 30.0, Some(10.0)),
            make_workout("2024-05-31T22:00:00Z", 30.0, Some(15.0)),
            make_workout("2024-04-30", 30.0, Some(50.0)),
            make_workout("2024-06-01", 30.0, Some(50.0)),
            make_workout("2024-05-10", 30.0, None),
        ];

        let progress = challenge_progress(&challenge, &records);
        assert_eq!(progress.achieved, 25.0);
        assert_eq!(progress.percent, 25.0);
    }

    #[test]
    fn test_duration_progress_in_hours_and_capped() {
        let challenge = make_challenge(GoalType::Duration, 1.0);
        let records = vec![
            make_workout("2024-05-02", 60.0, None),
            make_workout("2024-05-03", 30.0, None),
        ];

        let progress = challenge_progress(&challenge, &records);
        assert_eq!(progress.achieved, 1.5);
        assert_eq!(progress.percent, 100.0);
    }

    #[test]
    fn test_huge_distances_stay_finite() {
        let challenge = make_challenge(GoalType::Distance, 100.0);
        let records = vec![
            make_workout("2024-05-02", 30.0, Some(1e308)),
            make_workout("2024-05-03", 30.0, Some(1e308)),
        ];

        let progress = challenge_progress(&challenge, &records);
        assert_eq!(progress.achieved, f64::MAX);
        assert_eq!(progress.percent, 100.0);
    }

    #[test]
    fn test_workout_count_progress_and_zero_goal() {
        let records = vec![
            make_workout("2024-05-02", 10.0, None),
            make_workout("bogus", 10.0, None),
        ];

        let progress = challenge_progress(&make_challenge(GoalType::Workouts, 4.0), &records);
        assert_eq!(progress.achieved, 1.0);
        assert_eq!(progress.percent, 25.0);

        let progress = challenge_progress(&make_challenge(GoalType::Workouts, 0.0), &records);
        assert_eq!(progress.percent, 0.0);
    }
}
