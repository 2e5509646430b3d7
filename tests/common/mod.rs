// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request};
use fittrack_stats::config::Config;
use fittrack_stats::models::{WorkoutRecord, WorkoutType};
use fittrack_stats::routes::create_router;
use fittrack_stats::AppState;
use std::sync::Arc;

/// Create a test app with the default test configuration.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with(Config::test_default())
}

#[allow(dead_code)]
pub fn create_test_app_with(config: Config) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState { config });
    (create_router(state.clone()), state)
}

/// Build a JSON POST request.
#[allow(dead_code)]
pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// A run on the given date with fixed duration and no distance.
#[allow(dead_code)]
pub fn workout_on(user_id: &str, date: &str) -> WorkoutRecord {
    WorkoutRecord {
        id: format!("{}-{}", user_id, date),
        user_id: user_id.to_string(),
        workout_type: WorkoutType::Run,
        date: date.to_string(),
        duration_minutes: Some(30.0),
        distance_km: None,
    }
}
