//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Mock data factories
//! - Helper assertions

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::{Goal, RaceType, RunRecord, RunsPerWeek};
use crate::strava::StravaActivity;

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database with migrations applied
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Half marathon on 2026-12-06, four runs a week
pub fn mock_goal(target_time: &str) -> Goal {
  Goal::new(
    RaceType::HalfMarathon,
    target_time,
    NaiveDate::from_ymd_opt(2026, 12, 6).unwrap(),
    RunsPerWeek::default(),
  )
}

pub fn mock_run_record(name: &str, date: NaiveDate, distance_km: f64, pace_sec_per_km: f64) -> RunRecord {
  RunRecord {
    name: name.to_string(),
    date,
    distance_km,
    moving_time_min: distance_km * pace_sec_per_km / 60.0,
    pace_sec_per_km,
  }
}

/// 8 km runs on consecutive days, one per pace
pub fn mock_runs_with_paces(paces: &[f64]) -> Vec<RunRecord> {
  let start = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
  paces
    .iter()
    .zip(start.iter_days())
    .enumerate()
    .map(|(i, (&pace, date))| mock_run_record(&format!("Run {}", i + 1), date, 8.0, pace))
    .collect()
}

/// Strava activity starting 2026-10-12 local time
pub fn mock_strava_activity(
  activity_type: &str,
  name: &str,
  distance: f64,
  moving_time: i64,
) -> StravaActivity {
  StravaActivity {
    id: 123456,
    name: name.to_string(),
    activity_type: activity_type.to_string(),
    start_date_local: "2026-10-12T07:31:00Z".to_string(),
    distance,
    moving_time,
  }
}

/// Strava list response: two runs (8 km and 16 km), a ride and a swim
pub fn mock_activities_json() -> String {
  serde_json::json!([
    {
      "id": 101,
      "name": "Tempo Tuesday",
      "type": "Run",
      "sport_type": "Run",
      "start_date_local": "2026-10-13T18:05:00Z",
      "distance": 8000.0,
      "moving_time": 2400,
      "average_heartrate": 158.2
    },
    {
      "id": 102,
      "name": "Commute",
      "type": "Ride",
      "start_date_local": "2026-10-14T08:00:00Z",
      "distance": 12000.0,
      "moving_time": 2100
    },
    {
      "id": 103,
      "name": "Long Sunday",
      "type": "Run",
      "start_date_local": "2026-10-18T07:30:00Z",
      "distance": 16000.0,
      "moving_time": 5600
    },
    {
      "id": 104,
      "name": "Pool",
      "type": "Swim",
      "start_date_local": "2026-10-16T06:30:00Z",
      "distance": 1500.0,
      "moving_time": 1800
    }
  ])
  .to_string()
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    let tables: Vec<(String,)> =
      sqlx::query_as("SELECT name FROM sqlite_master WHERE type='table' AND name = 'goals'")
        .fetch_all(&pool)
        .await
        .expect("Failed to query tables");

    assert_eq!(tables.len(), 1);

    teardown_test_db(pool).await;
  }

  #[test]
  fn test_mock_factories_create_valid_data() {
    let goal = mock_goal("1:45:00");
    assert!(goal.is_valid());

    let runs = mock_runs_with_paces(&[300.0, 310.0, 320.0]);
    assert_eq!(runs.len(), 3);
    assert_eq!(runs[2].date, NaiveDate::from_ymd_opt(2026, 10, 3).unwrap());
    assert_approx_eq!(runs[0].moving_time_min, 40.0, 1e-9);

    let activity = mock_strava_activity("Run", "Morning Run", 10000.0, 3000);
    assert!(activity.is_run());

    let parsed: Vec<StravaActivity> = serde_json::from_str(&mock_activities_json()).unwrap();
    assert_eq!(parsed.len(), 4);
  }
}
