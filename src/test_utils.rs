//! Shared test infrastructure: in-memory database setup and data factories.

use chrono::{NaiveDate, NaiveTime};
use sqlx::SqlitePool;

use crate::models::NewWorkout;
use crate::queries;
use crate::sport::Sport;

/// Create an in-memory SQLite database with all migrations applied.
///
/// Uses max_connections(1) to prevent multiple pool connections from
/// creating isolated in-memory databases, which would cause intermittent
/// test failures.
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

/// Close a test database pool.
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// Insert a test user and return its user_id.
pub async fn test_user(pool: &SqlitePool, username: &str) -> i64 {
  let email = format!("{username}@example.com");
  queries::insert_user(pool, username, &email, "fake_hash")
    .await
    .expect("Failed to insert test user")
}

/// Parse a YYYY-MM-DD date literal.
pub fn d(s: &str) -> NaiveDate {
  NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("bad date literal")
}

/// Parse an HH:MM time literal.
pub fn t(s: &str) -> NaiveTime {
  NaiveTime::parse_from_str(s, "%H:%M").expect("bad time literal")
}

/// A workout with the required fields plus a distance; every optional
/// metric left absent.
pub fn workout_km(sport: Sport, date: &str, distance_km: f64) -> NewWorkout {
  NewWorkout {
    distance_km: Some(distance_km),
    ..NewWorkout::new(sport, d(date), 3600, 7)
  }
}

/// Assert two floats are approximately equal within a tolerance.
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

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Datelike;

  #[tokio::test]
  async fn setup_creates_schema_and_reference_data() {
    let pool = setup_test_db().await;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workout_types")
      .fetch_one(&pool)
      .await
      .expect("Failed to count workout types");
    assert_eq!(count, 3);

    teardown_test_db(pool).await;
  }

  #[test]
  fn date_and_time_literals_parse() {
    let date = d("2025-10-06");
    assert_eq!((date.year(), date.month(), date.day()), (2025, 10, 6));
    assert_eq!(t("07:30").format("%H:%M").to_string(), "07:30");
  }

  #[test]
  fn workout_factory_leaves_optionals_absent() {
    let workout = workout_km(Sport::Run, "2025-10-06", 10.0);
    assert_eq!(workout.distance_km, Some(10.0));
    assert!(workout.start_time.is_none());
    assert!(workout.notes.is_none());
    assert!(workout.avg_power_w.is_none());
  }
}
