//! The query layer: every statement that touches storage lives here.
//!
//! Lookup misses come back as `Ok(None)`; storage failures propagate as
//! `TrackerError::Database` for the caller to report.

pub mod gear;
pub mod workouts;

use sqlx::sqlite::SqliteConnection;
use sqlx::SqlitePool;

use crate::error::{Result, TrackerError};
use crate::models::User;
use crate::sport::Sport;

/// All users sorted by username, for a simple login selector.
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>> {
  let rows = sqlx::query_as::<_, User>(
    "SELECT user_id, username, email, password_hash FROM users ORDER BY username",
  )
  .fetch_all(pool)
  .await?;
  Ok(rows)
}

/// Look up a user_id by exact, case-sensitive username.
pub async fn get_user_id_by_username(pool: &SqlitePool, username: &str) -> Result<Option<i64>> {
  let row: Option<(i64,)> = sqlx::query_as("SELECT user_id FROM users WHERE username = ?1")
    .bind(username)
    .fetch_optional(pool)
    .await?;
  Ok(row.map(|(id,)| id))
}

pub async fn insert_user(
  pool: &SqlitePool,
  username: &str,
  email: &str,
  password_hash: &str,
) -> Result<i64> {
  let result = sqlx::query("INSERT INTO users (username, email, password_hash) VALUES (?1, ?2, ?3)")
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .execute(pool)
    .await?;
  Ok(result.last_insert_rowid())
}

/// All workout types as (workout_type_id, name).
pub async fn list_workout_types(pool: &SqlitePool) -> Result<Vec<(i64, String)>> {
  let rows =
    sqlx::query_as("SELECT workout_type_id, name FROM workout_types ORDER BY workout_type_id")
      .fetch_all(pool)
      .await?;
  Ok(rows)
}

/// Map a sport to its workout_type_id.
pub async fn get_workout_type_id(pool: &SqlitePool, sport: Sport) -> Result<i64> {
  let mut conn = pool.acquire().await?;
  workout_type_id_on(&mut conn, sport).await
}

/// Connection-level variant so transactional callers can share one
/// connection. The reference rows are seeded by migration, so a miss means
/// the schema itself is broken.
pub(crate) async fn workout_type_id_on(conn: &mut SqliteConnection, sport: Sport) -> Result<i64> {
  let row: Option<(i64,)> =
    sqlx::query_as("SELECT workout_type_id FROM workout_types WHERE name = ?1")
      .bind(sport.as_str())
      .fetch_optional(&mut *conn)
      .await?;

  row
    .map(|(id,)| id)
    .ok_or_else(|| TrackerError::UnknownSport { name: sport.to_string() })
}

pub async fn insert_location(
  pool: &SqlitePool,
  name: &str,
  location_type: Option<&str>,
  city: Option<&str>,
  state: Option<&str>,
) -> Result<i64> {
  let result =
    sqlx::query("INSERT INTO locations (name, location_type, city, state) VALUES (?1, ?2, ?3, ?4)")
      .bind(name)
      .bind(location_type)
      .bind(city)
      .bind(state)
      .execute(pool)
      .await?;
  Ok(result.last_insert_rowid())
}
