//! Workout inserts, listings, and the weekly volume aggregation.

use chrono::NaiveDate;
use sqlx::sqlite::SqliteConnection;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::error::Result;
use crate::models::{
  BikeWorkout, NewWorkout, RunWorkout, SwimWorkout, WeeklyVolume, WorkoutFilter, WorkoutSummary,
};
use crate::units;

/// Insert a workout and return its workout_id.
///
/// The caller works in kilometers; distance is converted to canonical
/// meters before storage.
pub async fn insert_workout(pool: &SqlitePool, user_id: i64, workout: &NewWorkout) -> Result<i64> {
  let mut conn = pool.acquire().await?;
  insert_workout_on(&mut conn, user_id, workout).await
}

/// Insert a workout and attach its gear in a single transaction, so a
/// failure part-way through leaves neither the workout nor any join rows.
pub async fn insert_workout_with_gear(
  pool: &SqlitePool,
  user_id: i64,
  workout: &NewWorkout,
  gear_ids: &[i64],
) -> Result<i64> {
  let mut tx = pool.begin().await?;
  let workout_id = insert_workout_on(&mut tx, user_id, workout).await?;
  super::gear::attach_gear_on(&mut tx, workout_id, gear_ids).await?;
  tx.commit().await?;
  Ok(workout_id)
}

pub(crate) async fn insert_workout_on(
  conn: &mut SqliteConnection,
  user_id: i64,
  workout: &NewWorkout,
) -> Result<i64> {
  let workout_type_id = super::workout_type_id_on(conn, workout.sport).await?;
  let distance_m = workout.distance_km.map(units::km_to_meters);

  let result = sqlx::query(
    r#"
    INSERT INTO workouts (
      user_id, workout_type_id, location_id,
      workout_date, start_time,
      duration_seconds, distance_m,
      elevation_gain_m, calories_kcal,
      avg_heart_rate_bpm, avg_cadence, avg_power_w,
      effort_level, gear_id, notes
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
    "#,
  )
  .bind(user_id)
  .bind(workout_type_id)
  .bind(workout.location_id)
  .bind(workout.workout_date)
  .bind(workout.start_time)
  .bind(workout.duration_seconds)
  .bind(distance_m)
  .bind(workout.elevation_gain_m)
  .bind(workout.calories_kcal)
  .bind(workout.avg_heart_rate_bpm)
  .bind(workout.avg_cadence)
  .bind(workout.avg_power_w)
  .bind(workout.effort_level)
  .bind(workout.gear_id)
  .bind(workout.notes.as_deref())
  .execute(&mut *conn)
  .await?;

  Ok(result.last_insert_rowid())
}

const SUMMARY_SELECT: &str = "\
  SELECT \
    w.workout_id, \
    w.workout_date, \
    w.start_time, \
    wt.name AS sport, \
    w.distance_m / 1000.0 AS distance_km, \
    w.duration_seconds, \
    w.effort_level, \
    w.notes \
  FROM workouts w \
  JOIN workout_types wt ON wt.workout_type_id = w.workout_type_id \
  WHERE w.user_id = ";

const SUMMARY_ORDER: &str = " ORDER BY w.workout_date DESC, w.start_time DESC NULLS LAST";

/// Most recent workouts for a user, newest first, untimed workouts last
/// within a day.
pub async fn get_recent_workouts(
  pool: &SqlitePool,
  user_id: i64,
  limit: i64,
) -> Result<Vec<WorkoutSummary>> {
  let mut qb = QueryBuilder::<Sqlite>::new(SUMMARY_SELECT);
  qb.push_bind(user_id);
  qb.push(SUMMARY_ORDER);
  qb.push(" LIMIT ");
  qb.push_bind(limit);

  let rows = qb.build_query_as::<WorkoutSummary>().fetch_all(pool).await?;
  Ok(rows)
}

/// Workouts for a user with optional sport and inclusive date-range
/// filters. An inverted range matches nothing rather than erroring.
pub async fn fetch_workouts(
  pool: &SqlitePool,
  user_id: i64,
  filter: &WorkoutFilter,
) -> Result<Vec<WorkoutSummary>> {
  let mut qb = QueryBuilder::<Sqlite>::new(SUMMARY_SELECT);
  qb.push_bind(user_id);

  if let Some(sport) = filter.sport {
    qb.push(" AND wt.name = ");
    qb.push_bind(sport.as_str());
  }
  if let Some(start) = filter.start_date {
    qb.push(" AND w.workout_date >= ");
    qb.push_bind(start);
  }
  if let Some(end) = filter.end_date {
    qb.push(" AND w.workout_date <= ");
    qb.push_bind(end);
  }

  qb.push(SUMMARY_ORDER);

  let rows = qb.build_query_as::<WorkoutSummary>().fetch_all(pool).await?;
  Ok(rows)
}

/// Total distance (km) and duration per sport, grouped by the Monday that
/// starts each ISO week. Weeks and sports with no workouts produce no row.
pub async fn get_weekly_volume_by_sport(
  pool: &SqlitePool,
  user_id: i64,
  start_date: NaiveDate,
  end_date: NaiveDate,
) -> Result<Vec<WeeklyVolume>> {
  // 'weekday 0' advances to the enclosing week's Sunday; backing up six
  // days lands on its Monday.
  let rows = sqlx::query_as::<_, WeeklyVolume>(
    r#"
    SELECT
      DATE(w.workout_date, 'weekday 0', '-6 days') AS week_start,
      wt.name AS sport,
      COALESCE(SUM(w.distance_m) / 1000.0, 0.0) AS total_distance_km,
      SUM(w.duration_seconds) AS total_duration_seconds
    FROM workouts w
    JOIN workout_types wt ON wt.workout_type_id = w.workout_type_id
    WHERE w.user_id = ?1
      AND w.workout_date BETWEEN ?2 AND ?3
    GROUP BY week_start, wt.name
    ORDER BY week_start ASC, wt.name ASC
    "#,
  )
  .bind(user_id)
  .bind(start_date)
  .bind(end_date)
  .fetch_all(pool)
  .await?;

  Ok(rows)
}

/// Run workouts from the `run_workouts` view with optional date range.
pub async fn fetch_run_workouts(
  pool: &SqlitePool,
  user_id: i64,
  start_date: Option<NaiveDate>,
  end_date: Option<NaiveDate>,
) -> Result<Vec<RunWorkout>> {
  let mut qb = QueryBuilder::<Sqlite>::new(
    "SELECT workout_id, workout_date, start_time, distance_miles, duration_seconds, \
     pace_seconds_per_mile, elevation_gain_m, calories_kcal, avg_heart_rate_bpm, \
     avg_cadence_spm, effort_level, notes \
     FROM run_workouts WHERE user_id = ",
  );
  push_view_filters(&mut qb, user_id, start_date, end_date);

  let rows = qb.build_query_as::<RunWorkout>().fetch_all(pool).await?;
  Ok(rows)
}

/// Bike workouts from the `bike_workouts` view with optional date range.
pub async fn fetch_bike_workouts(
  pool: &SqlitePool,
  user_id: i64,
  start_date: Option<NaiveDate>,
  end_date: Option<NaiveDate>,
) -> Result<Vec<BikeWorkout>> {
  let mut qb = QueryBuilder::<Sqlite>::new(
    "SELECT workout_id, workout_date, start_time, distance_miles, duration_seconds, \
     speed_mph, elevation_gain_m, calories_kcal, avg_heart_rate_bpm, \
     avg_cadence_rpm, avg_power_w, effort_level, notes \
     FROM bike_workouts WHERE user_id = ",
  );
  push_view_filters(&mut qb, user_id, start_date, end_date);

  let rows = qb.build_query_as::<BikeWorkout>().fetch_all(pool).await?;
  Ok(rows)
}

/// Swim workouts from the `swim_workouts` view with optional date range.
pub async fn fetch_swim_workouts(
  pool: &SqlitePool,
  user_id: i64,
  start_date: Option<NaiveDate>,
  end_date: Option<NaiveDate>,
) -> Result<Vec<SwimWorkout>> {
  let mut qb = QueryBuilder::<Sqlite>::new(
    "SELECT workout_id, workout_date, start_time, distance_yards, duration_seconds, \
     pace_seconds_per_100yd, calories_kcal, avg_heart_rate_bpm, effort_level, notes \
     FROM swim_workouts WHERE user_id = ",
  );
  push_view_filters(&mut qb, user_id, start_date, end_date);

  let rows = qb.build_query_as::<SwimWorkout>().fetch_all(pool).await?;
  Ok(rows)
}

fn push_view_filters(
  qb: &mut QueryBuilder<'_, Sqlite>,
  user_id: i64,
  start_date: Option<NaiveDate>,
  end_date: Option<NaiveDate>,
) {
  qb.push_bind(user_id);
  if let Some(start) = start_date {
    qb.push(" AND workout_date >= ");
    qb.push_bind(start);
  }
  if let Some(end) = end_date {
    qb.push(" AND workout_date <= ");
    qb.push_bind(end);
  }
  qb.push(" ORDER BY workout_date DESC, start_time DESC NULLS LAST");
}
