use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::sport::Sport;

/// For inserting a new workout. Distance arrives in kilometers and is
/// converted to canonical meters by the query layer; every metric besides
/// duration and effort is independently optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkout {
  pub sport: Sport,
  pub workout_date: NaiveDate,
  pub start_time: Option<NaiveTime>,
  pub duration_seconds: i64,
  pub distance_km: Option<f64>,
  pub effort_level: i64,
  pub location_id: Option<i64>,
  pub elevation_gain_m: Option<f64>,
  pub calories_kcal: Option<i64>,
  pub avg_heart_rate_bpm: Option<i64>,
  pub avg_cadence: Option<f64>,
  pub avg_power_w: Option<f64>,
  pub gear_id: Option<i64>,
  pub notes: Option<String>,
}

impl NewWorkout {
  /// A minimal workout with only the required fields set.
  pub fn new(sport: Sport, workout_date: NaiveDate, duration_seconds: i64, effort_level: i64) -> Self {
    Self {
      sport,
      workout_date,
      start_time: None,
      duration_seconds,
      distance_km: None,
      effort_level,
      location_id: None,
      elevation_gain_m: None,
      calories_kcal: None,
      avg_heart_rate_bpm: None,
      avg_cadence: None,
      avg_power_w: None,
      gear_id: None,
      notes: None,
    }
  }
}

/// Listing row shared by the recent and filtered workout queries.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WorkoutSummary {
  pub workout_id: i64,
  pub workout_date: NaiveDate,
  pub start_time: Option<NaiveTime>,
  pub sport: Sport,
  pub distance_km: Option<f64>,
  pub duration_seconds: i64,
  pub effort_level: i64,
  pub notes: Option<String>,
}

/// Optional filters for the workout listing. `None` means "no filter";
/// an inverted date range simply matches nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkoutFilter {
  pub sport: Option<Sport>,
  pub start_date: Option<NaiveDate>,
  pub end_date: Option<NaiveDate>,
}

/// One Monday-aligned calendar week of training for one sport.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WeeklyVolume {
  pub week_start: NaiveDate,
  pub sport: Sport,
  pub total_distance_km: f64,
  pub total_duration_seconds: i64,
}

/// Row from the `run_workouts` view: miles and pace per mile.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RunWorkout {
  pub workout_id: i64,
  pub workout_date: NaiveDate,
  pub start_time: Option<NaiveTime>,
  pub distance_miles: Option<f64>,
  pub duration_seconds: i64,
  pub pace_seconds_per_mile: Option<f64>,
  pub elevation_gain_m: Option<f64>,
  pub calories_kcal: Option<i64>,
  pub avg_heart_rate_bpm: Option<i64>,
  pub avg_cadence_spm: Option<f64>,
  pub effort_level: i64,
  pub notes: Option<String>,
}

/// Row from the `bike_workouts` view: miles and average speed.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BikeWorkout {
  pub workout_id: i64,
  pub workout_date: NaiveDate,
  pub start_time: Option<NaiveTime>,
  pub distance_miles: Option<f64>,
  pub duration_seconds: i64,
  pub speed_mph: Option<f64>,
  pub elevation_gain_m: Option<f64>,
  pub calories_kcal: Option<i64>,
  pub avg_heart_rate_bpm: Option<i64>,
  pub avg_cadence_rpm: Option<f64>,
  pub avg_power_w: Option<f64>,
  pub effort_level: i64,
  pub notes: Option<String>,
}

/// Row from the `swim_workouts` view: yards and pace per 100 yards.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SwimWorkout {
  pub workout_id: i64,
  pub workout_date: NaiveDate,
  pub start_time: Option<NaiveTime>,
  pub distance_yards: Option<f64>,
  pub duration_seconds: i64,
  pub pace_seconds_per_100yd: Option<f64>,
  pub calories_kcal: Option<i64>,
  pub avg_heart_rate_bpm: Option<i64>,
  pub effort_level: i64,
  pub notes: Option<String>,
}
