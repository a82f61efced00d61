//! CLI command handlers: normalize boundary input, call the query layer,
//! and render tables or JSON.

use chrono::{NaiveDate, NaiveTime};
use sqlx::SqlitePool;

use crate::cli::{
  AddGearArgs, AddWorkoutArgs, Commands, DetailArgs, IronTrack, ListArgs, PopulateArgs, WeeklyArgs,
};
use crate::error::{Result, TrackerError};
use crate::models::{
  BikeWorkout, GearMileage, NewGear, NewWorkout, RunWorkout, SwimWorkout, WorkoutFilter,
  WorkoutSummary,
};
use crate::queries::{self, gear, workouts};
use crate::seed;
use crate::sport::Sport;
use crate::units;

pub async fn dispatch(pool: &SqlitePool, app: IronTrack) -> Result<()> {
  match app.command {
    Commands::AddWorkout(args) => {
      let user_id = resolve_user(pool, &app.user).await?;
      add_workout(pool, user_id, args).await
    }
    Commands::AddGear(args) => {
      let user_id = resolve_user(pool, &app.user).await?;
      add_gear(pool, user_id, args).await
    }
    Commands::Recent { limit, json } => {
      let user_id = resolve_user(pool, &app.user).await?;
      recent(pool, user_id, limit, json).await
    }
    Commands::List(args) => {
      let user_id = resolve_user(pool, &app.user).await?;
      list(pool, user_id, args).await
    }
    Commands::Detail(args) => {
      let user_id = resolve_user(pool, &app.user).await?;
      detail(pool, user_id, args).await
    }
    Commands::Weekly(args) => {
      let user_id = resolve_user(pool, &app.user).await?;
      weekly(pool, user_id, args).await
    }
    Commands::GearTotals { json } => {
      let user_id = resolve_user(pool, &app.user).await?;
      gear_totals(pool, user_id, json).await
    }
    Commands::Users => users(pool).await,
    Commands::Seed => {
      let user_id = seed::seed_demo(pool).await?;
      println!("Seeded demo user '{}' (user_id={user_id}).", seed::DEMO_USERNAME);
      Ok(())
    }
    Commands::Populate(args) => {
      let user_id = resolve_user(pool, &app.user).await?;
      populate(pool, user_id, &app.user, args).await
    }
  }
}

async fn resolve_user(pool: &SqlitePool, username: &str) -> Result<i64> {
  queries::get_user_id_by_username(pool, username)
    .await?
    .ok_or_else(|| TrackerError::UserNotFound {
      username: username.to_string(),
    })
}

pub async fn add_workout(pool: &SqlitePool, user_id: i64, args: AddWorkoutArgs) -> Result<()> {
  if !(1..=10).contains(&args.effort) {
    return Err(TrackerError::InvalidInput(format!(
      "effort must be between 1 and 10, got {}",
      args.effort
    )));
  }

  // Zero and blank optional metrics mean "not recorded" and are stored
  // as NULL.
  let workout = NewWorkout {
    start_time: parse_start_time(args.start_time.as_deref())?,
    distance_km: units::nonzero_f64(args.distance).map(|v| args.unit.to_km(v)),
    location_id: args.location_id,
    elevation_gain_m: units::nonzero_f64(args.elevation_gain),
    calories_kcal: units::nonzero_i64(args.calories),
    avg_heart_rate_bpm: units::nonzero_i64(args.avg_hr),
    avg_cadence: units::nonzero_f64(args.avg_cadence),
    avg_power_w: units::nonzero_f64(args.avg_power),
    gear_id: args.gear.first().copied(),
    notes: blank_to_none(args.notes),
    ..NewWorkout::new(
      args.sport,
      args.date,
      (args.duration_min * 60.0) as i64,
      args.effort,
    )
  };

  let workout_id = if args.gear.is_empty() {
    workouts::insert_workout(pool, user_id, &workout).await?
  } else {
    workouts::insert_workout_with_gear(pool, user_id, &workout, &args.gear).await?
  };

  println!("Workout {workout_id} added.");
  Ok(())
}

pub async fn add_gear(pool: &SqlitePool, user_id: i64, args: AddGearArgs) -> Result<()> {
  let new_gear = NewGear {
    gear_type: args.gear_type,
    brand: blank_to_none(args.brand),
    model: blank_to_none(args.model),
    purchase_date: args.purchase_date,
    retired: args.retired,
  };
  let gear_id = gear::insert_gear(pool, user_id, &new_gear).await?;
  println!("Gear {gear_id} added.");
  Ok(())
}

async fn recent(pool: &SqlitePool, user_id: i64, limit: i64, json: bool) -> Result<()> {
  let rows = workouts::get_recent_workouts(pool, user_id, limit).await?;
  if json {
    println!("{}", serde_json::to_string_pretty(&rows)?);
  } else {
    print_summary_table(&rows);
  }
  Ok(())
}

async fn list(pool: &SqlitePool, user_id: i64, args: ListArgs) -> Result<()> {
  reject_inverted_range(args.start_date, args.end_date)?;
  let filter = WorkoutFilter {
    sport: args.sport,
    start_date: args.start_date,
    end_date: args.end_date,
  };
  let rows = workouts::fetch_workouts(pool, user_id, &filter).await?;
  if args.json {
    println!("{}", serde_json::to_string_pretty(&rows)?);
  } else {
    print_summary_table(&rows);
  }
  Ok(())
}

async fn detail(pool: &SqlitePool, user_id: i64, args: DetailArgs) -> Result<()> {
  reject_inverted_range(args.start_date, args.end_date)?;
  match args.sport {
    Sport::Run => {
      let rows = workouts::fetch_run_workouts(pool, user_id, args.start_date, args.end_date).await?;
      if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
      } else {
        print_run_table(&rows);
      }
    }
    Sport::Bike => {
      let rows =
        workouts::fetch_bike_workouts(pool, user_id, args.start_date, args.end_date).await?;
      if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
      } else {
        print_bike_table(&rows);
      }
    }
    Sport::Swim => {
      let rows =
        workouts::fetch_swim_workouts(pool, user_id, args.start_date, args.end_date).await?;
      if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
      } else {
        print_swim_table(&rows);
      }
    }
  }
  Ok(())
}

async fn weekly(pool: &SqlitePool, user_id: i64, args: WeeklyArgs) -> Result<()> {
  reject_inverted_range(Some(args.start_date), Some(args.end_date))?;
  let rows =
    workouts::get_weekly_volume_by_sport(pool, user_id, args.start_date, args.end_date).await?;
  if args.json {
    println!("{}", serde_json::to_string_pretty(&rows)?);
    return Ok(());
  }

  if rows.is_empty() {
    println!("No workouts in this range.");
    return Ok(());
  }
  println!("\nWeek Start | Type | Total Dist (km) | Total Dur (min)");
  println!("{}", "-".repeat(60));
  for row in &rows {
    println!(
      "{} | {:4} | {:15.2} | {:15}",
      row.week_start,
      row.sport,
      row.total_distance_km,
      row.total_duration_seconds / 60
    );
  }
  Ok(())
}

async fn gear_totals(pool: &SqlitePool, user_id: i64, json: bool) -> Result<()> {
  let rows = gear::get_total_distance_per_gear(pool, user_id).await?;
  if json {
    println!("{}", serde_json::to_string_pretty(&rows)?);
    return Ok(());
  }
  print_gear_table(&rows);
  Ok(())
}

async fn users(pool: &SqlitePool) -> Result<()> {
  let rows = queries::list_users(pool).await?;
  if rows.is_empty() {
    println!("No users found. Run 'irontrack seed' first.");
    return Ok(());
  }
  for user in rows {
    println!("{:3}  {}", user.user_id, user.username);
  }
  Ok(())
}

async fn populate(
  pool: &SqlitePool,
  user_id: i64,
  username: &str,
  args: PopulateArgs,
) -> Result<()> {
  reject_inverted_range(Some(args.start_date), Some(args.end_date))?;
  let count =
    seed::populate_trending_workouts(pool, user_id, args.start_date, args.end_date, args.seed)
      .await?;
  println!("Inserted {count} workouts for '{username}' with attached gear.");
  Ok(())
}

/// An inverted range is a caller mistake; surface it before the query
/// layer quietly returns nothing.
fn reject_inverted_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<()> {
  if let (Some(start), Some(end)) = (start, end) {
    if start > end {
      return Err(TrackerError::InvalidInput(format!(
        "start date {start} is after end date {end}"
      )));
    }
  }
  Ok(())
}

fn parse_start_time(raw: Option<&str>) -> Result<Option<NaiveTime>> {
  match raw.map(str::trim) {
    None | Some("") => Ok(None),
    Some(s) => NaiveTime::parse_from_str(s, "%H:%M")
      .map(Some)
      .map_err(|_| TrackerError::InvalidInput(format!("start time must be HH:MM, got '{s}'"))),
  }
}

fn blank_to_none(raw: Option<String>) -> Option<String> {
  raw
    .map(|s| s.trim().to_string())
    .filter(|s| !s.is_empty())
}

fn format_start(start_time: Option<NaiveTime>) -> String {
  start_time
    .map(|t| t.format("%H:%M").to_string())
    .unwrap_or_else(|| "--:--".to_string())
}

fn note_snippet(notes: Option<&str>) -> String {
  notes.unwrap_or("").chars().take(30).collect()
}

fn print_summary_table(rows: &[WorkoutSummary]) {
  if rows.is_empty() {
    println!("No workouts found.");
    return;
  }
  println!("\nDate       | Start | Type | Dist (km) | Dur (min) | Effort | Notes");
  println!("{}", "-".repeat(80));
  for r in rows {
    let distance = r
      .distance_km
      .map(|d| format!("{d:9.2}"))
      .unwrap_or_else(|| format!("{:>9}", "-"));
    println!(
      "{} | {:5} | {:4} | {} | {:9} | {:6} | {}",
      r.workout_date,
      format_start(r.start_time),
      r.sport,
      distance,
      r.duration_seconds / 60,
      r.effort_level,
      note_snippet(r.notes.as_deref())
    );
  }
}

fn print_run_table(rows: &[RunWorkout]) {
  if rows.is_empty() {
    println!("No runs found.");
    return;
  }
  println!("\nDate       | Start | Miles | Pace /mi | Elev (m) | HR  | Effort | Notes");
  println!("{}", "-".repeat(84));
  for r in rows {
    println!(
      "{} | {:5} | {:5.2} | {:>8} | {:8.0} | {:3} | {:6} | {}",
      r.workout_date,
      format_start(r.start_time),
      r.distance_miles.unwrap_or(0.0),
      r.pace_seconds_per_mile.map(units::format_pace).unwrap_or_else(|| "-".to_string()),
      r.elevation_gain_m.unwrap_or(0.0),
      r.avg_heart_rate_bpm.unwrap_or(0),
      r.effort_level,
      note_snippet(r.notes.as_deref())
    );
  }
}

fn print_bike_table(rows: &[BikeWorkout]) {
  if rows.is_empty() {
    println!("No rides found.");
    return;
  }
  println!("\nDate       | Start | Miles  | mph   | Power | Elev (m) | Effort | Notes");
  println!("{}", "-".repeat(84));
  for r in rows {
    println!(
      "{} | {:5} | {:6.2} | {:5.1} | {:5.0} | {:8.0} | {:6} | {}",
      r.workout_date,
      format_start(r.start_time),
      r.distance_miles.unwrap_or(0.0),
      r.speed_mph.unwrap_or(0.0),
      r.avg_power_w.unwrap_or(0.0),
      r.elevation_gain_m.unwrap_or(0.0),
      r.effort_level,
      note_snippet(r.notes.as_deref())
    );
  }
}

fn print_swim_table(rows: &[SwimWorkout]) {
  if rows.is_empty() {
    println!("No swims found.");
    return;
  }
  println!("\nDate       | Start | Yards   | /100yd | HR  | Effort | Notes");
  println!("{}", "-".repeat(72));
  for r in rows {
    println!(
      "{} | {:5} | {:7.0} | {:>6} | {:3} | {:6} | {}",
      r.workout_date,
      format_start(r.start_time),
      r.distance_yards.unwrap_or(0.0),
      r.pace_seconds_per_100yd.map(units::format_pace).unwrap_or_else(|| "-".to_string()),
      r.avg_heart_rate_bpm.unwrap_or(0),
      r.effort_level,
      note_snippet(r.notes.as_deref())
    );
  }
}

fn print_gear_table(rows: &[GearMileage]) {
  if rows.is_empty() {
    println!("No gear found.");
    return;
  }
  println!("\nID | Type    | Brand       | Model        | Total Dist (km)");
  println!("{}", "-".repeat(70));
  for g in rows {
    println!(
      "{:2} | {:7} | {:11} | {:12} | {:15.2}",
      g.gear_id,
      g.gear_type,
      g.brand.as_deref().unwrap_or(""),
      g.model.as_deref().unwrap_or(""),
      g.total_distance_km
    );
  }
}
