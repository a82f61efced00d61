//! Demo data: a minimal seed for first run, and a randomized fixture
//! generator that fills a date range with plausible trending workouts.

use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sqlx::SqlitePool;

use crate::error::{Result, TrackerError};
use crate::models::{NewGear, NewWorkout};
use crate::queries;
use crate::queries::{gear, workouts};
use crate::sport::Sport;

pub const DEMO_USERNAME: &str = "cam";

/// Gear ids created by [`create_demo_gear`], bucketed by the sport they
/// are used for.
#[derive(Debug, Clone)]
pub struct DemoGear {
  pub run: Vec<i64>,
  pub bike: Vec<i64>,
  pub swim: Vec<i64>,
}

impl DemoGear {
  pub fn for_sport(&self, sport: Sport) -> &[i64] {
    match sport {
      Sport::Run => &self.run,
      Sport::Bike => &self.bike,
      Sport::Swim => &self.swim,
    }
  }
}

/// Seed the demo user, a location, and one example run. Safe to run more
/// than once; the user is reused if it already exists.
pub async fn seed_demo(pool: &SqlitePool) -> Result<i64> {
  let user_id = match queries::get_user_id_by_username(pool, DEMO_USERNAME).await? {
    Some(id) => {
      tracing::info!(user_id = id, "demo user already exists");
      id
    }
    None => {
      let id = queries::insert_user(pool, DEMO_USERNAME, "cam@example.com", "fake_hash").await?;
      tracing::info!(user_id = id, "created demo user");
      id
    }
  };

  let location_id =
    queries::insert_location(pool, "Case Track", Some("track"), Some("Cleveland"), Some("OH"))
      .await?;

  let workout = NewWorkout {
    start_time: NaiveTime::from_hms_opt(7, 30, 0),
    distance_km: Some(10.0),
    location_id: Some(location_id),
    notes: Some("Easy morning run".to_string()),
    ..NewWorkout::new(Sport::Run, Utc::now().date_naive(), 3600, 7)
  };
  let workout_id = workouts::insert_workout(pool, user_id, &workout).await?;
  tracing::info!(workout_id, "seeded demo workout");

  Ok(user_id)
}

/// Delete all workouts (join rows first) and gear for one user, leaving
/// other users' data alone.
pub async fn clear_user_data(pool: &SqlitePool, user_id: i64) -> Result<()> {
  let mut tx = pool.begin().await?;

  let joins = sqlx::query(
    "DELETE FROM workout_gear WHERE workout_id IN \
     (SELECT workout_id FROM workouts WHERE user_id = ?1)",
  )
  .bind(user_id)
  .execute(&mut *tx)
  .await?
  .rows_affected();

  let workouts = sqlx::query("DELETE FROM workouts WHERE user_id = ?1")
    .bind(user_id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

  let gear = sqlx::query("DELETE FROM gear WHERE user_id = ?1")
    .bind(user_id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

  tx.commit().await?;

  tracing::info!(user_id, joins, workouts, gear, "cleared user data");
  Ok(())
}

/// Create the standard demo gear set: two pairs of shoes, two bikes,
/// goggles, and a wetsuit.
pub async fn create_demo_gear(pool: &SqlitePool, user_id: i64) -> Result<DemoGear> {
  async fn item(
    pool: &SqlitePool,
    user_id: i64,
    gear_type: &str,
    brand: &str,
    model: &str,
    purchased: &str,
  ) -> Result<i64> {
    let purchase_date = NaiveDate::parse_from_str(purchased, "%Y-%m-%d")
      .map_err(|e| TrackerError::InvalidInput(format!("bad purchase date '{purchased}': {e}")))?;
    gear::insert_gear(
      pool,
      user_id,
      &NewGear {
        gear_type: gear_type.to_string(),
        brand: Some(brand.to_string()),
        model: Some(model.to_string()),
        purchase_date: Some(purchase_date),
        retired: false,
      },
    )
    .await
  }

  let demo = DemoGear {
    run: vec![
      item(pool, user_id, "shoe", "Nike", "Pegasus 41", "2025-07-01").await?,
      item(pool, user_id, "shoe", "Nike", "Alphafly 3", "2025-08-15").await?,
    ],
    bike: vec![
      item(pool, user_id, "bike", "Trek", "Emonda SL6", "2025-04-10").await?,
      item(pool, user_id, "bike", "Canyon", "Speedmax CF", "2025-06-05").await?,
    ],
    swim: vec![
      item(pool, user_id, "goggles", "Speedo", "Vanquisher 2.0", "2025-03-01").await?,
      item(pool, user_id, "wetsuit", "Orca", "Athlex", "2025-05-20").await?,
    ],
  };

  tracing::info!(?demo, "created demo gear");
  Ok(demo)
}

struct TrendingMetrics {
  duration_seconds: i64,
  distance_km: f64,
  effort_level: i64,
  elevation_gain_m: Option<f64>,
  calories_kcal: i64,
  avg_heart_rate_bpm: i64,
  avg_cadence: f64,
  avg_power_w: Option<f64>,
}

fn round1(v: f64) -> f64 {
  (v * 10.0).round() / 10.0
}

/// Sport-appropriate metrics that trend upward ~10% per training week,
/// capped at plausible ceilings.
fn trending_metrics(rng: &mut StdRng, sport: Sport, week_index: i64) -> TrendingMetrics {
  let growth = 1.0 + week_index as f64 * 0.10;

  let (distance_km, duration_minutes, elevation_gain_m, avg_cadence, avg_power_w) = match sport {
    Sport::Swim => (
      (rng.gen_range(1.0..3.0) * growth).min(5.0),
      (rng.gen_range(20..=60) as f64 * growth).min(120.0),
      None,
      rng.gen_range(25.0..40.0),
      None,
    ),
    Sport::Bike => (
      (rng.gen_range(20.0..70.0) * growth).min(150.0),
      (rng.gen_range(60..=180) as f64 * growth).min(360.0),
      Some(rng.gen_range(100.0..2000.0)),
      rng.gen_range(75.0..95.0),
      Some((rng.gen_range(140.0..220.0) * (1.0 + 0.03 * week_index as f64)).min(350.0)),
    ),
    Sport::Run => (
      (rng.gen_range(5.0..18.0) * growth).min(30.0),
      (rng.gen_range(30..=100) as f64 * growth).min(180.0),
      Some(rng.gen_range(50.0..800.0)),
      rng.gen_range(155.0..180.0),
      None,
    ),
  };

  let effort_level = (rng.gen_range(5..=8) + week_index / 4).clamp(3, 10);

  let kcal_per_min = match sport {
    Sport::Swim => 9.0,
    Sport::Bike => 8.0,
    Sport::Run => 11.0,
  };
  let calories_kcal =
    (duration_minutes * kcal_per_min * (0.9 + 0.02 * effort_level as f64)) as i64;

  let hr_base = match sport {
    Sport::Swim => 120.0,
    Sport::Bike => 125.0,
    Sport::Run => 130.0,
  };
  let avg_heart_rate_bpm = ((hr_base
    + 5.0 * (effort_level as f64 - 5.0)
    + rng.gen_range(-5.0..5.0))
    .round() as i64)
    .clamp(100, 190);

  TrendingMetrics {
    duration_seconds: (duration_minutes * 60.0) as i64,
    distance_km: round1(distance_km),
    effort_level,
    elevation_gain_m: elevation_gain_m.map(round1),
    calories_kcal,
    avg_heart_rate_bpm,
    avg_cadence: round1(avg_cadence),
    avg_power_w,
  }
}

/// A random morning or evening start time on the quarter hour.
fn random_start_time(rng: &mut StdRng) -> Option<NaiveTime> {
  let hour = if rng.gen_bool(0.5) {
    rng.gen_range(6..=9)
  } else {
    rng.gen_range(16..=19)
  };
  let minute = [0, 15, 30, 45][rng.gen_range(0..4)];
  NaiveTime::from_hms_opt(hour, minute, 0)
}

fn choose_gear(rng: &mut StdRng, sport: Sport, demo: &DemoGear) -> Vec<i64> {
  let available = demo.for_sport(sport);
  if available.is_empty() {
    return Vec::new();
  }
  match sport {
    // One pair of shoes or one bike per session.
    Sport::Run | Sport::Bike => vec![available[rng.gen_range(0..available.len())]],
    // Goggles always, wetsuit sometimes.
    Sport::Swim => {
      let mut ids = vec![available[0]];
      if available.len() > 1 && rng.gen_bool(0.3) {
        ids.push(available[1]);
      }
      ids
    }
  }
}

fn pick_notes(rng: &mut StdRng, sport: Sport) -> String {
  let options: [&str; 5] = match sport {
    Sport::Swim => [
      "Pool intervals",
      "Easy endurance swim",
      "Drills + technique",
      "Tempo swim set",
      "Open water simulation in pool",
    ],
    Sport::Bike => [
      "Endurance ride",
      "Intervals on trainer",
      "Long ride outside",
      "Hill repeats",
      "Sweet spot workout",
    ],
    Sport::Run => [
      "Easy run",
      "Tempo run",
      "Long run",
      "Track workout",
      "Brick run off the bike",
    ],
  };
  options[rng.gen_range(0..options.len())].to_string()
}

/// Replace a user's workouts and gear with a randomized training block
/// over the given date range. Deterministic for a fixed `rng_seed`.
///
/// Frequency and volume ramp up over the weeks, the sport mix drifts
/// toward bike and long runs, and every workout gets its gear attached.
pub async fn populate_trending_workouts(
  pool: &SqlitePool,
  user_id: i64,
  start: NaiveDate,
  end: NaiveDate,
  rng_seed: u64,
) -> Result<u32> {
  clear_user_data(pool, user_id).await?;
  let demo_gear = create_demo_gear(pool, user_id).await?;

  let mut rng = StdRng::seed_from_u64(rng_seed);
  let mut count: u32 = 0;

  let mut current = start;
  while current <= end {
    let week_index = (current - start).num_days() / 7;

    // Training frequency ramps from ~40% of days up to ~70%.
    let rest_day = rng.gen::<f64>() > 0.4 + (0.02 * week_index as f64).min(0.3);
    if rest_day {
      current += Duration::days(1);
      continue;
    }

    // Mostly single sessions, sometimes bricks, rarely three.
    let roll = rng.gen::<f64>();
    let sessions = if roll < 0.7 {
      1
    } else if roll < 0.95 {
      2
    } else {
      3
    };

    let swim_w = (0.25 - 0.005 * week_index as f64).max(0.15);
    let bike_w = (0.35 + 0.007 * week_index as f64).min(0.50);
    let run_w = 1.0 - swim_w - bike_w;
    let sport_mix = WeightedIndex::new([swim_w, bike_w, run_w])
      .map_err(|e| TrackerError::InvalidInput(format!("bad sport weights: {e}")))?;

    for _ in 0..sessions {
      let sport = Sport::ALL[sport_mix.sample(&mut rng)];
      let metrics = trending_metrics(&mut rng, sport, week_index);
      let gear_ids = choose_gear(&mut rng, sport, &demo_gear);

      let workout = NewWorkout {
        start_time: random_start_time(&mut rng),
        distance_km: Some(metrics.distance_km),
        elevation_gain_m: metrics.elevation_gain_m,
        calories_kcal: Some(metrics.calories_kcal),
        avg_heart_rate_bpm: Some(metrics.avg_heart_rate_bpm),
        avg_cadence: Some(metrics.avg_cadence),
        avg_power_w: metrics.avg_power_w,
        gear_id: gear_ids.first().copied(),
        notes: Some(pick_notes(&mut rng, sport)),
        ..NewWorkout::new(sport, current, metrics.duration_seconds, metrics.effort_level)
      };

      let workout_id =
        workouts::insert_workout_with_gear(pool, user_id, &workout, &gear_ids).await?;
      count += 1;

      tracing::debug!(
        workout_id,
        %sport,
        date = %current,
        distance_km = metrics.distance_km,
        ?gear_ids,
        "generated workout"
      );
    }

    current += Duration::days(1);
  }

  tracing::info!(user_id, count, "populated trending workouts");
  Ok(count)
}
