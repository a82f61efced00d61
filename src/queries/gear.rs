//! Gear records, the workout <-> gear join, and lifetime mileage totals.

use std::collections::BTreeSet;

use sqlx::sqlite::SqliteConnection;
use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::{GearMileage, NewGear};

/// Insert a gear item for a user and return its gear_id.
pub async fn insert_gear(pool: &SqlitePool, user_id: i64, gear: &NewGear) -> Result<i64> {
  let result = sqlx::query(
    r#"
    INSERT INTO gear (user_id, gear_type, brand, model, purchase_date, retired)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
    "#,
  )
  .bind(user_id)
  .bind(&gear.gear_type)
  .bind(gear.brand.as_deref())
  .bind(gear.model.as_deref())
  .bind(gear.purchase_date)
  .bind(gear.retired)
  .execute(pool)
  .await?;

  Ok(result.last_insert_rowid())
}

/// Attach gear items to a workout. Repeated calls with overlapping ids are
/// idempotent: an existing pair is silently skipped.
pub async fn attach_gear_to_workout(
  pool: &SqlitePool,
  workout_id: i64,
  gear_ids: &[i64],
) -> Result<()> {
  if gear_ids.is_empty() {
    return Ok(());
  }
  let mut conn = pool.acquire().await?;
  attach_gear_on(&mut conn, workout_id, gear_ids).await
}

pub(crate) async fn attach_gear_on(
  conn: &mut SqliteConnection,
  workout_id: i64,
  gear_ids: &[i64],
) -> Result<()> {
  let unique: BTreeSet<i64> = gear_ids.iter().copied().collect();

  for gear_id in unique {
    sqlx::query("INSERT OR IGNORE INTO workout_gear (workout_id, gear_id) VALUES (?1, ?2)")
      .bind(workout_id)
      .bind(gear_id)
      .execute(&mut *conn)
      .await?;
  }

  Ok(())
}

/// Lifetime distance (km) per gear item for a user, heaviest-used first;
/// ties break toward the lower gear_id.
pub async fn get_total_distance_per_gear(
  pool: &SqlitePool,
  user_id: i64,
) -> Result<Vec<GearMileage>> {
  let rows = sqlx::query_as::<_, GearMileage>(
    r#"
    SELECT
      gear_id,
      gear_type,
      brand,
      model,
      total_distance_m / 1000.0 AS total_distance_km
    FROM gear_distance
    WHERE user_id = ?1
    ORDER BY total_distance_m DESC, gear_id
    "#,
  )
  .bind(user_id)
  .fetch_all(pool)
  .await?;

  Ok(rows)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::assert_approx_eq;
  use crate::queries::workouts::insert_workout;
  use crate::sport::Sport;
  use crate::test_utils::{d, setup_test_db, teardown_test_db, test_user, workout_km};
  use crate::models::NewGear;
  use chrono::NaiveDate;

  #[tokio::test]
  async fn insert_gear_round_trips_fields() {
    let pool = setup_test_db().await;
    let user_id = test_user(&pool, "cam").await;

    let gear = NewGear {
      gear_type: "shoe".to_string(),
      brand: Some("Nike".to_string()),
      model: Some("Pegasus 41".to_string()),
      purchase_date: Some(d("2025-07-01")),
      retired: false,
    };
    let gear_id = insert_gear(&pool, user_id, &gear).await.expect("insert gear");

    let (gear_type, brand, purchase_date, retired): (String, Option<String>, Option<NaiveDate>, bool) =
      sqlx::query_as(
        "SELECT gear_type, brand, purchase_date, retired FROM gear WHERE gear_id = ?1",
      )
      .bind(gear_id)
      .fetch_one(&pool)
      .await
      .expect("stored row");

    assert_eq!(gear_type, "shoe");
    assert_eq!(brand.as_deref(), Some("Nike"));
    assert_eq!(purchase_date, Some(d("2025-07-01")));
    assert!(!retired);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn duplicate_attach_leaves_exactly_one_join_row() {
    let pool = setup_test_db().await;
    let user_id = test_user(&pool, "cam").await;

    let shoes = insert_gear(&pool, user_id, &NewGear::new("shoe")).await.expect("gear");
    let workout_id = insert_workout(&pool, user_id, &workout_km(Sport::Run, "2025-10-06", 10.0))
      .await
      .expect("workout");

    attach_gear_to_workout(&pool, workout_id, &[shoes]).await.expect("attach");
    attach_gear_to_workout(&pool, workout_id, &[shoes]).await.expect("re-attach is a no-op");
    attach_gear_to_workout(&pool, workout_id, &[shoes, shoes]).await.expect("dupes in one call");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workout_gear WHERE workout_id = ?1")
      .bind(workout_id)
      .fetch_one(&pool)
      .await
      .expect("count");
    assert_eq!(count, 1);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn attach_with_no_gear_is_a_no_op() {
    let pool = setup_test_db().await;
    let user_id = test_user(&pool, "cam").await;
    let workout_id = insert_workout(&pool, user_id, &workout_km(Sport::Run, "2025-10-06", 10.0))
      .await
      .expect("workout");

    attach_gear_to_workout(&pool, workout_id, &[]).await.expect("empty attach");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workout_gear")
      .fetch_one(&pool)
      .await
      .expect("count");
    assert_eq!(count, 0);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn gear_totals_order_by_distance_then_id() {
    let pool = setup_test_db().await;
    let user_id = test_user(&pool, "cam").await;

    let shoes = insert_gear(&pool, user_id, &NewGear::new("shoe")).await.expect("gear");
    let bike = insert_gear(&pool, user_id, &NewGear::new("bike")).await.expect("gear");
    let goggles = insert_gear(&pool, user_id, &NewGear::new("goggles")).await.expect("gear");
    let wetsuit = insert_gear(&pool, user_id, &NewGear::new("wetsuit")).await.expect("gear");

    // 42 km on the bike, 10 km on the shoes, nothing on the swim gear.
    let ride = insert_workout(&pool, user_id, &workout_km(Sport::Bike, "2025-10-06", 42.0))
      .await
      .expect("ride");
    attach_gear_to_workout(&pool, ride, &[bike]).await.expect("attach");

    let run = insert_workout(&pool, user_id, &workout_km(Sport::Run, "2025-10-07", 10.0))
      .await
      .expect("run");
    attach_gear_to_workout(&pool, run, &[shoes]).await.expect("attach");

    let totals = get_total_distance_per_gear(&pool, user_id).await.expect("totals");
    let order: Vec<i64> = totals.iter().map(|g| g.gear_id).collect();
    assert_eq!(order, vec![bike, shoes, goggles, wetsuit]);

    assert_approx_eq!(totals[0].total_distance_km, 42.0, 1e-6);
    assert_approx_eq!(totals[1].total_distance_km, 10.0, 1e-6);
    assert_approx_eq!(totals[2].total_distance_km, 0.0, 1e-9);
    assert_approx_eq!(totals[3].total_distance_km, 0.0, 1e-9);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn gear_totals_sum_across_workouts() {
    let pool = setup_test_db().await;
    let user_id = test_user(&pool, "cam").await;

    let shoes = insert_gear(&pool, user_id, &NewGear::new("shoe")).await.expect("gear");
    for (date, km) in [("2025-10-06", 10.0), ("2025-10-08", 12.5)] {
      let id = insert_workout(&pool, user_id, &workout_km(Sport::Run, date, km))
        .await
        .expect("run");
      attach_gear_to_workout(&pool, id, &[shoes]).await.expect("attach");
    }

    let totals = get_total_distance_per_gear(&pool, user_id).await.expect("totals");
    assert_eq!(totals.len(), 1);
    assert_approx_eq!(totals[0].total_distance_km, 22.5, 1e-6);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn gear_totals_are_scoped_to_the_user() {
    let pool = setup_test_db().await;
    let cam = test_user(&pool, "cam").await;
    let john = test_user(&pool, "john").await;

    insert_gear(&pool, cam, &NewGear::new("shoe")).await.expect("gear");
    let johns_bike = insert_gear(&pool, john, &NewGear::new("bike")).await.expect("gear");

    let totals = get_total_distance_per_gear(&pool, john).await.expect("totals");
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].gear_id, johns_bike);

    teardown_test_db(pool).await;
  }
}
