use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::DbConfig;
use crate::error::{Result, TrackerError};

pub type DbPool = SqlitePool;

/// Initialize the database connection pool and run migrations.
///
/// Foreign keys are enabled per connection so `workout_gear` rows cascade
/// when a workout is deleted.
pub async fn connect(config: &DbConfig) -> Result<DbPool> {
  let options = SqliteConnectOptions::from_str(&config.database_url)
    .map_err(|e| TrackerError::Config(format!("invalid database url '{}': {e}", config.database_url)))?
    .create_if_missing(true)
    .foreign_keys(true);

  tracing::info!(url = %config.database_url, "initializing database");

  let pool = SqlitePoolOptions::new()
    .max_connections(config.max_connections)
    .connect_with(options)
    .await?;

  sqlx::migrate!("./migrations").run(&pool).await?;

  tracing::info!("database ready");

  Ok(pool)
}
