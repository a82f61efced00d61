//! Error types for the training log.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Error, Debug)]
pub enum TrackerError {
  #[error("database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("migration failed: {0}")]
  Migration(#[from] sqlx::migrate::MigrateError),

  #[error("unknown sport: {name}")]
  UnknownSport { name: String },

  #[error("user not found: {username}")]
  UserNotFound { username: String },

  #[error("invalid configuration: {0}")]
  Config(String),

  #[error("invalid input: {0}")]
  InvalidInput(String),

  #[error("serialization failed: {0}")]
  Serialize(#[from] serde_json::Error),
}
