//! Connection configuration, passed explicitly rather than read from
//! globals at the point of use.

use crate::error::{Result, TrackerError};

/// Where the workout database lives. The default is an on-disk file in the
/// working directory; tests point `DATABASE_URL` at `sqlite::memory:`.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://irontrack.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct DbConfig {
  pub database_url: String,
  pub max_connections: u32,
}

impl Default for DbConfig {
  fn default() -> Self {
    Self {
      database_url: DEFAULT_DATABASE_URL.to_string(),
      max_connections: 5,
    }
  }
}

impl DbConfig {
  /// Build configuration from the environment (`DATABASE_URL`,
  /// `IRONTRACK_MAX_CONNECTIONS`), falling back to defaults.
  pub fn from_env() -> Result<Self> {
    let database_url =
      std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let max_connections = match std::env::var("IRONTRACK_MAX_CONNECTIONS") {
      Ok(raw) => raw
        .parse::<u32>()
        .map_err(|_| TrackerError::Config(format!("IRONTRACK_MAX_CONNECTIONS must be a positive integer, got '{raw}'")))?,
      Err(_) => 5,
    };

    if max_connections == 0 {
      return Err(TrackerError::Config(
        "IRONTRACK_MAX_CONNECTIONS must be at least 1".to_string(),
      ));
    }

    Ok(Self {
      database_url,
      max_connections,
    })
  }
}
