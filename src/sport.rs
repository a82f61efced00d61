//! The closed set of sports a workout can be classified as.
//!
//! Stored as lowercase text in `workout_types` and matched exhaustively
//! everywhere; only the CLI string boundary can still produce an
//! unknown-sport error.

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Sport {
  Swim,
  Bike,
  Run,
}

impl Sport {
  pub const ALL: [Sport; 3] = [Sport::Swim, Sport::Bike, Sport::Run];

  pub fn as_str(&self) -> &'static str {
    match self {
      Sport::Swim => "swim",
      Sport::Bike => "bike",
      Sport::Run => "run",
    }
  }
}

impl std::fmt::Display for Sport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.pad(self.as_str())
  }
}

impl std::str::FromStr for Sport {
  type Err = TrackerError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "swim" => Ok(Sport::Swim),
      "bike" => Ok(Sport::Bike),
      "run" => Ok(Sport::Run),
      _ => Err(TrackerError::UnknownSport { name: s.to_string() }),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn round_trips_through_display_and_from_str() {
    for sport in Sport::ALL {
      let parsed: Sport = sport.to_string().parse().expect("should parse back");
      assert_eq!(parsed, sport);
    }
  }

  #[test]
  fn rejects_unknown_names() {
    let err = "rowing".parse::<Sport>().unwrap_err();
    assert!(matches!(err, TrackerError::UnknownSport { name } if name == "rowing"));
  }

  #[test]
  fn is_case_sensitive_like_the_reference_table() {
    assert!("Run".parse::<Sport>().is_err());
  }
}
