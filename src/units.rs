//! Unit conversions between the canonical storage units (meters, seconds)
//! and the display units used at the boundaries (km, miles, yards, minutes).

pub const METERS_PER_KM: f64 = 1000.0;
pub const METERS_PER_MILE: f64 = 1609.344;
pub const METERS_PER_YARD: f64 = 0.9144;

/// Distance units accepted at the input boundary. Everything is converted
/// to meters before storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DistanceUnit {
  Km,
  Miles,
  Yards,
  Meters,
}

impl DistanceUnit {
  pub fn to_meters(&self, value: f64) -> f64 {
    match self {
      DistanceUnit::Km => value * METERS_PER_KM,
      DistanceUnit::Miles => value * METERS_PER_MILE,
      DistanceUnit::Yards => value * METERS_PER_YARD,
      DistanceUnit::Meters => value,
    }
  }

  /// Convert a boundary value to the kilometers the query layer accepts.
  pub fn to_km(&self, value: f64) -> f64 {
    self.to_meters(value) / METERS_PER_KM
  }
}

impl std::fmt::Display for DistanceUnit {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      DistanceUnit::Km => "km",
      DistanceUnit::Miles => "miles",
      DistanceUnit::Yards => "yards",
      DistanceUnit::Meters => "meters",
    };
    f.pad(name)
  }
}

pub fn km_to_meters(km: f64) -> f64 {
  km * METERS_PER_KM
}

pub fn meters_to_km(meters: f64) -> f64 {
  meters / METERS_PER_KM
}

/// Format a pace in seconds-per-unit as "M:SS" (e.g. 452.0 -> "7:32").
pub fn format_pace(seconds_per_unit: f64) -> String {
  let total = seconds_per_unit.round() as i64;
  format!("{}:{:02}", total / 60, total % 60)
}

/// Normalize a zero-valued optional metric to absent. Metrics entered as
/// zero or left blank are stored as NULL, not 0.
pub fn nonzero_f64(value: Option<f64>) -> Option<f64> {
  value.filter(|v| *v != 0.0)
}

pub fn nonzero_i64(value: Option<i64>) -> Option<i64> {
  value.filter(|v| *v != 0)
}
