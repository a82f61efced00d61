use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// For inserting new gear (without gear_id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGear {
  pub gear_type: String,
  pub brand: Option<String>,
  pub model: Option<String>,
  pub purchase_date: Option<NaiveDate>,
  pub retired: bool,
}

impl NewGear {
  pub fn new(gear_type: impl Into<String>) -> Self {
    Self {
      gear_type: gear_type.into(),
      brand: None,
      model: None,
      purchase_date: None,
      retired: false,
    }
  }
}

/// Row from the `gear_distance` view, converted to kilometers.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct GearMileage {
  pub gear_id: i64,
  pub gear_type: String,
  pub brand: Option<String>,
  pub model: Option<String>,
  pub total_distance_km: f64,
}
