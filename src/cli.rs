//! Command-line argument definitions.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::sport::Sport;
use crate::units::DistanceUnit;

#[derive(Debug, Parser)]
#[command(name = "irontrack", version, about = "Personal triathlon training log")]
pub struct IronTrack {
  /// Username the command acts on
  #[arg(short, long, global = true, default_value = "cam")]
  pub user: String,

  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
  /// Record a workout
  AddWorkout(AddWorkoutArgs),
  /// Register a piece of gear
  AddGear(AddGearArgs),
  /// Show the most recent workouts
  Recent {
    /// How many workouts to show
    #[arg(long, default_value_t = 10)]
    limit: i64,
    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
  },
  /// List workouts with optional sport and date filters
  List(ListArgs),
  /// Per-sport listing with pace and speed columns
  Detail(DetailArgs),
  /// Weekly distance and duration per sport
  Weekly(WeeklyArgs),
  /// Lifetime distance per gear item
  GearTotals {
    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
  },
  /// List known users
  Users,
  /// Create the demo user and an example workout
  Seed,
  /// Regenerate randomized demo workouts for the user
  Populate(PopulateArgs),
}

#[derive(Debug, Args)]
pub struct AddWorkoutArgs {
  /// Sport for this session
  #[arg(long, value_enum)]
  pub sport: Sport,

  /// Workout date (YYYY-MM-DD)
  #[arg(long)]
  pub date: NaiveDate,

  /// Start time (HH:MM), blank for none
  #[arg(long)]
  pub start_time: Option<String>,

  /// Duration in minutes
  #[arg(long)]
  pub duration_min: f64,

  /// Distance in the chosen unit; zero counts as not recorded
  #[arg(long)]
  pub distance: Option<f64>,

  /// Unit the distance was entered in
  #[arg(long, value_enum, default_value_t = DistanceUnit::Km)]
  pub unit: DistanceUnit,

  /// Perceived effort, 1-10
  #[arg(long)]
  pub effort: i64,

  /// Gear ids used (comma-separated)
  #[arg(long, value_delimiter = ',')]
  pub gear: Vec<i64>,

  #[arg(long)]
  pub location_id: Option<i64>,

  /// Elevation gain in meters
  #[arg(long)]
  pub elevation_gain: Option<f64>,

  #[arg(long)]
  pub calories: Option<i64>,

  #[arg(long)]
  pub avg_hr: Option<i64>,

  #[arg(long)]
  pub avg_cadence: Option<f64>,

  #[arg(long)]
  pub avg_power: Option<f64>,

  #[arg(long)]
  pub notes: Option<String>,
}

#[derive(Debug, Args)]
pub struct AddGearArgs {
  /// Kind of gear (shoe, bike, wetsuit, ...)
  #[arg(long)]
  pub gear_type: String,

  #[arg(long)]
  pub brand: Option<String>,

  #[arg(long)]
  pub model: Option<String>,

  /// Purchase date (YYYY-MM-DD)
  #[arg(long)]
  pub purchase_date: Option<NaiveDate>,

  /// Mark the gear as already retired
  #[arg(long)]
  pub retired: bool,
}

#[derive(Debug, Args)]
pub struct ListArgs {
  #[arg(long, value_enum)]
  pub sport: Option<Sport>,

  #[arg(long)]
  pub start_date: Option<NaiveDate>,

  #[arg(long)]
  pub end_date: Option<NaiveDate>,

  /// Emit JSON instead of a table
  #[arg(long)]
  pub json: bool,
}

#[derive(Debug, Args)]
pub struct DetailArgs {
  #[arg(value_enum)]
  pub sport: Sport,

  #[arg(long)]
  pub start_date: Option<NaiveDate>,

  #[arg(long)]
  pub end_date: Option<NaiveDate>,

  /// Emit JSON instead of a table
  #[arg(long)]
  pub json: bool,
}

#[derive(Debug, Args)]
pub struct WeeklyArgs {
  #[arg(long)]
  pub start_date: NaiveDate,

  #[arg(long)]
  pub end_date: NaiveDate,

  /// Emit JSON instead of a table
  #[arg(long)]
  pub json: bool,
}

#[derive(Debug, Args)]
pub struct PopulateArgs {
  /// First day of the generated block
  #[arg(long, default_value = "2025-10-01")]
  pub start_date: NaiveDate,

  /// Last day of the generated block
  #[arg(long, default_value = "2025-12-31")]
  pub end_date: NaiveDate,

  /// RNG seed, for reproducible demos
  #[arg(long, default_value_t = 341)]
  pub seed: u64,
}
