pub mod gear;
pub mod user;
pub mod workout;

pub use gear::{GearMileage, NewGear};
pub use user::User;
pub use workout::{
  BikeWorkout, NewWorkout, RunWorkout, SwimWorkout, WeeklyVolume, WorkoutFilter, WorkoutSummary,
};
