//! IronTrack: a personal triathlon training log backed by SQLite.
//!
//! The query layer in [`queries`] is the only code that touches storage;
//! everything else converts at the boundaries (units, CLI input) or
//! renders what the queries return.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod queries;
pub mod seed;
pub mod sport;
pub mod units;

#[cfg(test)]
pub mod test_utils;

pub use error::{Result, TrackerError};
pub use sport::Sport;
