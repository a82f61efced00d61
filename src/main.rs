//! Entry point: parse CLI arguments and dispatch to command handlers.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use irontrack::cli::IronTrack;
use irontrack::commands;
use irontrack::config::DbConfig;
use irontrack::db;
use irontrack::Result;

#[tokio::main]
async fn main() -> Result<()> {
  dotenvy::dotenv().ok();
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .init();

  let app = IronTrack::parse();
  let config = DbConfig::from_env()?;
  let pool = db::connect(&config).await?;

  let outcome = commands::dispatch(&pool, app).await;
  pool.close().await;
  outcome
}
