pub mod analysis;
pub mod analyst;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod logging;
pub mod models;
pub mod pace;
pub mod plan;
pub mod render;
pub mod store;
pub mod strava;

#[cfg(test)]
mod test_utils;

use chrono::Local;
use config::{AppConfig, ConfigError, GoalBackend};
use dashboard::{Dashboard, DashboardError, DashboardOutcome};
use serde::Serialize;
use store::{GoalStore, JsonGoalStore, SqliteGoalStore, StoreError};
use strava::{StravaClient, StravaError};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error(transparent)]
  Store(#[from] StoreError),

  #[error(transparent)]
  Strava(#[from] StravaError),

  #[error(transparent)]
  Dashboard(#[from] DashboardError),

  #[error("Failed to encode dashboard: {0}")]
  Encode(#[from] serde_json::Error),
}

/// JSON output: the dashboard plus the analyst's answer, if asked
#[derive(Serialize)]
struct JsonOutput<'a> {
  #[serde(flatten)]
  outcome: &'a DashboardOutcome,
  #[serde(skip_serializing_if = "Option::is_none")]
  answer: Option<String>,
}

/// Build the goal store the configuration asks for
pub async fn open_goal_store(backend: &GoalBackend) -> Result<Box<dyn GoalStore>, StoreError> {
  match backend {
    GoalBackend::JsonFile(path) => {
      info!(path = %path.display(), "Using goal file");
      Ok(Box::new(JsonGoalStore::new(path.clone())))
    }
    GoalBackend::Sqlite {
      database_url,
      profile,
    } => {
      let pool = db::initialize_db(database_url).await?;
      info!(profile = %profile, "Using goal database");
      Ok(Box::new(SqliteGoalStore::new(pool, profile.clone())))
    }
  }
}

/// One render: read config, refresh the goal, fetch runs, print the dashboard
pub async fn run(args: cli::Cli) -> Result<(), AppError> {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  let mut config = AppConfig::from_env()?;
  if let Some(path) = &args.goal_file {
    config.goal_backend = GoalBackend::JsonFile(path.clone());
  }

  let store = open_goal_store(&config.goal_backend).await?;
  let strava = StravaClient::new(&config.api_base)?;
  let dashboard = Dashboard::new(store, strava, config.access_token);

  let today = args.today.unwrap_or_else(|| Local::now().date_naive());
  let outcome = dashboard.render(&args.goal_input(), today).await?;

  // The analyst only has something to work with once runs came back
  let answer = match (&outcome, &args.ask) {
    (DashboardOutcome::Ready(report), Some(question)) => {
      Some(dashboard.ask(question, &report.goal, &report.runs))
    }
    _ => None,
  };

  if args.json {
    let output = JsonOutput {
      outcome: &outcome,
      answer,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    return Ok(());
  }

  println!("{}", render::render_outcome(&outcome));
  if let Some(answer) = answer {
    println!("== Ask the Analyst ==\n{}", answer);
  }

  Ok(())
}
