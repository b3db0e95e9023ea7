use std::env;
use std::path::PathBuf;

use crate::store::{DEFAULT_GOAL_FILE, DEFAULT_PROFILE};
use crate::strava::STRAVA_API_BASE;

/// ---------------------------------------------------------------------------
/// Environment Keys
/// ---------------------------------------------------------------------------

pub const ACCESS_TOKEN_VAR: &str = "STRAVA_ACCESS_TOKEN";
pub const API_BASE_VAR: &str = "STRAVA_API_BASE";
pub const GOAL_FILE_VAR: &str = "RUN_COACH_GOAL_FILE";
pub const DATABASE_URL_VAR: &str = "RUN_COACH_DATABASE_URL";
pub const PROFILE_VAR: &str = "RUN_COACH_PROFILE";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("Missing configuration: {0}")]
  MissingConfig(String),
}

/// Where the goal lives
#[derive(Debug, Clone, PartialEq)]
pub enum GoalBackend {
  JsonFile(PathBuf),
  Sqlite { database_url: String, profile: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// Pre-fetched Strava bearer token
  pub access_token: String,
  pub api_base: String,
  pub goal_backend: GoalBackend,
}

impl AppConfig {
  /// Read settings from the environment. Call `dotenvy::dotenv()` first to
  /// pick up a `.env` file.
  pub fn from_env() -> Result<Self, ConfigError> {
    let access_token = non_empty_var(ACCESS_TOKEN_VAR)
      .ok_or_else(|| ConfigError::MissingConfig(ACCESS_TOKEN_VAR.into()))?;

    let api_base = non_empty_var(API_BASE_VAR).unwrap_or_else(|| STRAVA_API_BASE.to_string());

    let goal_backend = match non_empty_var(DATABASE_URL_VAR) {
      Some(database_url) => GoalBackend::Sqlite {
        database_url,
        profile: non_empty_var(PROFILE_VAR).unwrap_or_else(|| DEFAULT_PROFILE.to_string()),
      },
      None => GoalBackend::JsonFile(
        non_empty_var(GOAL_FILE_VAR)
          .map(PathBuf::from)
          .unwrap_or_else(|| PathBuf::from(DEFAULT_GOAL_FILE)),
      ),
    };

    Ok(Self {
      access_token,
      api_base,
      goal_backend,
    })
  }
}

fn non_empty_var(key: &str) -> Option<String> {
  env::var(key).ok().filter(|value| !value.trim().is_empty())
}
