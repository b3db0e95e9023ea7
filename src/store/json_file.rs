use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::{GoalStore, StoreError};
use crate::models::Goal;

pub const DEFAULT_GOAL_FILE: &str = "goal.json";

/// The goal as a single flat JSON file
#[derive(Debug, Clone)]
pub struct JsonGoalStore {
  path: PathBuf,
}

impl JsonGoalStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }
}

#[async_trait]
impl GoalStore for JsonGoalStore {
  async fn load(&self) -> Option<Goal> {
    let contents = match tokio::fs::read_to_string(&self.path).await {
      Ok(contents) => contents,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        debug!(path = %self.path.display(), "No goal file yet");
        return None;
      }
      Err(e) => {
        warn!(path = %self.path.display(), error = %e, "Failed to read goal file");
        return None;
      }
    };

    match serde_json::from_str::<Goal>(&contents) {
      Ok(mut goal) => {
        goal.recompute();
        Some(goal)
      }
      Err(e) => {
        warn!(path = %self.path.display(), error = %e, "Ignoring malformed goal file");
        None
      }
    }
  }

  async fn save(&self, goal: &Goal) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(goal)?;

    tokio::fs::write(&self.path, json)
      .await
      .map_err(|source| StoreError::Io {
        path: self.path.clone(),
        source,
      })?;

    debug!(path = %self.path.display(), "Saved goal");
    Ok(())
  }
}
