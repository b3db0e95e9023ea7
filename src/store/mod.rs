//! Goal persistence
//!
//! One goal slot, behind the [`GoalStore`] port. `save` overwrites the slot
//! wholesale (last writer wins). `load` hands back `None` for a missing,
//! unreadable or malformed record; callers can't tell "never saved" from
//! "corrupt", they both mean "no goal yet".

mod json_file;
mod memory;
mod sqlite;

pub use json_file::{JsonGoalStore, DEFAULT_GOAL_FILE};
pub use memory::MemoryGoalStore;
pub use sqlite::{SqliteGoalStore, DEFAULT_PROFILE};

use async_trait::async_trait;
use std::path::PathBuf;

use crate::models::Goal;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  #[error("Failed to write goal file {}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to serialize goal: {0}")]
  Serialize(#[from] serde_json::Error),

  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("Migration error: {0}")]
  Migrate(#[from] sqlx::migrate::MigrateError),
}

#[async_trait]
pub trait GoalStore: Send + Sync {
  /// Previously saved goal with its pace fields re-derived, or `None`
  async fn load(&self) -> Option<Goal>;

  /// Overwrite the slot
  async fn save(&self, goal: &Goal) -> Result<(), StoreError>;
}
