use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, warn};

use super::{GoalStore, StoreError};
use crate::db::DbPool;
use crate::models::{Goal, RaceType, RunsPerWeek};

pub const DEFAULT_PROFILE: &str = "default";

/// Goal slots in SQLite, one per profile
#[derive(Debug, Clone)]
pub struct SqliteGoalStore {
  pool: DbPool,
  profile: String,
}

impl SqliteGoalStore {
  pub fn new(pool: DbPool, profile: impl Into<String>) -> Self {
    Self {
      pool,
      profile: profile.into(),
    }
  }

  pub fn profile(&self) -> &str {
    &self.profile
  }

  async fn load_row(&self) -> Result<Option<Goal>, String> {
    let row: Option<(String, String, NaiveDate, i64)> = sqlx::query_as(
      "SELECT race_type, target_time, race_date, runs_per_week FROM goals WHERE profile = ?1",
    )
    .bind(&self.profile)
    .fetch_optional(&self.pool)
    .await
    .map_err(|e| format!("Failed to load goal: {}", e))?;

    let Some((race_type, target_time, race_date, runs_per_week)) = row else {
      return Ok(None);
    };

    let race_type: RaceType = race_type.parse()?;
    let runs_per_week = u8::try_from(runs_per_week)
      .map_err(|_| format!("Runs per week out of range: {}", runs_per_week))
      .and_then(RunsPerWeek::new)?;

    Ok(Some(Goal::new(race_type, target_time, race_date, runs_per_week)))
  }
}

#[async_trait]
impl GoalStore for SqliteGoalStore {
  async fn load(&self) -> Option<Goal> {
    match self.load_row().await {
      Ok(goal) => goal,
      Err(e) => {
        warn!(profile = %self.profile, error = %e, "Ignoring unreadable stored goal");
        None
      }
    }
  }

  async fn save(&self, goal: &Goal) -> Result<(), StoreError> {
    sqlx::query(
      r#"
      INSERT INTO goals (profile, race_type, target_time, race_date, runs_per_week)
      VALUES (?1, ?2, ?3, ?4, ?5)
      ON CONFLICT(profile) DO UPDATE SET
        race_type = excluded.race_type,
        target_time = excluded.target_time,
        race_date = excluded.race_date,
        runs_per_week = excluded.runs_per_week,
        updated_at = CURRENT_TIMESTAMP
      "#,
    )
    .bind(&self.profile)
    .bind(goal.race_type.as_str())
    .bind(&goal.target_time)
    .bind(goal.race_date)
    .bind(goal.runs_per_week.get() as i64)
    .execute(&self.pool)
    .await?;

    debug!(profile = %self.profile, "Saved goal");
    Ok(())
  }
}
