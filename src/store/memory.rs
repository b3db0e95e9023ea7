use async_trait::async_trait;
use std::sync::Mutex;

use super::{GoalStore, StoreError};
use crate::models::Goal;

/// In-memory goal slot, for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryGoalStore {
  slot: Mutex<Option<Goal>>,
}

impl MemoryGoalStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_goal(goal: Goal) -> Self {
    Self {
      slot: Mutex::new(Some(goal)),
    }
  }
}

#[async_trait]
impl GoalStore for MemoryGoalStore {
  async fn load(&self) -> Option<Goal> {
    let slot = self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    slot.clone().map(|mut goal| {
      goal.recompute();
      goal
    })
  }

  async fn save(&self, goal: &Goal) -> Result<(), StoreError> {
    let mut slot = self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    *slot = Some(goal.clone());
    Ok(())
  }
}
