//! One dashboard render pass
//!
//! load goal -> apply inputs -> re-derive -> save -> fetch runs -> analyze.
//! Each pass starts from scratch; the stored goal is the only carried state.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::{weekly_pace_trend, TrainingLoad, WeeklyPace};
use crate::analyst::Analyst;
use crate::models::{Goal, GoalInput, RunRecord};
use crate::plan::{generate_plan, TrainingPlan};
use crate::store::{GoalStore, StoreError};
use crate::strava::{StravaClient, StravaError};

/// ---------------------------------------------------------------------------
/// Outcome Types
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
  #[error(transparent)]
  Store(#[from] StoreError),

  #[error(transparent)]
  Fetch(#[from] StravaError),
}

/// Everything a full render shows
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
  pub today: NaiveDate,
  pub goal: Goal,
  pub runs: Vec<RunRecord>,
  pub pace_trend: Vec<WeeklyPace>,
  pub training_load: TrainingLoad,
  pub plan: TrainingPlan,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DashboardOutcome {
  Ready(DashboardReport),
  /// Strava returned no runs; the goal was still saved, the rest is skipped
  NoRuns { goal: Goal },
}

impl DashboardOutcome {
  pub fn goal(&self) -> &Goal {
    match self {
      DashboardOutcome::Ready(report) => &report.goal,
      DashboardOutcome::NoRuns { goal } => goal,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Dashboard
/// ---------------------------------------------------------------------------

pub struct Dashboard {
  store: Box<dyn GoalStore>,
  strava: StravaClient,
  access_token: String,
  analyst: Analyst,
}

impl Dashboard {
  pub fn new(store: Box<dyn GoalStore>, strava: StravaClient, access_token: impl Into<String>) -> Self {
    Self {
      store,
      strava,
      access_token: access_token.into(),
      analyst: Analyst::default(),
    }
  }

  pub fn with_analyst(mut self, analyst: Analyst) -> Self {
    self.analyst = analyst;
    self
  }

  /// Load the stored goal (or defaults), apply inputs, re-derive and save
  pub async fn refresh_goal(&self, input: &GoalInput, today: NaiveDate) -> Result<Goal, StoreError> {
    let stored = self.store.load().await;
    let goal = stored.unwrap_or_else(|| Goal::default_for(today)).apply(input);

    if !goal.is_valid() {
      warn!(target_time = %goal.target_time, "Target time is not HH:MM:SS, goal pace unavailable");
    }

    self.store.save(&goal).await?;
    Ok(goal)
  }

  pub async fn render(&self, input: &GoalInput, today: NaiveDate) -> Result<DashboardOutcome, DashboardError> {
    let goal = self.refresh_goal(input, today).await?;

    let runs = self.strava.fetch_runs(&self.access_token).await?;
    if runs.is_empty() {
      warn!("No recent running activities found");
      return Ok(DashboardOutcome::NoRuns { goal });
    }

    let pace_trend = weekly_pace_trend(&runs, today);
    let training_load = TrainingLoad::compute(&runs, today, goal.race_date);
    let plan = generate_plan(today, goal.race_date, goal.runs_per_week.get());

    info!(
      runs = runs.len(),
      trend_weeks = pace_trend.len(),
      plan_weeks = plan.weeks().len(),
      "Dashboard ready"
    );

    Ok(DashboardOutcome::Ready(DashboardReport {
      today,
      goal,
      runs,
      pace_trend,
      training_load,
      plan,
    }))
  }

  pub fn ask(&self, question: &str, goal: &Goal, recent_runs: &[RunRecord]) -> String {
    self.analyst.respond(question, goal, recent_runs)
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
