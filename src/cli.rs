use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use crate::models::{GoalInput, RaceType, RunsPerWeek};

const AFTER_HELP: &str = "\
ENVIRONMENT:
    STRAVA_ACCESS_TOKEN      Pre-fetched Strava bearer token (required)
    STRAVA_API_BASE          Override the Strava API base URL
    RUN_COACH_GOAL_FILE      Goal file path (default: goal.json)
    RUN_COACH_DATABASE_URL   Store the goal in SQLite instead, e.g. sqlite://coach.db
    RUN_COACH_PROFILE        Goal slot name in SQLite (default: default)
    RUST_LOG                 Log level (default: info)

EXAMPLES:
    Set a half marathon goal and show the dashboard:
        $ run-coach --race-type \"Half Marathon\" --target-time 1:45:00 --race-date 2026-12-06

    Ask the analyst a question using the saved goal:
        $ run-coach --ask \"Am I ready?\"";

#[derive(Parser, Debug)]
#[command(name = "run-coach")]
#[command(version)]
#[command(about = "Running coach dashboard: race goal, pace trend and training plan from Strava")]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
  /// 5K, 10K, Half Marathon or Marathon
  #[arg(long)]
  pub race_type: Option<RaceType>,

  /// Target finish time, HH:MM:SS
  #[arg(long, value_name = "HH:MM:SS")]
  pub target_time: Option<String>,

  /// Race day, YYYY-MM-DD
  #[arg(long, value_name = "YYYY-MM-DD")]
  pub race_date: Option<NaiveDate>,

  /// 3, 4, 5 or 6
  #[arg(long)]
  pub runs_per_week: Option<RunsPerWeek>,

  /// Question for the analyst (pace, readiness, next run)
  #[arg(long, value_name = "QUESTION")]
  pub ask: Option<String>,

  /// Goal file path, overrides RUN_COACH_GOAL_FILE
  #[arg(long)]
  pub goal_file: Option<PathBuf>,

  /// Render as if today were this date
  #[arg(long, value_name = "YYYY-MM-DD")]
  pub today: Option<NaiveDate>,

  /// Print the dashboard as JSON
  #[arg(long)]
  pub json: bool,
}

impl Cli {
  pub fn goal_input(&self) -> GoalInput {
    GoalInput {
      race_type: self.race_type,
      target_time: self.target_time.clone(),
      race_date: self.race_date,
      runs_per_week: self.runs_per_week,
    }
  }
}
