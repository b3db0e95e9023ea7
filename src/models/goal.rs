use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::pace::{parse_target_time, seconds_per_km_to_display};

/// Shown in place of a target pace when the target time can't be parsed
pub const INVALID_FORMAT: &str = "Invalid format!";

pub const DEFAULT_TARGET_TIME: &str = "1:45:00";
pub const DEFAULT_RUNS_PER_WEEK: u8 = 4;
pub const DEFAULT_DAYS_TO_RACE: i64 = 30;

/// ---------------------------------------------------------------------------
/// Race Type
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RaceType {
  #[serde(rename = "5K")]
  FiveK,
  #[serde(rename = "10K")]
  TenK,
  #[default]
  #[serde(rename = "Half Marathon")]
  HalfMarathon,
  #[serde(rename = "Marathon")]
  Marathon,
}

impl RaceType {
  pub const ALL: [RaceType; 4] = [
    RaceType::FiveK,
    RaceType::TenK,
    RaceType::HalfMarathon,
    RaceType::Marathon,
  ];

  pub fn distance_km(&self) -> f64 {
    match self {
      RaceType::FiveK => 5.0,
      RaceType::TenK => 10.0,
      RaceType::HalfMarathon => 21.0975,
      RaceType::Marathon => 42.195,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      RaceType::FiveK => "5K",
      RaceType::TenK => "10K",
      RaceType::HalfMarathon => "Half Marathon",
      RaceType::Marathon => "Marathon",
    }
  }
}

impl std::fmt::Display for RaceType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for RaceType {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = s.trim();
    RaceType::ALL
      .into_iter()
      .find(|race| race.as_str().eq_ignore_ascii_case(wanted))
      .ok_or_else(|| format!("Unknown race type: {}", s))
  }
}

/// ---------------------------------------------------------------------------
/// Runs Per Week
/// ---------------------------------------------------------------------------

/// Weekly run count, restricted to the 3-6 range the plan generator knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RunsPerWeek(u8);

impl RunsPerWeek {
  pub const ALLOWED: [u8; 4] = [3, 4, 5, 6];

  pub fn new(runs: u8) -> Result<Self, String> {
    if Self::ALLOWED.contains(&runs) {
      Ok(Self(runs))
    } else {
      Err(format!("Runs per week must be one of 3, 4, 5 or 6 (got {})", runs))
    }
  }

  pub fn get(&self) -> u8 {
    self.0
  }
}

impl Default for RunsPerWeek {
  fn default() -> Self {
    Self(DEFAULT_RUNS_PER_WEEK)
  }
}

impl TryFrom<u8> for RunsPerWeek {
  type Error = String;
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Self::new(value)
  }
}

impl From<RunsPerWeek> for u8 {
  fn from(value: RunsPerWeek) -> Self {
    value.0
  }
}

impl std::str::FromStr for RunsPerWeek {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let runs: u8 = s
      .trim()
      .parse()
      .map_err(|_| format!("Runs per week must be a number (got {})", s))?;
    Self::new(runs)
  }
}

/// ---------------------------------------------------------------------------
/// Goal
/// ---------------------------------------------------------------------------

/// The single race goal. Pace fields are derived, see [`Goal::recompute`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
  pub race_type: RaceType,
  pub target_time: String,
  pub race_date: NaiveDate,
  pub runs_per_week: RunsPerWeek,
  #[serde(default)]
  pub target_pace_sec: Option<f64>,
  #[serde(default)]
  pub target_pace_formatted: String,
}

impl Goal {
  /// Build a goal and derive its target pace
  pub fn new(
    race_type: RaceType,
    target_time: impl Into<String>,
    race_date: NaiveDate,
    runs_per_week: RunsPerWeek,
  ) -> Self {
    let mut goal = Self {
      race_type,
      target_time: target_time.into(),
      race_date,
      runs_per_week,
      target_pace_sec: None,
      target_pace_formatted: INVALID_FORMAT.to_string(),
    };
    goal.recompute();
    goal
  }

  /// Goal used when nothing has been stored yet
  pub fn default_for(today: NaiveDate) -> Self {
    Self::new(
      RaceType::default(),
      DEFAULT_TARGET_TIME,
      today + Duration::days(DEFAULT_DAYS_TO_RACE),
      RunsPerWeek::default(),
    )
  }

  /// Re-derive the target pace from target time and race distance.
  /// An unparseable target time leaves the goal usable but marked invalid.
  pub fn recompute(&mut self) {
    match parse_target_time(&self.target_time) {
      Ok(total_seconds) => {
        let pace = total_seconds as f64 / self.race_type.distance_km();
        self.target_pace_sec = Some(pace);
        self.target_pace_formatted = seconds_per_km_to_display(pace);
      }
      Err(_) => {
        self.target_pace_sec = None;
        self.target_pace_formatted = INVALID_FORMAT.to_string();
      }
    }
  }

  pub fn is_valid(&self) -> bool {
    self.target_pace_sec.is_some()
  }

  /// Apply user inputs over this goal and re-derive
  pub fn apply(mut self, input: &GoalInput) -> Self {
    if let Some(race_type) = input.race_type {
      self.race_type = race_type;
    }
    if let Some(target_time) = &input.target_time {
      self.target_time = target_time.clone();
    }
    if let Some(race_date) = input.race_date {
      self.race_date = race_date;
    }
    if let Some(runs) = input.runs_per_week {
      self.runs_per_week = runs;
    }
    self.recompute();
    self
  }
}

/// Goal fields as entered by the user. Missing fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalInput {
  pub race_type: Option<RaceType>,
  pub target_time: Option<String>,
  pub race_date: Option<NaiveDate>,
  pub runs_per_week: Option<RunsPerWeek>,
}
