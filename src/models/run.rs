use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Distance above which a run counts as a long run
pub const LONG_RUN_THRESHOLD_KM: f64 = 10.0;

/// One fetched run, reduced to what the dashboard shows.
/// Recomputed on every fetch, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
  pub name: String,
  pub date: NaiveDate,
  pub distance_km: f64,
  pub moving_time_min: f64,
  pub pace_sec_per_km: f64,
}

impl RunRecord {
  pub fn is_long_run(&self) -> bool {
    self.distance_km > LONG_RUN_THRESHOLD_KM
  }
}
