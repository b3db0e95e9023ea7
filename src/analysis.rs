//! Deterministic analysis over fetched runs
//!
//! Weekly pace trend for the chart and the long-run training load ratio.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::RunRecord;
use crate::plan::weeks_between;

/// ISO weeks shown before the current one
pub const TREND_WEEKS: i64 = 12;

/// ---------------------------------------------------------------------------
/// Weekly Pace Trend
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPace {
  pub iso_year: i32,
  pub iso_week: u32,
  /// Monday of the ISO week
  pub week_start: NaiveDate,
  pub avg_pace_sec_per_km: f64,
  pub avg_pace_min_per_km: f64,
  pub runs: usize,
}

fn week_start(date: NaiveDate) -> NaiveDate {
  date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Mean pace per ISO week, from 12 weeks before today's week through today's week.
/// Oldest week first. Weeks without runs are left out.
pub fn weekly_pace_trend(runs: &[RunRecord], today: NaiveDate) -> Vec<WeeklyPace> {
  let current = week_start(today);
  let earliest = current - Duration::weeks(TREND_WEEKS);

  let mut buckets: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
  for run in runs {
    let start = week_start(run.date);
    if start < earliest || start > current {
      continue;
    }
    let bucket = buckets.entry(start).or_insert((0.0, 0));
    bucket.0 += run.pace_sec_per_km;
    bucket.1 += 1;
  }

  buckets
    .into_iter()
    .map(|(start, (sum, count))| {
      let avg = sum / count as f64;
      let iso = start.iso_week();
      WeeklyPace {
        iso_year: iso.year(),
        iso_week: iso.week(),
        week_start: start,
        avg_pace_sec_per_km: avg,
        avg_pace_min_per_km: avg / 60.0,
        runs: count,
      }
    })
    .collect()
}

/// ---------------------------------------------------------------------------
/// Training Load
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingLoad {
  pub completed_long_runs: usize,
  /// One long run per remaining week, never less than one
  pub expected_long_runs: i64,
  /// completed / expected, capped to 1.0
  pub progress: f64,
}

impl TrainingLoad {
  /// A race date in the past leaves a negative week count; the denominator
  /// is clamped to 1 in that case.
  pub fn compute(runs: &[RunRecord], today: NaiveDate, race_date: NaiveDate) -> Self {
    let completed_long_runs = runs.iter().filter(|run| run.is_long_run()).count();
    let expected_long_runs = weeks_between(today, race_date).max(1);
    let progress = (completed_long_runs as f64 / expected_long_runs as f64).min(1.0);

    Self {
      completed_long_runs,
      expected_long_runs,
      progress,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
