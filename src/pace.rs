//! Pace conversions
//!
//! Everything here works in seconds per kilometer. Display strings use the
//! `m:ss min/km` form, truncating fractional seconds.

use chrono::{NaiveTime, Timelike};
use thiserror::Error;

/// Display value for an empty or undefined pace
pub const NO_PACE: &str = "-";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaceError {
  #[error("Invalid target time '{0}', expected HH:MM:SS")]
  InvalidTime(String),
}

/// ---------------------------------------------------------------------------
/// Formatting
/// ---------------------------------------------------------------------------

/// Format seconds per km as `m:ss min/km`.
///
/// Zero, NaN and infinity are all treated as "no pace" and render as `-`.
pub fn seconds_per_km_to_display(sec_per_km: f64) -> String {
  if sec_per_km == 0.0 || !sec_per_km.is_finite() {
    return NO_PACE.to_string();
  }

  let minutes = (sec_per_km / 60.0).floor() as i64;
  let seconds = sec_per_km.rem_euclid(60.0).floor() as i64;
  format!("{}:{:02} min/km", minutes, seconds)
}

/// Same as [`seconds_per_km_to_display`], with `None` as the undefined pace
pub fn format_pace(sec_per_km: Option<f64>) -> String {
  sec_per_km
    .map(seconds_per_km_to_display)
    .unwrap_or_else(|| NO_PACE.to_string())
}

/// ---------------------------------------------------------------------------
/// Derivation
/// ---------------------------------------------------------------------------

/// Pace in seconds per km from a moving time and a distance in meters.
/// A zero distance yields a zero pace.
pub fn pace_from_distance_and_time(moving_time_sec: f64, distance_meters: f64) -> f64 {
  if distance_meters == 0.0 {
    return 0.0;
  }
  moving_time_sec / (distance_meters / 1000.0)
}

/// Parse a target time like `1:45:00` into total seconds
pub fn parse_target_time(input: &str) -> Result<u32, PaceError> {
  let time = NaiveTime::parse_from_str(input.trim(), "%H:%M:%S")
    .map_err(|_| PaceError::InvalidTime(input.to_string()))?;

  // chrono reads `:60` as a leap second; seconds stop at 59 here
  if time.nanosecond() >= 1_000_000_000 {
    return Err(PaceError::InvalidTime(input.to_string()));
  }

  Ok(time.hour() * 3600 + time.minute() * 60 + time.second())
}

/// Mean of a set of paces, `None` when there is nothing to average
pub fn mean_pace<I>(paces: I) -> Option<f64>
where
  I: IntoIterator<Item = f64>,
{
  let (sum, count) = paces
    .into_iter()
    .fold((0.0, 0usize), |(sum, count), pace| (sum + pace, count + 1));

  if count == 0 {
    None
  } else {
    Some(sum / count as f64)
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
