use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::models::RunRecord;
use crate::pace::pace_from_distance_and_time;

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

pub const STRAVA_API_BASE: &str = "https://www.strava.com/api/v3";
pub const ACTIVITIES_PER_PAGE: u32 = 50;
const RUN_TYPE: &str = "Run";

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum StravaError {
  #[error("HTTP request failed: {0}")]
  Request(#[from] reqwest::Error),

  #[error("Failed to fetch activities from Strava (status code {status})")]
  Status { status: u16, body: String },

  #[error("Failed to parse activities: {0}")]
  Decode(String),

  #[error("Invalid Strava API base URL: {0}")]
  InvalidBaseUrl(String),
}

impl StravaError {
  /// HTTP status for a rejected request, if that's what this is
  pub fn status_code(&self) -> Option<u16> {
    match self {
      StravaError::Status { status, .. } => Some(*status),
      StravaError::Request(e) => e.status().map(|s| s.as_u16()),
      _ => None,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Strava API - Activity Summary
/// ---------------------------------------------------------------------------

/// Activity summary from Strava API, only the fields the dashboard reads
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StravaActivity {
  #[serde(default)]
  pub id: i64,
  #[serde(default)]
  pub name: String,
  /// Legacy "type" field; "Run" is what we keep
  #[serde(rename = "type", default)]
  pub activity_type: String,
  /// Local start time, e.g. "2026-10-12T07:31:00Z". Only the date part is used.
  #[serde(default)]
  pub start_date_local: String,
  /// Meters
  #[serde(default)]
  pub distance: f64,
  /// Seconds
  #[serde(default)]
  pub moving_time: i64,
}

impl StravaActivity {
  pub fn is_run(&self) -> bool {
    self.activity_type == RUN_TYPE
  }

  /// Calendar day of the activity, from the first 10 characters of the local start
  pub fn local_date(&self) -> Option<NaiveDate> {
    let day = self.start_date_local.get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
  }

  /// Reduce to a run record. `None` when the start date can't be read.
  pub fn to_run_record(&self) -> Option<RunRecord> {
    let date = self.local_date()?;
    let moving_time = self.moving_time as f64;

    Some(RunRecord {
      name: self.name.clone(),
      date,
      distance_km: self.distance / 1000.0,
      moving_time_min: moving_time / 60.0,
      pace_sec_per_km: pace_from_distance_and_time(moving_time, self.distance),
    })
  }
}

/// Keep runs only, in the order Strava returned them
pub fn filter_runs(activities: &[StravaActivity]) -> Vec<RunRecord> {
  activities
    .iter()
    .filter(|activity| activity.is_run())
    .filter_map(|activity| {
      let record = activity.to_run_record();
      if record.is_none() {
        warn!(
          activity_id = activity.id,
          start_date_local = %activity.start_date_local,
          "Skipping run with unreadable start date"
        );
      }
      record
    })
    .collect()
}

/// ---------------------------------------------------------------------------
/// Strava API - Client
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct StravaClient {
  client: Client,
  api_base: Url,
}

impl StravaClient {
  pub fn new(api_base: &str) -> Result<Self, StravaError> {
    // Url::join drops the last path segment without a trailing slash
    let normalized = format!("{}/", api_base.trim_end_matches('/'));
    let api_base =
      Url::parse(&normalized).map_err(|e| StravaError::InvalidBaseUrl(format!("{}: {}", api_base, e)))?;

    Ok(Self {
      client: Client::new(),
      api_base,
    })
  }

  fn activities_url(&self, per_page: u32) -> Result<Url, StravaError> {
    let mut url = self
      .api_base
      .join("athlete/activities")
      .map_err(|e| StravaError::InvalidBaseUrl(e.to_string()))?;

    url
      .query_pairs_mut()
      .append_pair("per_page", &per_page.to_string());

    Ok(url)
  }

  /// Fetch recent activities from Strava. One request, no retries.
  pub async fn fetch_activities(
    &self,
    access_token: &str,
    per_page: u32,
  ) -> Result<Vec<StravaActivity>, StravaError> {
    let url = self.activities_url(per_page)?;
    debug!(%url, "Fetching Strava activities");

    let response = self
      .client
      .get(url)
      .bearer_auth(access_token)
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(StravaError::Status {
        status: status.as_u16(),
        body,
      });
    }

    let response_text = response.text().await?;

    serde_json::from_str(&response_text).map_err(|e| {
      let raw: String = response_text.chars().take(500).collect();
      warn!(error = %e, %raw, "Failed to parse Strava response");
      StravaError::Decode(e.to_string())
    })
  }

  /// Fetch the 50 most recent activities and keep the runs
  pub async fn fetch_runs(&self, access_token: &str) -> Result<Vec<RunRecord>, StravaError> {
    let activities = self.fetch_activities(access_token, ACTIVITIES_PER_PAGE).await?;
    let runs = filter_runs(&activities);

    debug!(
      fetched = activities.len(),
      runs = runs.len(),
      "Filtered Strava activities to runs"
    );

    Ok(runs)
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
