//! Plain-text dashboard rendering for the terminal

use std::fmt::Write;

use crate::analysis::{TrainingLoad, WeeklyPace};
use crate::dashboard::{DashboardOutcome, DashboardReport};
use crate::models::{Goal, RunRecord};
use crate::pace::seconds_per_km_to_display;
use crate::plan::TrainingPlan;

const BAR_WIDTH: usize = 30;
const NO_RUNS_WARNING: &str = "No recent running activities found.";

pub fn render_goal(goal: &Goal) -> String {
  format!(
    "Goal: {} in {} on {} ({} runs/week)\nTarget pace: {}\n",
    goal.race_type,
    goal.target_time,
    goal.race_date.format("%Y-%m-%d"),
    goal.runs_per_week.get(),
    goal.target_pace_formatted
  )
}

pub fn render_runs_table(runs: &[RunRecord]) -> String {
  let name_width = runs
    .iter()
    .map(|run| run.name.chars().count())
    .max()
    .unwrap_or(0)
    .max("Name".len());

  let mut out = String::new();
  let _ = writeln!(
    out,
    "{:<name_width$}  {:<10}  {:>13}  {:>10}",
    "Name", "Date", "Distance (km)", "Time (min)"
  );
  for run in runs {
    let _ = writeln!(
      out,
      "{:<name_width$}  {:<10}  {:>13.2}  {:>10.1}",
      run.name,
      run.date.format("%Y-%m-%d"),
      run.distance_km,
      run.moving_time_min
    );
  }
  out
}

/// One bar per week, longer is slower, with a `|` marking the target pace
pub fn render_pace_trend(trend: &[WeeklyPace], target_pace_sec: Option<f64>) -> String {
  if trend.is_empty() {
    return "No runs in the last 12 weeks.\n".to_string();
  }

  let slowest = trend
    .iter()
    .map(|week| week.avg_pace_sec_per_km)
    .chain(target_pace_sec)
    .fold(0.0_f64, f64::max);

  let scale = |pace: f64| -> usize {
    if slowest <= 0.0 {
      0
    } else {
      ((pace / slowest) * BAR_WIDTH as f64).round() as usize
    }
  };
  let target_col = target_pace_sec.map(scale);

  let mut out = String::new();
  for week in trend {
    let len = scale(week.avg_pace_sec_per_km);
    let mut bar: Vec<char> = (0..=BAR_WIDTH)
      .map(|i| if i < len { '#' } else { ' ' })
      .collect();
    if let Some(col) = target_col {
      bar[col.min(BAR_WIDTH)] = '|';
    }

    let _ = writeln!(
      out,
      "W{:02} {}  {:>12}  {}",
      week.iso_week,
      week.iso_year,
      seconds_per_km_to_display(week.avg_pace_sec_per_km),
      bar.into_iter().collect::<String>().trim_end()
    );
  }

  match target_pace_sec {
    Some(target) => {
      let _ = writeln!(out, "| target {}", seconds_per_km_to_display(target));
    }
    None => out.push_str("No target line: target time is not valid.\n"),
  }
  out
}

pub fn render_training_load(load: &TrainingLoad) -> String {
  let filled = (load.progress * BAR_WIDTH as f64).round() as usize;
  format!(
    "[{}{}] {:.0}% ({} of {} long runs)\n",
    "#".repeat(filled),
    "-".repeat(BAR_WIDTH - filled.min(BAR_WIDTH)),
    load.progress * 100.0,
    load.completed_long_runs,
    load.expected_long_runs
  )
}

pub fn render_plan(plan: &TrainingPlan) -> String {
  let mut out = String::new();
  for (i, week) in plan.to_lines().iter().enumerate() {
    let _ = writeln!(out, "Week {}:", i + 1);
    for workout in week {
      let _ = writeln!(out, "- {}", workout);
    }
  }
  out
}

pub fn render_report(report: &DashboardReport) -> String {
  let sections = [
    ("Goal", render_goal(&report.goal)),
    ("Recent Runs", render_runs_table(&report.runs)),
    (
      "Pace Trend Over Last 12 Weeks",
      render_pace_trend(&report.pace_trend, report.goal.target_pace_sec),
    ),
    ("Training Load Progress", render_training_load(&report.training_load)),
    ("Training Plan", render_plan(&report.plan)),
  ];

  sections
    .iter()
    .map(|(title, body)| format!("== {} ==\n{}", title, body))
    .collect::<Vec<_>>()
    .join("\n")
}

pub fn render_outcome(outcome: &DashboardOutcome) -> String {
  match outcome {
    DashboardOutcome::Ready(report) => render_report(report),
    DashboardOutcome::NoRuns { goal } => {
      format!("== Goal ==\n{}\n{}\n", render_goal(goal), NO_RUNS_WARNING)
    }
  }
}
