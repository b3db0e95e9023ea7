//! Keyword analyst
//!
//! Canned answers picked by case-insensitive substring match. Rules are tried
//! top to bottom and the first match answers; nothing matched means the
//! fallback. There is no memory between questions.

use crate::models::{Goal, RunRecord};
use crate::pace::{format_pace, mean_pace};

pub const AHEAD_OF_GOAL: &str =
  "You're currently pacing faster than your goal! Maintain consistency.";
pub const BEHIND_GOAL: &str =
  "You're slightly behind goal pace. Focus on tempo runs and sharpening your endurance.";
pub const NEXT_RUN: &str =
  "Recommended next run: 6–8 km easy run, or a moderate tempo run based on your energy levels.";
pub const FALLBACK: &str =
  "I'm a data-driven analyst. Please ask about pace, readiness, or training advice.";

/// What a responder gets to look at
#[derive(Debug, Clone, Copy)]
pub struct AnalystContext<'a> {
  pub goal: &'a Goal,
  pub recent_runs: &'a [RunRecord],
}

impl AnalystContext<'_> {
  fn mean_recent_pace(&self) -> Option<f64> {
    mean_pace(self.recent_runs.iter().map(|run| run.pace_sec_per_km))
  }
}

pub type Predicate = fn(&str) -> bool;
pub type Responder = fn(&AnalystContext<'_>) -> String;

/// A (predicate, responder) pair. The predicate sees the lowercased question.
#[derive(Clone, Copy)]
pub struct Rule {
  pub name: &'static str,
  pub matches: Predicate,
  pub respond: Responder,
}

pub struct Analyst {
  rules: Vec<Rule>,
  fallback: Responder,
}

impl Default for Analyst {
  fn default() -> Self {
    Self::new(
      vec![
        Rule {
          name: "pace",
          matches: |q| q.contains("pace"),
          respond: pace_report,
        },
        Rule {
          name: "readiness",
          matches: |q| q.contains("ready") || q.contains("close"),
          respond: readiness,
        },
        Rule {
          name: "next_run",
          matches: |q| q.contains("next run"),
          respond: |_| NEXT_RUN.to_string(),
        },
      ],
      |_| FALLBACK.to_string(),
    )
  }
}

impl Analyst {
  pub fn new(rules: Vec<Rule>, fallback: Responder) -> Self {
    Self { rules, fallback }
  }

  /// Name of the rule that would answer, `None` for the fallback
  pub fn matching_rule(&self, question: &str) -> Option<&'static str> {
    let question = question.to_lowercase();
    self
      .rules
      .iter()
      .find(|rule| (rule.matches)(&question))
      .map(|rule| rule.name)
  }

  pub fn respond(&self, question: &str, goal: &Goal, recent_runs: &[RunRecord]) -> String {
    let question = question.to_lowercase();
    let context = AnalystContext { goal, recent_runs };

    match self.rules.iter().find(|rule| (rule.matches)(&question)) {
      Some(rule) => (rule.respond)(&context),
      None => (self.fallback)(&context),
    }
  }
}

/// Answer with the default rule set
pub fn respond(question: &str, goal: &Goal, recent_runs: &[RunRecord]) -> String {
  Analyst::default().respond(question, goal, recent_runs)
}

fn pace_report(context: &AnalystContext<'_>) -> String {
  format!(
    "Your average recent pace is {}. Target pace for your goal is {}.",
    format_pace(context.mean_recent_pace()),
    context.goal.target_pace_formatted
  )
}

/// Strictly faster than target is ahead; anything else, including an
/// unparseable target or no runs, is behind.
fn readiness(context: &AnalystContext<'_>) -> String {
  match (context.mean_recent_pace(), context.goal.target_pace_sec) {
    (Some(recent), Some(target)) if recent < target => AHEAD_OF_GOAL.to_string(),
    _ => BEHIND_GOAL.to_string(),
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::*;

  #[test]
  fn test_pace_question_reports_mean() {
    let goal = mock_goal("1:45:00");
    let runs = mock_runs_with_paces(&[300.0, 330.0]);

    let answer = respond("What's my PACE lately?", &goal, &runs);
    assert_eq!(
      answer,
      "Your average recent pace is 5:15 min/km. Target pace for your goal is 4:58 min/km."
    );
  }

  #[test]
  fn test_ready_faster_than_goal() {
    let goal = mock_goal("1:45:00");
    let runs = mock_runs_with_paces(&[280.0, 290.0]);
    assert_eq!(respond("Am I ready?", &goal, &runs), AHEAD_OF_GOAL);
  }

  #[test]
  fn test_close_slower_than_goal() {
    let goal = mock_goal("1:45:00");
    let runs = mock_runs_with_paces(&[320.0, 340.0]);
    assert_eq!(respond("How close am I", &goal, &runs), BEHIND_GOAL);
  }

  #[test]
  fn test_ready_equal_pace_is_behind() {
    // 10K in 50:00 is exactly 300 s/km
    let mut goal = mock_goal("0:50:00");
    goal.race_type = crate::models::RaceType::TenK;
    goal.recompute();
    let runs = mock_runs_with_paces(&[300.0]);
    assert_eq!(respond("ready?", &goal, &runs), BEHIND_GOAL);
  }

  #[test]
  fn test_ready_with_invalid_goal_is_behind() {
    let goal = mock_goal("abc");
    let runs = mock_runs_with_paces(&[200.0]);
    assert_eq!(respond("am I ready", &goal, &runs), BEHIND_GOAL);
  }

  #[test]
  fn test_pace_wins_over_ready() {
    let goal = mock_goal("1:45:00");
    let runs = mock_runs_with_paces(&[280.0]);
    let answer = respond("Is my pace ready for race day?", &goal, &runs);
    assert!(answer.starts_with("Your average recent pace is 4:40 min/km"));
  }

  #[test]
  fn test_next_run_ignores_inputs() {
    let goal = mock_goal("abc");
    assert_eq!(respond("What should my next run be?", &goal, &[]), NEXT_RUN);
  }

  #[test]
  fn test_fallback() {
    let goal = mock_goal("1:45:00");
    assert_eq!(respond("hello there", &goal, &[]), FALLBACK);
    assert_eq!(Analyst::default().matching_rule("hello there"), None);
  }

  #[test]
  fn test_pace_with_no_runs_shows_dash() {
    let goal = mock_goal("1:45:00");
    let answer = respond("pace", &goal, &[]);
    assert!(answer.starts_with("Your average recent pace is -."));
  }

  #[test]
  fn test_custom_rule_order() {
    let analyst = Analyst::new(
      vec![Rule {
        name: "anything",
        matches: |_| true,
        respond: |_| "always".to_string(),
      }],
      |_| "never".to_string(),
    );
    let goal = mock_goal("1:45:00");
    assert_eq!(analyst.respond("pace", &goal, &[]), "always");
    assert_eq!(analyst.matching_rule("pace"), Some("anything"));
  }
}
