//! Training Plan Generator
//!
//! Maps (today, race day, runs per week) to a week-by-week outline.
//!
//! - Fewer than two full weeks to race day: no plan, just a marker
//! - The final week is always a taper
//! - Every other week: long run, optional tempo (4+ runs), optional
//!   intervals (5+ runs), easy runs
//! - Long run range grows one km per week with no cap
//!
//! Pure function of its inputs. Nothing here adapts to past performance.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const NOT_ENOUGH_TIME: &str = "Not enough time to generate a full training plan.";

/// Fewest whole weeks we'll build a plan for
pub const MIN_PLAN_WEEKS: i64 = 2;

const LONG_RUN_BASE_LOW_KM: i64 = 10;
const LONG_RUN_BASE_HIGH_KM: i64 = 14;
const TEMPO_MIN_RUNS: u8 = 4;
const INTERVALS_MIN_RUNS: u8 = 5;

// ---------------------------------------------------------------------------
/// Workouts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Workout {
    LongRun { low_km: i64, high_km: i64 },
    Tempo,
    Intervals,
    Easy,
    RaceWeekTaper,
}

impl std::fmt::Display for Workout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LongRun { low_km, high_km } => write!(f, "Long Run ({} to {} km)", low_km, high_km),
            Self::Tempo => write!(f, "Tempo Run (4-8 km at goal pace)"),
            Self::Intervals => write!(f, "Intervals (e.g., 4x1km faster pace)"),
            Self::Easy => write!(f, "1–2 Easy Runs (5–8 km)"),
            Self::RaceWeekTaper => write!(f, "Race Week: Taper, 2 short easy runs"),
        }
    }
}

// ---------------------------------------------------------------------------
/// Plan
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    /// Zero-based week index
    pub week: usize,
    pub workouts: Vec<Workout>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "weeks", rename_all = "snake_case")]
pub enum TrainingPlan {
    /// Race day is too close for a full plan
    NotEnoughTime,
    Weeks(Vec<WeekPlan>),
}

impl TrainingPlan {
    pub fn weeks(&self) -> &[WeekPlan] {
        match self {
            Self::NotEnoughTime => &[],
            Self::Weeks(weeks) => weeks,
        }
    }

    pub fn is_not_enough_time(&self) -> bool {
        matches!(self, Self::NotEnoughTime)
    }

    /// Plan as display lines, one entry per week (or the lone marker)
    pub fn to_lines(&self) -> Vec<Vec<String>> {
        match self {
            Self::NotEnoughTime => vec![vec![NOT_ENOUGH_TIME.to_string()]],
            Self::Weeks(weeks) => weeks
                .iter()
                .map(|w| w.workouts.iter().map(|workout| workout.to_string()).collect())
                .collect(),
        }
    }
}

/// Whole weeks between two dates, floored (negative when race day has passed)
pub fn weeks_between(today: NaiveDate, race_day: NaiveDate) -> i64 {
    (race_day - today).num_days().div_euclid(7)
}

pub fn generate_plan(today: NaiveDate, race_day: NaiveDate, runs_per_week: u8) -> TrainingPlan {
    let weeks_left = weeks_between(today, race_day);
    if weeks_left < MIN_PLAN_WEEKS {
        return TrainingPlan::NotEnoughTime;
    }

    let weeks_left = weeks_left as usize;
    let weeks = (0..weeks_left)
        .map(|week| WeekPlan {
            week,
            workouts: if week == weeks_left - 1 {
                vec![Workout::RaceWeekTaper]
            } else {
                build_week(week, runs_per_week)
            },
        })
        .collect();

    TrainingPlan::Weeks(weeks)
}

fn build_week(week: usize, runs_per_week: u8) -> Vec<Workout> {
    let offset = week as i64;
    let mut workouts = vec![Workout::LongRun {
        low_km: LONG_RUN_BASE_LOW_KM + offset,
        high_km: LONG_RUN_BASE_HIGH_KM + offset,
    }];

    if runs_per_week >= TEMPO_MIN_RUNS {
        workouts.push(Workout::Tempo);
    }
    if runs_per_week >= INTERVALS_MIN_RUNS {
        workouts.push(Workout::Intervals);
    }
    workouts.push(Workout::Easy);

    workouts
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_six_days_out_is_not_enough_time() {
        let plan = generate_plan(day(), day() + Duration::days(6), 6);
        assert_eq!(plan, TrainingPlan::NotEnoughTime);
        assert_eq!(plan.to_lines(), vec![vec![NOT_ENOUGH_TIME.to_string()]]);
    }

    #[test]
    fn test_thirteen_days_out_is_not_enough_time() {
        let plan = generate_plan(day(), day() + Duration::days(13), 4);
        assert!(plan.is_not_enough_time());
        assert!(plan.weeks().is_empty());
    }

    #[test]
    fn test_past_race_is_not_enough_time() {
        assert_eq!(weeks_between(day(), day() - Duration::days(1)), -1);
        let plan = generate_plan(day(), day() - Duration::days(30), 5);
        assert!(plan.is_not_enough_time());
    }

    #[test]
    fn test_two_weeks_three_runs() {
        let plan = generate_plan(day(), day() + Duration::days(14), 3);
        let weeks = plan.weeks();

        assert_eq!(weeks.len(), 2);
        assert_eq!(
            weeks[0].workouts,
            vec![Workout::LongRun { low_km: 10, high_km: 14 }, Workout::Easy]
        );
        assert_eq!(weeks[1].workouts, vec![Workout::RaceWeekTaper]);
    }

    #[test]
    fn test_three_weeks_five_runs() {
        let plan = generate_plan(day(), day() + Duration::days(21), 5);
        let weeks = plan.weeks();

        assert_eq!(weeks.len(), 3);
        assert_eq!(
            weeks[0].workouts,
            vec![
                Workout::LongRun { low_km: 10, high_km: 14 },
                Workout::Tempo,
                Workout::Intervals,
                Workout::Easy,
            ]
        );
        assert_eq!(
            weeks[1].workouts,
            vec![
                Workout::LongRun { low_km: 11, high_km: 15 },
                Workout::Tempo,
                Workout::Intervals,
                Workout::Easy,
            ]
        );
        assert_eq!(weeks[2].workouts, vec![Workout::RaceWeekTaper]);
    }

    #[test]
    fn test_four_runs_adds_tempo_only() {
        let plan = generate_plan(day(), day() + Duration::days(20), 4);
        assert_eq!(plan.weeks().len(), 2);
        assert_eq!(
            plan.weeks()[0].workouts,
            vec![
                Workout::LongRun { low_km: 10, high_km: 14 },
                Workout::Tempo,
                Workout::Easy,
            ]
        );
    }

    #[test]
    fn test_long_run_grows_without_cap() {
        let plan = generate_plan(day(), day() + Duration::days(7 * 40), 3);
        let weeks = plan.weeks();
        assert_eq!(weeks.len(), 40);
        assert_eq!(
            weeks[38].workouts[0],
            Workout::LongRun { low_km: 48, high_km: 52 }
        );
    }

    #[test]
    fn test_plan_shape_holds_for_many_inputs() {
        for days_out in 0..120 {
            for runs in 3..=6u8 {
                let race = day() + Duration::days(days_out);
                let plan = generate_plan(day(), race, runs);
                assert_eq!(plan, generate_plan(day(), race, runs), "not deterministic");

                let weeks_left = days_out / 7;
                if weeks_left < 2 {
                    assert!(plan.is_not_enough_time());
                    continue;
                }

                let weeks = plan.weeks();
                assert_eq!(weeks.len() as i64, weeks_left);
                for (i, week) in weeks.iter().enumerate() {
                    assert_eq!(week.week, i);
                    if i == weeks.len() - 1 {
                        assert_eq!(week.workouts, vec![Workout::RaceWeekTaper]);
                        continue;
                    }
                    assert_eq!(
                        week.workouts[0],
                        Workout::LongRun { low_km: 10 + i as i64, high_km: 14 + i as i64 }
                    );
                    assert_eq!(week.workouts.last(), Some(&Workout::Easy));
                    assert_eq!(week.workouts.contains(&Workout::Tempo), runs >= 4);
                    assert_eq!(week.workouts.contains(&Workout::Intervals), runs >= 5);
                }
            }
        }
    }

    #[test]
    fn test_workout_display() {
        assert_eq!(
            Workout::LongRun { low_km: 11, high_km: 15 }.to_string(),
            "Long Run (11 to 15 km)"
        );
        assert_eq!(Workout::Tempo.to_string(), "Tempo Run (4-8 km at goal pace)");
        assert_eq!(Workout::RaceWeekTaper.to_string(), "Race Week: Taper, 2 short easy runs");
    }
}
