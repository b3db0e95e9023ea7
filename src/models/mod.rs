pub mod goal;
pub mod run;

pub use goal::{Goal, GoalInput, RaceType, RunsPerWeek};
pub use run::RunRecord;
