//! Goals module - domain models and progress projections.

mod goal_progress;
mod goals_model;

pub use goal_progress::{goal_progress_pct, months_to_goal, GoalProgress, TimeToGoal};
pub use goals_model::{Goal, GoalCategory, NewGoal};

#[cfg(test)]
mod goals_tests;
