//! Progress and time-to-target projections for savings goals.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;

use super::Goal;

/// Percentage of `target` already saved, capped at 100.
///
/// A non-positive target counts as complete once `current` reaches it.
pub fn goal_progress_pct(current: Decimal, target: Decimal) -> Decimal {
    if target <= Decimal::ZERO {
        return if current >= target {
            dec!(100)
        } else {
            Decimal::ZERO
        };
    }
    current
        .checked_div(target)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .map_or(dec!(100), |pct| pct.min(dec!(100)))
}

/// Whole months of contributions still needed, rounded up.
///
/// `None` when there is no positive monthly contribution. Horizons beyond
/// `u32::MAX` months saturate.
pub fn months_to_goal(current: Decimal, target: Decimal, monthly: Decimal) -> Option<u32> {
    if monthly <= Decimal::ZERO {
        return None;
    }
    let remaining = target.saturating_sub(current);
    if remaining <= Decimal::ZERO {
        return Some(0);
    }
    let months = remaining
        .checked_div(monthly)
        .and_then(|m| m.ceil().to_u32())
        .unwrap_or(u32::MAX);
    Some(months)
}

/// Estimated time until a goal is funded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "months", rename_all = "camelCase")]
pub enum TimeToGoal {
    NoContribution,
    Reached,
    Months(u32),
}

impl TimeToGoal {
    pub fn for_goal(goal: &Goal) -> Self {
        match months_to_goal(
            goal.current_amount,
            goal.target_amount,
            goal.monthly_contribution,
        ) {
            None => TimeToGoal::NoContribution,
            Some(0) => TimeToGoal::Reached,
            Some(months) => TimeToGoal::Months(months),
        }
    }

    /// Human readable form, e.g. `"1 year 3 months"` or `"7 months"`.
    pub fn describe(&self) -> String {
        match *self {
            TimeToGoal::NoContribution => "Set monthly contribution".to_string(),
            TimeToGoal::Reached => "Goal reached".to_string(),
            TimeToGoal::Months(months) => {
                let years = months / 12;
                let rest = months % 12;
                match (years, rest) {
                    (0, m) => plural(m, "month"),
                    (y, 0) => plural(y, "year"),
                    (y, m) => format!("{} {}", plural(y, "year"), plural(m, "month")),
                }
            }
        }
    }
}

fn plural(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

impl fmt::Display for TimeToGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Progress view of a goal as shown on the goals screen.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: String,
    pub progress_pct: Decimal,
    pub remaining: Decimal,
    pub months_to_goal: Option<u32>,
    pub time_to_goal: String,
}

impl GoalProgress {
    pub fn of(goal: &Goal) -> Self {
        let months = months_to_goal(
            goal.current_amount,
            goal.target_amount,
            goal.monthly_contribution,
        );
        GoalProgress {
            goal_id: goal.id.clone(),
            progress_pct: goal_progress_pct(goal.current_amount, goal.target_amount).round_dp(1),
            remaining: goal
                .target_amount
                .saturating_sub(goal.current_amount)
                .max(Decimal::ZERO),
            months_to_goal: months,
            time_to_goal: TimeToGoal::for_goal(goal).describe(),
        }
    }
}
