//! Goals domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a savings goal is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalCategory {
    Emergency,
    #[serde(rename = "Major Purchase")]
    MajorPurchase,
    Home,
    Vehicle,
    Travel,
    Education,
    Health,
    Retirement,
    Other,
}

impl GoalCategory {
    pub const ALL: [GoalCategory; 9] = [
        GoalCategory::Emergency,
        GoalCategory::MajorPurchase,
        GoalCategory::Home,
        GoalCategory::Vehicle,
        GoalCategory::Travel,
        GoalCategory::Education,
        GoalCategory::Health,
        GoalCategory::Retirement,
        GoalCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GoalCategory::Emergency => "Emergency",
            GoalCategory::MajorPurchase => "Major Purchase",
            GoalCategory::Home => "Home",
            GoalCategory::Vehicle => "Vehicle",
            GoalCategory::Travel => "Travel",
            GoalCategory::Education => "Education",
            GoalCategory::Health => "Health",
            GoalCategory::Retirement => "Retirement",
            GoalCategory::Other => "Other",
        }
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GoalCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        GoalCategory::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown goal category '{}'", s))
    }
}

/// Domain model representing a savings goal.
///
/// `current_amount` only grows through funding events and never exceeds
/// `target_amount`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: NaiveDate,
    pub category: GoalCategory,
    pub monthly_contribution: Decimal,
}

impl Goal {
    /// Adds `amount` to the accumulated total, clamped at the target.
    /// Returns the amount actually credited.
    pub fn fund(&mut self, amount: Decimal) -> Decimal {
        let before = self.current_amount;
        // A sum too large for a Decimal is past any target.
        self.current_amount = self
            .current_amount
            .checked_add(amount)
            .map_or(self.target_amount, |sum| sum.min(self.target_amount));
        self.current_amount - before
    }

    pub fn is_achieved(&self) -> bool {
        self.current_amount >= self.target_amount
    }
}

/// Input model for creating a new goal. New goals start with no progress.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub target_amount: Decimal,
    pub target_date: NaiveDate,
    pub category: GoalCategory,
    #[serde(default)]
    pub monthly_contribution: Decimal,
}

impl NewGoal {
    pub fn into_goal(self, id: String) -> Goal {
        Goal {
            id,
            name: self.name,
            target_amount: self.target_amount,
            current_amount: Decimal::ZERO,
            target_date: self.target_date,
            category: self.category,
            monthly_contribution: self.monthly_contribution,
        }
    }
}
