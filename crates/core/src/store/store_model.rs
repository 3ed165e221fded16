use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::expenses::Expense;
use crate::goals::Goal;
use crate::portfolio::{Investment, PortfolioSummary};

/// Everything the dashboard shows, as one serializable value.
///
/// Expenses are ordered newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialData {
    pub investments: Vec<Investment>,
    pub expenses: Vec<Expense>,
    pub goals: Vec<Goal>,
    pub portfolio: PortfolioSummary,
    pub last_update: DateTime<Utc>,
    #[serde(default = "default_connected")]
    pub is_connected: bool,
}

fn default_connected() -> bool {
    true
}
