//! Request and response types of the advice client.

use serde::{Deserialize, Serialize};

use financegpt_core::store::FinancialData;
use financegpt_core::{Expense, Goal, PortfolioSummary};

/// Structured result of an expense analysis. Every field is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseAnalysis {
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub trends: String,
}

/// Optional user data embedded in the advice prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<PortfolioSummary>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub goals: Vec<Goal>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recent_expenses: Vec<Expense>,
}

impl AdviceContext {
    /// Number of most recent expenses included from a snapshot.
    pub const RECENT_EXPENSES: usize = 10;

    pub fn from_data(data: &FinancialData) -> Self {
        Self {
            portfolio: Some(data.portfolio.clone()),
            goals: data.goals.clone(),
            recent_expenses: data
                .expenses
                .iter()
                .take(Self::RECENT_EXPENSES)
                .cloned()
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.portfolio.is_none() && self.goals.is_empty() && self.recent_expenses.is_empty()
    }
}
