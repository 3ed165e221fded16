//! Raw form submissions. Every field arrives as the string the user typed.

use serde::{Deserialize, Serialize};

use crate::expenses::Expense;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpenseForm {
    pub category: String,
    pub amount: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalForm {
    pub name: String,
    pub target_amount: String,
    pub target_date: String,
    pub category: String,
    pub monthly_contribution: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvestmentForm {
    pub name: String,
    pub invested: String,
    pub current: String,
    #[serde(rename = "type")]
    pub investment_type: String,
    pub risk: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddFundsForm {
    pub amount: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiKeyForm {
    pub api_key: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisRequest {
    pub expenses: Vec<Expense>,
}
