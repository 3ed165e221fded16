//! Portfolio domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Risk tier of an investment. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("Unknown risk level '{}'", s))
    }
}

/// Category of an investment. Known products serialize as their display
/// label ("Mutual Fund"); anything else is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvestmentType {
    MutualFund,
    FixedDeposit,
    Stocks,
    Bonds,
    Gold,
    RealEstate,
    Other(String),
}

impl InvestmentType {
    pub fn label(&self) -> &str {
        match self {
            InvestmentType::MutualFund => "Mutual Fund",
            InvestmentType::FixedDeposit => "Fixed Deposit",
            InvestmentType::Stocks => "Stocks",
            InvestmentType::Bonds => "Bonds",
            InvestmentType::Gold => "Gold",
            InvestmentType::RealEstate => "Real Estate",
            InvestmentType::Other(label) => label.as_str(),
        }
    }
}

impl From<String> for InvestmentType {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "mutual fund" | "mutual funds" => InvestmentType::MutualFund,
            "fixed deposit" | "fixed deposits" | "fd" => InvestmentType::FixedDeposit,
            "stocks" | "stock" | "equity" => InvestmentType::Stocks,
            "bonds" | "bond" => InvestmentType::Bonds,
            "gold" => InvestmentType::Gold,
            "real estate" => InvestmentType::RealEstate,
            _ => InvestmentType::Other(value.trim().to_string()),
        }
    }
}

impl From<&str> for InvestmentType {
    fn from(value: &str) -> Self {
        InvestmentType::from(value.to_string())
    }
}

impl From<InvestmentType> for String {
    fn from(value: InvestmentType) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Domain model representing a single holding in the portfolio.
///
/// `returns`, `return_percentage` and `allocation` are derived and are
/// rewritten for the whole collection whenever any member changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub name: String,
    pub invested: Decimal,
    pub current: Decimal,
    pub returns: Decimal,
    pub return_percentage: Decimal,
    /// Share of the total current portfolio value (0-100)
    pub allocation: Decimal,
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    pub risk: RiskLevel,
}

/// Input model for creating or fully replacing an investment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    pub name: String,
    pub invested: Decimal,
    pub current: Decimal,
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    pub risk: RiskLevel,
}

impl NewInvestment {
    /// Builds the stored entity. Derived fields start at zero and are filled
    /// in by the portfolio calculator.
    pub fn into_investment(self, id: String) -> Investment {
        Investment {
            id,
            name: self.name,
            invested: self.invested,
            current: self.current,
            returns: Decimal::ZERO,
            return_percentage: Decimal::ZERO,
            allocation: Decimal::ZERO,
            investment_type: self.investment_type,
            risk: self.risk,
        }
    }
}

/// Aggregate view of all investments. Never stored independently of the
/// investment list it was derived from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_value: Decimal,
    pub total_invested: Decimal,
    pub total_returns: Decimal,
    pub return_percentage: Decimal,
    /// Change in total value caused by the most recent market tick
    pub day_change: Decimal,
    pub day_change_percentage: Decimal,
}
