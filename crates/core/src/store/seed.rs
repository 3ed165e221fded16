//! Demo data the dashboard starts with.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::expenses::{Expense, ExpenseCategory, ExpenseSource, NewExpense};
use crate::goals::{Goal, GoalCategory};
use crate::portfolio::{Investment, InvestmentType, NewInvestment, RiskLevel};

fn investment(
    id: &str,
    name: &str,
    invested: Decimal,
    current: Decimal,
    investment_type: InvestmentType,
    risk: RiskLevel,
) -> Investment {
    NewInvestment {
        name: name.to_string(),
        invested,
        current,
        investment_type,
        risk,
    }
    .into_investment(id.to_string())
}

/// Three holdings. Derived fields are left for the caller to compute.
pub fn seed_investments() -> Vec<Investment> {
    vec![
        investment(
            "inv1",
            "Equity Mutual Funds",
            dec!(200000),
            dec!(235000),
            InvestmentType::MutualFund,
            RiskLevel::High,
        ),
        investment(
            "inv2",
            "Fixed Deposits",
            dec!(150000),
            dec!(162000),
            InvestmentType::FixedDeposit,
            RiskLevel::Low,
        ),
        investment(
            "inv3",
            "Direct Stocks",
            dec!(70000),
            dec!(88000),
            InvestmentType::Stocks,
            RiskLevel::High,
        ),
    ]
}

pub fn seed_expenses(today: NaiveDate) -> Vec<Expense> {
    let expense = |id: &str, category: ExpenseCategory, amount: Decimal, description: &str| Expense {
        id: id.to_string(),
        category,
        amount,
        date: today,
        description: description.to_string(),
        source: ExpenseSource::Manual,
    };
    vec![
        expense(
            "exp1",
            ExpenseCategory::FoodAndDining,
            dec!(12500),
            "Groceries and dining out",
        ),
        expense(
            "exp2",
            ExpenseCategory::Transportation,
            dec!(8500),
            "Fuel and public transport",
        ),
        expense(
            "exp3",
            ExpenseCategory::Entertainment,
            dec!(4500),
            "Movies and subscriptions",
        ),
    ]
}

pub fn seed_goals() -> Vec<Goal> {
    vec![
        Goal {
            id: "goal1".to_string(),
            name: "Emergency Fund".to_string(),
            target_amount: dec!(600000),
            current_amount: dec!(420000),
            target_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default(),
            category: GoalCategory::Emergency,
            monthly_contribution: dec!(25000),
        },
        Goal {
            id: "goal2".to_string(),
            name: "Home Down Payment".to_string(),
            target_amount: dec!(2000000),
            current_amount: dec!(850000),
            target_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap_or_default(),
            category: GoalCategory::MajorPurchase,
            monthly_contribution: dec!(40000),
        },
    ]
}

/// Entries produced by the simulated bank-statement import.
pub fn simulated_statement_import(today: NaiveDate) -> Vec<NewExpense> {
    vec![
        NewExpense {
            category: ExpenseCategory::Utilities,
            amount: dec!(3200),
            date: today,
            description: "Electricity bill - AI categorized".to_string(),
            source: ExpenseSource::Uploaded,
        },
        NewExpense {
            category: ExpenseCategory::FoodAndDining,
            amount: dec!(1800),
            date: today,
            description: "Grocery shopping - AI categorized".to_string(),
            source: ExpenseSource::Uploaded,
        },
    ]
}
