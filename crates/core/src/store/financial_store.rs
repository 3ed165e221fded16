//! Owned dashboard state and every mutation on it.
//!
//! After any change to the investment list the derived fields of all
//! investments and the portfolio summary are recomputed together, so the
//! summary can never disagree with the list. Day-change fields only move on
//! a market tick.

use chrono::{NaiveDate, Utc};
use log::{debug, info, warn};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::seed::{seed_expenses, seed_goals, seed_investments, simulated_statement_import};
use super::FinancialData;
use crate::errors::{CalculatorError, Error, Result, ValidationError};
use crate::expenses::{Expense, NewExpense};
use crate::goals::{Goal, NewGoal};
use crate::market::{simulate_tick, PriceShockSource, TickOutcome};
use crate::portfolio::{
    recompute_investments, summarize, Investment, NewInvestment, PortfolioSummary,
};

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Recomputes the derived investment fields and the summary in place.
fn recompute_derived(data: &mut FinancialData) -> std::result::Result<(), CalculatorError> {
    recompute_investments(&mut data.investments)?;
    data.portfolio = summarize(&data.investments, Some(&data.portfolio))?;
    Ok(())
}

/// A mutation that returns an error may leave the store half-updated, so
/// shared callers apply mutations to a copy.
#[derive(Debug, Clone)]
pub struct FinancialStore {
    data: FinancialData,
}

impl FinancialStore {
    /// Store holding the demo data, with expenses dated `today`.
    pub fn seeded(today: NaiveDate) -> Self {
        let mut data = FinancialData {
            investments: seed_investments(),
            expenses: seed_expenses(today),
            goals: seed_goals(),
            portfolio: PortfolioSummary::default(),
            last_update: Utc::now(),
            is_connected: true,
        };
        if let Err(e) = recompute_derived(&mut data) {
            warn!("Demo portfolio could not be summarized: {}", e);
        }
        Self { data }
    }

    pub fn empty() -> Self {
        Self {
            data: FinancialData {
                investments: Vec::new(),
                expenses: Vec::new(),
                goals: Vec::new(),
                portfolio: PortfolioSummary::default(),
                last_update: Utc::now(),
                is_connected: true,
            },
        }
    }

    /// Adopts previously stored data. Derived fields are recomputed; the
    /// stored day change is kept.
    pub fn from_data(mut data: FinancialData) -> Result<Self> {
        recompute_derived(&mut data)?;
        Ok(Self { data })
    }

    pub fn data(&self) -> &FinancialData {
        &self.data
    }

    pub fn snapshot(&self) -> FinancialData {
        self.data.clone()
    }

    pub fn investments(&self) -> &[Investment] {
        &self.data.investments
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.data.expenses
    }

    pub fn goals(&self) -> &[Goal] {
        &self.data.goals
    }

    pub fn portfolio(&self) -> &PortfolioSummary {
        &self.data.portfolio
    }

    pub fn is_connected(&self) -> bool {
        self.data.is_connected
    }

    fn touch(&mut self) {
        self.data.last_update = Utc::now();
    }

    fn refresh_portfolio(&mut self) -> Result<()> {
        recompute_derived(&mut self.data)?;
        self.touch();
        Ok(())
    }

    fn investment_index(&self, id: &str) -> Result<usize> {
        self.data
            .investments
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| Error::not_found("Investment", id))
    }

    fn expense_index(&self, id: &str) -> Result<usize> {
        self.data
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| Error::not_found("Expense", id))
    }

    fn goal_index(&self, id: &str) -> Result<usize> {
        self.data
            .goals
            .iter()
            .position(|g| g.id == id)
            .ok_or_else(|| Error::not_found("Goal", id))
    }

    // ==================== Investments ====================

    pub fn add_investment(&mut self, new_investment: NewInvestment) -> Result<Investment> {
        let id = new_id();
        self.data
            .investments
            .push(new_investment.into_investment(id.clone()));
        self.refresh_portfolio()?;
        debug!("Added investment {}", id);
        let idx = self.data.investments.len() - 1;
        Ok(self.data.investments[idx].clone())
    }

    /// Replaces every input field of an existing investment.
    pub fn update_investment(&mut self, id: &str, update: NewInvestment) -> Result<Investment> {
        let idx = self.investment_index(id)?;
        self.data.investments[idx] = update.into_investment(id.to_string());
        self.refresh_portfolio()?;
        Ok(self.data.investments[idx].clone())
    }

    pub fn remove_investment(&mut self, id: &str) -> Result<Investment> {
        let idx = self.investment_index(id)?;
        let removed = self.data.investments.remove(idx);
        self.refresh_portfolio()?;
        Ok(removed)
    }

    // ==================== Expenses ====================

    pub fn add_expense(&mut self, new_expense: NewExpense) -> Expense {
        let expense = new_expense.into_expense(new_id());
        self.data.expenses.insert(0, expense.clone());
        self.touch();
        expense
    }

    pub fn remove_expense(&mut self, id: &str) -> Result<Expense> {
        let idx = self.expense_index(id)?;
        let removed = self.data.expenses.remove(idx);
        self.touch();
        Ok(removed)
    }

    /// Edits an expense by removing it and adding the replacement, which
    /// gets a fresh id and moves to the top of the list.
    pub fn replace_expense(&mut self, id: &str, replacement: NewExpense) -> Result<Expense> {
        self.remove_expense(id)?;
        Ok(self.add_expense(replacement))
    }

    /// Simulated bank-statement upload.
    pub fn import_expenses(&mut self, today: NaiveDate) -> Vec<Expense> {
        let imported: Vec<Expense> = simulated_statement_import(today)
            .into_iter()
            .map(|e| e.into_expense(new_id()))
            .collect();
        for expense in imported.iter().rev() {
            self.data.expenses.insert(0, expense.clone());
        }
        self.touch();
        info!("Imported {} expenses from statement", imported.len());
        imported
    }

    // ==================== Goals ====================

    pub fn add_goal(&mut self, new_goal: NewGoal) -> Goal {
        let goal = new_goal.into_goal(new_id());
        self.data.goals.push(goal.clone());
        self.touch();
        goal
    }

    /// Credits a positive amount to a goal, clamped at its target.
    pub fn add_funds_to_goal(&mut self, id: &str, amount: Decimal) -> Result<Goal> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Funding amount must be positive, got {}",
                amount
            ))
            .into());
        }
        let idx = self.goal_index(id)?;
        let credited = self.data.goals[idx].fund(amount);
        self.touch();
        debug!("Credited {} of {} to goal {}", credited, amount, id);
        Ok(self.data.goals[idx].clone())
    }

    pub fn remove_goal(&mut self, id: &str) -> Result<Goal> {
        let idx = self.goal_index(id)?;
        let removed = self.data.goals.remove(idx);
        self.touch();
        Ok(removed)
    }

    // ==================== Market ====================

    pub fn apply_market_tick(&mut self, source: &mut dyn PriceShockSource) -> Result<TickOutcome> {
        let (summary, outcome) =
            simulate_tick(&mut self.data.investments, &self.data.portfolio, source)?;
        self.data.portfolio = summary;
        self.touch();
        Ok(outcome)
    }

    /// Returns `true` when the flag actually changed.
    pub fn set_connected(&mut self, connected: bool) -> bool {
        let changed = self.data.is_connected != connected;
        self.data.is_connected = connected;
        if changed {
            self.touch();
        }
        changed
    }
}
