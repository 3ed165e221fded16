use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::FinancialData;
use crate::errors::Result;
use crate::expenses::{Expense, NewExpense};
use crate::goals::{Goal, NewGoal};
use crate::market::{ConnectivityMonitor, PriceShockSource, TickOutcome};
use crate::portfolio::{Investment, NewInvestment, PortfolioSummary};
use crate::storage::StorageInfo;

/// Trait for the shared dashboard data service
#[async_trait]
pub trait FinancialDataServiceTrait: Send + Sync {
    fn get_data(&self) -> Result<FinancialData>;
    fn get_portfolio(&self) -> Result<PortfolioSummary>;
    fn get_investments(&self) -> Result<Vec<Investment>>;
    fn get_expenses(&self) -> Result<Vec<Expense>>;
    fn get_goals(&self) -> Result<Vec<Goal>>;

    async fn add_investment(&self, new_investment: NewInvestment) -> Result<Investment>;
    async fn update_investment(&self, id: &str, update: NewInvestment) -> Result<Investment>;
    async fn remove_investment(&self, id: &str) -> Result<Investment>;

    async fn add_expense(&self, new_expense: NewExpense) -> Result<Expense>;
    async fn replace_expense(&self, id: &str, replacement: NewExpense) -> Result<Expense>;
    async fn remove_expense(&self, id: &str) -> Result<Expense>;
    async fn import_expenses(&self, today: NaiveDate) -> Result<Vec<Expense>>;

    async fn add_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn add_funds_to_goal(&self, id: &str, amount: Decimal) -> Result<Goal>;
    async fn remove_goal(&self, id: &str) -> Result<Goal>;

    /// Runs one market tick. Ticks are serialized by the store lock.
    fn simulate_market_tick(&self, source: &mut dyn PriceShockSource) -> Result<TickOutcome>;

    /// Polls connectivity and stores the result. Returns the new state.
    fn poll_connectivity(
        &self,
        monitor: &ConnectivityMonitor,
        source: &mut dyn PriceShockSource,
    ) -> Result<bool>;

    /// `None` when the service runs without persistence.
    fn storage_info(&self) -> Option<StorageInfo>;
}
