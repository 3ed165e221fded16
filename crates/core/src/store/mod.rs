//! In-memory dashboard store and the shared service wrapping it.

mod financial_store;
mod seed;
mod store_model;
mod store_service;
mod store_traits;

pub use financial_store::FinancialStore;
pub use seed::{seed_expenses, seed_goals, seed_investments, simulated_statement_import};
pub use store_model::FinancialData;
pub use store_service::FinancialDataService;
pub use store_traits::FinancialDataServiceTrait;


#[cfg(test)]
mod store_service_tests;
