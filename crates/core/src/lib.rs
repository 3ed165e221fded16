//! FinanceGPT Core - Domain entities, calculators, the in-memory dashboard
//! store, and the validation rules guarding it.
//!
//! This crate holds no I/O beyond the optional key-value persistence layer.
//! The server crate owns the runtime (timers, HTTP) and drives the store
//! through [`store::FinancialDataServiceTrait`].

pub mod calculator;
pub mod constants;
pub mod errors;
pub mod events;
pub mod expenses;
pub mod goals;
pub mod market;
pub mod portfolio;
pub mod presentation;
pub mod storage;
pub mod store;
pub mod utils;
pub mod validation;

// Re-export common domain types
pub use expenses::*;
pub use goals::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
