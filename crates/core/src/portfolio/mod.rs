//! Portfolio module - investment models, derived fields and aggregation.

pub mod portfolio_calculator;
mod portfolio_model;

pub use portfolio_calculator::{
    allocation_percentage, apply_day_change, recompute_investments, return_percentage, summarize,
};
pub use portfolio_model::*;

#[cfg(test)]
mod portfolio_calculator_tests;
