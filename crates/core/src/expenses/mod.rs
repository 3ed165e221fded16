//! Expenses module - domain models for tracked spending.

mod expenses_model;

pub use expenses_model::{Expense, ExpenseCategory, ExpenseSource, NewExpense};
