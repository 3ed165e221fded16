//! Form validation.
//!
//! Every validator takes the raw strings a form submits and either returns
//! the typed input model or the full set of field errors. Nothing is applied
//! partially.

mod field_errors;
mod forms;
mod helpers;
mod rules;

pub use field_errors::FieldErrors;
pub use forms::{AddFundsForm, AnalysisRequest, ApiKeyForm, ExpenseForm, GoalForm, InvestmentForm};
pub use helpers::{
    is_future_date, is_valid_positive_number, sanitize_currency_input, validate_email,
    validate_indian_mobile,
};
pub use rules::{
    validate_add_funds, validate_analysis_request, validate_api_key, validate_expense,
    validate_goal, validate_investment,
};
