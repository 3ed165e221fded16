//! Per-form validation rules.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::helpers::{parse_instant, parse_number};
use super::{
    AddFundsForm, AnalysisRequest, ApiKeyForm, ExpenseForm, FieldErrors, GoalForm, InvestmentForm,
};
use crate::constants::MAX_FORM_AMOUNT;
use crate::expenses::{ExpenseCategory, ExpenseSource, NewExpense};
use crate::goals::{GoalCategory, NewGoal};
use crate::portfolio::{InvestmentType, NewInvestment, RiskLevel};

pub(crate) const REQUIRED: &str = "This field is required";
pub(crate) const INVALID_POSITIVE: &str = "Must be a valid positive number";
pub(crate) const INVALID_NON_NEGATIVE: &str = "Must be a valid non-negative number";
pub(crate) const AMOUNT_TOO_LARGE: &str = "Amount must not exceed 1,000,000,000,000,000";
pub(crate) const DATE_REQUIRED: &str = "Date is required";
pub(crate) const INVALID_DATE: &str = "Invalid date";
pub(crate) const FUTURE_DATE: &str = "Date must be in the future";
pub(crate) const DESCRIPTION_TOO_LONG: &str = "Description must be less than 200 characters";
pub(crate) const GOAL_NAME_TOO_LONG: &str = "Goal name must be less than 50 characters";
pub(crate) const INVESTMENT_NAME_TOO_LONG: &str = "Investment name must be less than 50 characters";
pub(crate) const INVALID_RISK: &str = "Risk level must be Low, Medium, or High";
pub(crate) const UNKNOWN_CATEGORY: &str = "Unknown category";
pub(crate) const API_KEY_REQUIRED: &str = "API key is required";
pub(crate) const INVALID_API_KEY: &str = "Please enter a valid Gemini API key";
pub(crate) const NO_EXPENSES: &str = "At least one expense is required for analysis";

const MAX_DESCRIPTION_CHARS: usize = 200;
const MAX_NAME_CHARS: usize = 50;

/// Converts a form number to a decimal, keeping the exact digits typed
/// when possible.
fn to_decimal(raw: &str, value: f64) -> Option<Decimal> {
    Decimal::from_str(raw.trim())
        .ok()
        .or_else(|| Decimal::from_f64(value))
}

/// Rejects amounts above [`MAX_FORM_AMOUNT`].
fn within_limit(errors: &mut FieldErrors, field: &str, amount: Decimal) -> Option<Decimal> {
    if amount > Decimal::from(MAX_FORM_AMOUNT) {
        errors.add(field, AMOUNT_TOO_LARGE);
        return None;
    }
    Some(amount)
}

fn positive_amount(errors: &mut FieldErrors, field: &str, raw: &str) -> Option<Decimal> {
    let parsed = parse_number(raw)
        .filter(|n| *n > 0.0)
        .and_then(|n| to_decimal(raw, n));
    match parsed {
        Some(amount) => within_limit(errors, field, amount),
        None => {
            errors.add(field, INVALID_POSITIVE);
            None
        }
    }
}

fn required_text(
    errors: &mut FieldErrors,
    field: &str,
    raw: &str,
    max_chars: usize,
    too_long: &str,
) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }
    if value.chars().count() > max_chars {
        errors.add(field, too_long);
        return None;
    }
    Some(value.to_string())
}

fn category<T: FromStr>(errors: &mut FieldErrors, raw: &str) -> Option<T> {
    if raw.trim().is_empty() {
        errors.add("category", REQUIRED);
        return None;
    }
    let parsed = raw.parse::<T>().ok();
    if parsed.is_none() {
        errors.add("category", UNKNOWN_CATEGORY);
    }
    parsed
}

pub fn validate_expense(form: &ExpenseForm) -> Result<NewExpense, FieldErrors> {
    let mut errors = FieldErrors::new();

    let category = category::<ExpenseCategory>(&mut errors, &form.category);
    let amount = positive_amount(&mut errors, "amount", &form.amount);

    let date = if form.date.trim().is_empty() {
        errors.add("date", DATE_REQUIRED);
        None
    } else {
        let parsed = NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d").ok();
        if parsed.is_none() {
            errors.add("date", INVALID_DATE);
        }
        parsed
    };

    let description = required_text(
        &mut errors,
        "description",
        &form.description,
        MAX_DESCRIPTION_CHARS,
        DESCRIPTION_TOO_LONG,
    );

    match (category, amount, date, description) {
        (Some(category), Some(amount), Some(date), Some(description)) if errors.is_empty() => {
            Ok(NewExpense {
                category,
                amount,
                date,
                description,
                source: ExpenseSource::Manual,
            })
        }
        _ => Err(errors),
    }
}

/// Validates a goal submission. The target date must lie strictly after
/// `now`; a bare date counts as midnight UTC of that day.
pub fn validate_goal(form: &GoalForm, now: DateTime<Utc>) -> Result<NewGoal, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = required_text(
        &mut errors,
        "name",
        &form.name,
        MAX_NAME_CHARS,
        GOAL_NAME_TOO_LONG,
    );
    let target_amount = positive_amount(&mut errors, "targetAmount", &form.target_amount);

    let target_date = match parse_instant(&form.target_date) {
        Some(instant) if instant > now => Some(instant.date_naive()),
        _ => {
            errors.add("targetDate", FUTURE_DATE);
            None
        }
    };

    let category = category::<GoalCategory>(&mut errors, &form.category);

    let monthly_contribution = match form.monthly_contribution.as_deref().map(str::trim) {
        None | Some("") => Some(Decimal::ZERO),
        Some(raw) => {
            let parsed = parse_number(raw)
                .filter(|n| *n >= 0.0)
                .and_then(|n| to_decimal(raw, n));
            match parsed {
                Some(amount) => within_limit(&mut errors, "monthlyContribution", amount),
                None => {
                    errors.add("monthlyContribution", INVALID_NON_NEGATIVE);
                    None
                }
            }
        }
    };

    match (name, target_amount, target_date, category, monthly_contribution) {
        (Some(name), Some(target_amount), Some(target_date), Some(category), Some(monthly))
            if errors.is_empty() =>
        {
            Ok(NewGoal {
                name,
                target_amount,
                target_date,
                category,
                monthly_contribution: monthly,
            })
        }
        _ => Err(errors),
    }
}

pub fn validate_investment(form: &InvestmentForm) -> Result<NewInvestment, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = required_text(
        &mut errors,
        "name",
        &form.name,
        MAX_NAME_CHARS,
        INVESTMENT_NAME_TOO_LONG,
    );
    let invested = positive_amount(&mut errors, "invested", &form.invested);
    let current = positive_amount(&mut errors, "current", &form.current);

    let investment_type = if form.investment_type.trim().is_empty() {
        errors.add("type", REQUIRED);
        None
    } else {
        Some(InvestmentType::from(form.investment_type.as_str()))
    };

    let risk = form.risk.trim().parse::<RiskLevel>().ok();
    if risk.is_none() {
        errors.add("risk", INVALID_RISK);
    }

    match (name, invested, current, investment_type, risk) {
        (Some(name), Some(invested), Some(current), Some(investment_type), Some(risk))
            if errors.is_empty() =>
        {
            Ok(NewInvestment {
                name,
                invested,
                current,
                investment_type,
                risk,
            })
        }
        _ => Err(errors),
    }
}

pub fn validate_add_funds(form: &AddFundsForm) -> Result<Decimal, FieldErrors> {
    let mut errors = FieldErrors::new();
    match positive_amount(&mut errors, "amount", &form.amount) {
        Some(amount) => Ok(amount),
        None => Err(errors),
    }
}

/// Gemini keys start with `AIza` and are longer than 30 characters.
pub fn validate_api_key(form: &ApiKeyForm) -> Result<String, FieldErrors> {
    let mut errors = FieldErrors::new();
    let key = form.api_key.trim();
    if key.is_empty() {
        errors.add("apiKey", API_KEY_REQUIRED);
    } else if !(key.starts_with("AIza") && key.chars().count() > 30) {
        errors.add("apiKey", INVALID_API_KEY);
    }
    errors.finish(|| key.to_string())
}

pub fn validate_analysis_request(request: &AnalysisRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if request.expenses.is_empty() {
        errors.add("expenses", NO_EXPENSES);
    }
    errors.finish(|| ())
}
