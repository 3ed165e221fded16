//! Future value of a fixed monthly contribution (systematic investment plan).
//!
//! Contributions are made at the start of each month and compound monthly:
//!
//! ```text
//! i  = annual_rate / 100 / 12
//! n  = years * 12
//! FV = m * ((1 + i)^n - 1) / i * (1 + i)
//! ```
//!
//! A zero rate degenerates to the plain sum `m * n`.

use serde::{Deserialize, Serialize};

use crate::errors::CalculatorError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipInput {
    pub monthly_investment: f64,
    /// Expected annual return, in percent
    pub annual_rate_pct: f64,
    pub years: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipProjection {
    pub future_value: f64,
    pub total_invested: f64,
    pub returns: f64,
}

impl SipProjection {
    /// Whole currency units, for display.
    pub fn rounded(&self) -> SipProjection {
        SipProjection {
            future_value: self.future_value.round(),
            total_invested: self.total_invested.round(),
            returns: self.returns.round(),
        }
    }
}

pub fn calculate_sip(input: &SipInput) -> SipProjection {
    let m = input.monthly_investment;
    let i = input.annual_rate_pct / 100.0 / 12.0;
    let n = input.years * 12.0;

    let total_invested = m * n;
    let future_value = if i == 0.0 {
        total_invested
    } else {
        m * (((1.0 + i).powf(n) - 1.0) / i) * (1.0 + i)
    };

    SipProjection {
        future_value,
        total_invested,
        returns: future_value - total_invested,
    }
}

/// Like [`calculate_sip`] but rejects negative or non-finite inputs.
pub fn try_calculate_sip(input: &SipInput) -> Result<SipProjection, CalculatorError> {
    let fields = [
        ("monthlyInvestment", input.monthly_investment),
        ("annualRatePct", input.annual_rate_pct),
        ("years", input.years),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(CalculatorError::InvalidInput(format!(
                "{} must be a finite number",
                name
            )));
        }
        if value < 0.0 {
            return Err(CalculatorError::InvalidInput(format!(
                "{} must not be negative",
                name
            )));
        }
    }

    let projection = calculate_sip(input);
    if !projection.future_value.is_finite() {
        return Err(CalculatorError::InvalidInput(
            "Projection overflows; reduce the rate or duration".to_string(),
        ));
    }
    Ok(projection)
}
