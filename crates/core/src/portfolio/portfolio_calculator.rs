//! Derived investment fields and portfolio aggregation.
//!
//! A zero denominator yields a zero percentage. Every other operation is
//! checked, and an overflow surfaces as [`CalculatorError::Overflow`].

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{ALLOCATION_PERCENT_PRECISION, RETURN_PERCENT_PRECISION};
use crate::errors::CalculatorError;
use crate::portfolio::{Investment, PortfolioSummary};

/// `part / whole × 100`, or zero when `whole` is zero.
fn percent_of(part: Decimal, whole: Decimal, dp: u32) -> Result<Decimal, CalculatorError> {
    if whole.is_zero() {
        return Ok(Decimal::ZERO);
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .map(|pct| pct.round_dp(dp))
        .ok_or(CalculatorError::Overflow("percentage"))
}

/// Sum of `values`, failing instead of overflowing.
pub(crate) fn checked_sum(
    values: impl IntoIterator<Item = Decimal>,
    what: &'static str,
) -> Result<Decimal, CalculatorError> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(value))
        .ok_or(CalculatorError::Overflow(what))
}

fn checked_diff(a: Decimal, b: Decimal, what: &'static str) -> Result<Decimal, CalculatorError> {
    a.checked_sub(b).ok_or(CalculatorError::Overflow(what))
}

/// Return percentage of a single position, rounded to two decimals.
/// A position with nothing invested reports 0%.
pub fn return_percentage(invested: Decimal, current: Decimal) -> Result<Decimal, CalculatorError> {
    let returns = checked_diff(current, invested, "returns")?;
    percent_of(returns, invested, RETURN_PERCENT_PRECISION)
}

/// Share of `current` in `total_current`, rounded to one decimal.
pub fn allocation_percentage(
    current: Decimal,
    total_current: Decimal,
) -> Result<Decimal, CalculatorError> {
    percent_of(current, total_current, ALLOCATION_PERCENT_PRECISION)
}

/// Re-derives returns, return percentage and allocation for every
/// investment so the percentages stay consistent as a set.
///
/// On error some investments may already carry new values; callers discard
/// the list.
pub fn recompute_investments(investments: &mut [Investment]) -> Result<(), CalculatorError> {
    let total_current = checked_sum(investments.iter().map(|i| i.current), "total value")?;

    for investment in investments.iter_mut() {
        investment.returns = checked_diff(investment.current, investment.invested, "returns")?;
        investment.return_percentage =
            return_percentage(investment.invested, investment.current)?;
        investment.allocation = allocation_percentage(investment.current, total_current)?;
    }

    debug!(
        "Recomputed derived fields for {} investments (total current {})",
        investments.len(),
        total_current
    );
    Ok(())
}

/// Aggregates the investment list into a summary.
///
/// Day-change fields are only produced by a market tick, so they are carried
/// over from `previous` unchanged (or zero when there is no previous summary).
pub fn summarize(
    investments: &[Investment],
    previous: Option<&PortfolioSummary>,
) -> Result<PortfolioSummary, CalculatorError> {
    let total_invested = checked_sum(investments.iter().map(|i| i.invested), "total invested")?;
    let total_value = checked_sum(investments.iter().map(|i| i.current), "total value")?;
    let total_returns = checked_diff(total_value, total_invested, "total returns")?;

    let (day_change, day_change_percentage) = previous
        .map(|p| (p.day_change, p.day_change_percentage))
        .unwrap_or((Decimal::ZERO, Decimal::ZERO));

    Ok(PortfolioSummary {
        total_value,
        total_invested,
        total_returns,
        return_percentage: percent_of(total_returns, total_invested, RETURN_PERCENT_PRECISION)?,
        day_change,
        day_change_percentage,
    })
}

/// Records the delta between the pre-tick total and the summary's current
/// total value.
pub fn apply_day_change(
    summary: &mut PortfolioSummary,
    previous_total: Decimal,
) -> Result<(), CalculatorError> {
    summary.day_change = checked_diff(summary.total_value, previous_total, "day change")?;
    summary.day_change_percentage =
        percent_of(summary.day_change, previous_total, RETURN_PERCENT_PRECISION)?;
    Ok(())
}
