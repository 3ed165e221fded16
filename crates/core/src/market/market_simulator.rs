//! Random-walk tick over current investment values.

use log::debug;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::PriceShockSource;
use crate::constants::{DEFAULT_DISCONNECT_PROBABILITY, MAX_TICK_CHANGE};
use crate::errors::CalculatorError;
use crate::portfolio::portfolio_calculator::checked_sum;
use crate::portfolio::{apply_day_change, recompute_investments, summarize};
use crate::portfolio::{Investment, PortfolioSummary};

/// Result of one market tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickOutcome {
    pub previous_total: Decimal,
    pub new_total: Decimal,
    pub day_change: Decimal,
    pub day_change_percentage: Decimal,
}

fn clamp_change(change: f64) -> Decimal {
    let change = if change.is_finite() {
        change.clamp(-MAX_TICK_CHANGE, MAX_TICK_CHANGE)
    } else {
        0.0
    };
    Decimal::from_f64(change).unwrap_or(Decimal::ZERO)
}

/// Moves every investment's current value by an independent shock, then
/// recomputes derived fields and the summary, including the day change
/// measured from the pre-tick total.
///
/// New values are rounded to whole currency units and floored at zero.
/// On error the list may be partly moved and should be discarded.
pub fn simulate_tick(
    investments: &mut [Investment],
    previous: &PortfolioSummary,
    source: &mut dyn PriceShockSource,
) -> Result<(PortfolioSummary, TickOutcome), CalculatorError> {
    let previous_total = checked_sum(investments.iter().map(|i| i.current), "total value")?;

    for investment in investments.iter_mut() {
        let factor = Decimal::ONE + clamp_change(source.next_change());
        let moved = investment
            .current
            .checked_mul(factor)
            .ok_or(CalculatorError::Overflow("market tick"))?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        investment.current = moved.max(Decimal::ZERO);
    }

    recompute_investments(investments)?;
    let mut summary = summarize(investments, Some(previous))?;
    apply_day_change(&mut summary, previous_total)?;

    debug!(
        "Market tick: {} -> {} ({}%)",
        previous_total, summary.total_value, summary.day_change_percentage
    );

    let outcome = TickOutcome {
        previous_total,
        new_total: summary.total_value,
        day_change: summary.day_change,
        day_change_percentage: summary.day_change_percentage,
    };
    Ok((summary, outcome))
}

/// Decides the simulated connectivity flag on each poll.
#[derive(Debug, Clone, Copy)]
pub struct ConnectivityMonitor {
    disconnect_probability: f64,
}

impl Default for ConnectivityMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_DISCONNECT_PROBABILITY)
    }
}

impl ConnectivityMonitor {
    pub fn new(disconnect_probability: f64) -> Self {
        Self {
            disconnect_probability,
        }
    }

    pub fn disconnect_probability(&self) -> f64 {
        self.disconnect_probability
    }

    /// Returns the new connectivity state.
    pub fn poll(&self, source: &mut dyn PriceShockSource) -> bool {
        !source.next_disconnect(self.disconnect_probability)
    }
}
