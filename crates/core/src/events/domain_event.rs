//! Domain event types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Facts about changes to the financial data, emitted after a mutation has
/// been applied to the store. Adapters decide what to do with them (push to
/// clients, persist, log).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// Investments were created, replaced, or removed. Derived fields and the
    /// portfolio summary have already been recomputed.
    InvestmentsChanged { investment_ids: Vec<String> },

    /// Expenses were added, removed, or imported.
    ExpensesChanged { expense_ids: Vec<String> },

    /// Goals were created, funded, or removed.
    GoalsChanged { goal_ids: Vec<String> },

    /// A simulated market tick moved current values.
    MarketTicked {
        total_value: Decimal,
        day_change: Decimal,
    },

    /// The simulated connectivity flag flipped.
    ConnectivityChanged { connected: bool },
}

impl DomainEvent {
    pub fn investments_changed(investment_ids: Vec<String>) -> Self {
        Self::InvestmentsChanged { investment_ids }
    }

    pub fn expenses_changed(expense_ids: Vec<String>) -> Self {
        Self::ExpensesChanged { expense_ids }
    }

    pub fn goals_changed(goal_ids: Vec<String>) -> Self {
        Self::GoalsChanged { goal_ids }
    }

    pub fn market_ticked(total_value: Decimal, day_change: Decimal) -> Self {
        Self::MarketTicked {
            total_value,
            day_change,
        }
    }

    pub fn connectivity_changed(connected: bool) -> Self {
        Self::ConnectivityChanged { connected }
    }

    /// Whether the event changes data that should be written to storage.
    /// Connectivity is transient and never persisted on its own.
    pub fn is_persistent(&self) -> bool {
        !matches!(self, DomainEvent::ConnectivityChanged { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_domain_event_serialization() {
        let event = DomainEvent::investments_changed(vec!["inv1".to_string()]);

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("investments_changed"));

        let deserialized: DomainEvent = serde_json::from_str(&json).unwrap();
        match deserialized {
            DomainEvent::InvestmentsChanged { investment_ids } => {
                assert_eq!(investment_ids, vec!["inv1"]);
            }
            _ => panic!("Expected InvestmentsChanged"),
        }
    }

    #[test]
    fn test_market_ticked_serialization() {
        let event = DomainEvent::market_ticked(dec!(485000), dec!(-1200));
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("market_ticked"));

        let deserialized: DomainEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, event);
    }

    #[test]
    fn test_connectivity_is_not_persistent() {
        assert!(!DomainEvent::connectivity_changed(false).is_persistent());
        assert!(DomainEvent::goals_changed(vec![]).is_persistent());
    }
}
