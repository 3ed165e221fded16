#[cfg(test)]
mod tests {
    use crate::errors::CalculatorError;
    use crate::portfolio::{
        allocation_percentage, apply_day_change, recompute_investments, return_percentage,
        summarize, Investment, InvestmentType, NewInvestment, PortfolioSummary, RiskLevel,
    };
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn investment(id: &str, invested: Decimal, current: Decimal) -> Investment {
        NewInvestment {
            name: format!("Investment {}", id),
            invested,
            current,
            investment_type: InvestmentType::MutualFund,
            risk: RiskLevel::Medium,
        }
        .into_investment(id.to_string())
    }

    fn seed_like() -> Vec<Investment> {
        vec![
            investment("inv1", dec!(200000), dec!(235000)),
            investment("inv2", dec!(150000), dec!(162000)),
            investment("inv3", dec!(70000), dec!(88000)),
        ]
    }

    // ==================== Per-entity fields ====================

    #[test]
    fn test_return_percentage_rounds_to_two_places() {
        assert_eq!(return_percentage(dec!(70000), dec!(88000)).unwrap(), dec!(25.71));
        assert_eq!(return_percentage(dec!(200000), dec!(235000)).unwrap(), dec!(17.5));
        assert_eq!(return_percentage(dec!(100), dec!(90)).unwrap(), dec!(-10));
    }

    #[test]
    fn test_return_percentage_zero_invested_is_zero() {
        assert_eq!(return_percentage(Decimal::ZERO, dec!(500)).unwrap(), Decimal::ZERO);
        assert_eq!(return_percentage(Decimal::ZERO, Decimal::ZERO).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_allocation_percentage_zero_total_is_zero() {
        assert_eq!(allocation_percentage(dec!(10), Decimal::ZERO).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_recompute_investments_matches_seed_figures() {
        let mut investments = seed_like();
        recompute_investments(&mut investments).unwrap();

        assert_eq!(investments[0].returns, dec!(35000));
        assert_eq!(investments[0].allocation, dec!(48.5));
        assert_eq!(investments[1].allocation, dec!(33.4));
        assert_eq!(investments[2].allocation, dec!(18.1));
        assert_eq!(investments[2].return_percentage, dec!(25.71));

        let total: Decimal = investments.iter().map(|i| i.allocation).sum();
        assert_eq!(total, dec!(100));
    }

    #[test]
    fn test_recompute_investments_all_zero_current() {
        let mut investments = vec![
            investment("a", dec!(100), Decimal::ZERO),
            investment("b", dec!(100), Decimal::ZERO),
        ];
        recompute_investments(&mut investments).unwrap();
        assert!(investments.iter().all(|i| i.allocation.is_zero()));
        assert_eq!(investments[0].return_percentage, dec!(-100));
    }

    // ==================== Aggregation ====================

    #[test]
    fn test_summarize_totals() {
        let investments = seed_like();
        let summary = summarize(&investments, None).unwrap();

        assert_eq!(summary.total_value, dec!(485000));
        assert_eq!(summary.total_invested, dec!(420000));
        assert_eq!(summary.total_returns, dec!(65000));
        assert_eq!(summary.return_percentage, dec!(15.48));
        assert_eq!(summary.day_change, Decimal::ZERO);
    }

    #[test]
    fn test_summarize_empty_portfolio() {
        let summary = summarize(&[], None).unwrap();
        assert_eq!(summary, PortfolioSummary::default());
    }

    #[test]
    fn test_summarize_keeps_previous_day_change() {
        let previous = PortfolioSummary {
            day_change: dec!(1250),
            day_change_percentage: dec!(0.26),
            ..Default::default()
        };
        let summary = summarize(&seed_like(), Some(&previous)).unwrap();
        assert_eq!(summary.day_change, dec!(1250));
        assert_eq!(summary.day_change_percentage, dec!(0.26));
    }

    #[test]
    fn test_apply_day_change() {
        let mut summary = summarize(&seed_like(), None).unwrap();
        apply_day_change(&mut summary, dec!(480000)).unwrap();
        assert_eq!(summary.day_change, dec!(5000));
        assert_eq!(summary.day_change_percentage, dec!(1.04));
    }

    #[test]
    fn test_apply_day_change_from_zero_total() {
        let mut summary = summarize(&seed_like(), None).unwrap();
        apply_day_change(&mut summary, Decimal::ZERO).unwrap();
        assert_eq!(summary.day_change, dec!(485000));
        assert_eq!(summary.day_change_percentage, Decimal::ZERO);
    }

    #[test]
    fn test_overflowing_totals_are_errors() {
        let mut investments = vec![
            investment("a", Decimal::MAX, Decimal::MAX),
            investment("b", Decimal::MAX, Decimal::MAX),
        ];
        assert!(matches!(
            recompute_investments(&mut investments),
            Err(CalculatorError::Overflow(_))
        ));
        assert!(matches!(
            summarize(&investments, None),
            Err(CalculatorError::Overflow(_))
        ));
    }

    #[test]
    fn test_overflowing_return_percentage_is_an_error() {
        let tiny = Decimal::new(1, 28);
        assert!(matches!(
            return_percentage(tiny, dec!(1000000000000000)),
            Err(CalculatorError::Overflow(_))
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Allocations sum to 100 within the rounding slack of one decimal
        /// place per position.
        #[test]
        fn prop_allocations_sum_to_hundred(
            values in proptest::collection::vec((0u64..5_000_000, 1u64..5_000_000), 1..12)
        ) {
            let mut investments: Vec<Investment> = values
                .iter()
                .enumerate()
                .map(|(idx, (invested, current))| {
                    investment(&idx.to_string(), Decimal::from(*invested), Decimal::from(*current))
                })
                .collect();
            recompute_investments(&mut investments).unwrap();

            let total: Decimal = investments.iter().map(|i| i.allocation).sum();
            let slack = dec!(0.05) * Decimal::from(investments.len() as u64);
            prop_assert!((total - dec!(100)).abs() <= slack, "sum was {}", total);
        }

        #[test]
        fn prop_summary_never_drifts_from_investments(
            values in proptest::collection::vec((0u64..5_000_000, 0u64..5_000_000), 0..12)
        ) {
            let investments: Vec<Investment> = values
                .iter()
                .enumerate()
                .map(|(idx, (invested, current))| {
                    investment(&idx.to_string(), Decimal::from(*invested), Decimal::from(*current))
                })
                .collect();
            let summary = summarize(&investments, None).unwrap();

            let invested: Decimal = investments.iter().map(|i| i.invested).sum();
            let current: Decimal = investments.iter().map(|i| i.current).sum();
            prop_assert_eq!(summary.total_invested, invested);
            prop_assert_eq!(summary.total_value, current);
            prop_assert_eq!(summary.total_returns, current - invested);
        }
    }
}
