//! Property-based integration tests for the dashboard store.
//!
//! Random sequences of mutations and market ticks are applied to a seeded
//! store; after every step the portfolio summary must agree with the
//! investment list and goals must stay within their targets.

use chrono::NaiveDate;
use financegpt_core::market::RandomShockSource;
use financegpt_core::store::FinancialStore;
use financegpt_core::{ExpenseCategory, ExpenseSource, InvestmentType, NewExpense, NewInvestment, RiskLevel};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =============================================================================
// Generators
// =============================================================================

#[derive(Debug, Clone)]
enum Op {
    AddInvestment { invested: u32, current: u32 },
    RemoveFirstInvestment,
    AddExpense { amount: u32 },
    ImportExpenses,
    FundGoal { goal: usize, amount: u32 },
    Tick,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u32..1_000_000, 0u32..1_000_000)
            .prop_map(|(invested, current)| Op::AddInvestment { invested, current }),
        Just(Op::RemoveFirstInvestment),
        (1u32..50_000).prop_map(|amount| Op::AddExpense { amount }),
        Just(Op::ImportExpenses),
        (0usize..2, 1u32..3_000_000).prop_map(|(goal, amount)| Op::FundGoal { goal, amount }),
        Just(Op::Tick),
    ]
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_store_invariants_hold(ops in proptest::collection::vec(arb_op(), 1..40), seed in any::<u64>()) {
        let mut store = FinancialStore::seeded(today());
        let mut source = RandomShockSource::seeded(seed);

        for op in ops {
            let expenses_before = store.expenses().len();
            match op {
                Op::AddInvestment { invested, current } => {
                    store.add_investment(NewInvestment {
                        name: "Generated".to_string(),
                        invested: Decimal::from(invested),
                        current: Decimal::from(current),
                        investment_type: InvestmentType::Bonds,
                        risk: RiskLevel::Medium,
                    })
                    .unwrap();
                }
                Op::RemoveFirstInvestment => {
                    if let Some(id) = store.investments().first().map(|i| i.id.clone()) {
                        store.remove_investment(&id).unwrap();
                    }
                }
                Op::AddExpense { amount } => {
                    store.add_expense(NewExpense {
                        category: ExpenseCategory::Shopping,
                        amount: Decimal::from(amount),
                        date: today(),
                        description: "Generated".to_string(),
                        source: ExpenseSource::Manual,
                    });
                    prop_assert_eq!(store.expenses().len(), expenses_before + 1);
                }
                Op::ImportExpenses => {
                    store.import_expenses(today());
                    prop_assert_eq!(store.expenses().len(), expenses_before + 2);
                }
                Op::FundGoal { goal, amount } => {
                    let id = store.goals()[goal].id.clone();
                    let before = store.goals()[goal].current_amount;
                    let funded = store.add_funds_to_goal(&id, Decimal::from(amount)).unwrap();
                    prop_assert!(funded.current_amount >= before);
                }
                Op::Tick => {
                    let before: Vec<Decimal> = store.investments().iter().map(|i| i.current).collect();
                    store.apply_market_tick(&mut source).unwrap();
                    for (old, inv) in before.iter().zip(store.investments()) {
                        prop_assert!(inv.current >= Decimal::ZERO);
                        prop_assert!((inv.current - *old).abs() <= *old * dec!(0.005) + dec!(1));
                    }
                }
            }

            let investments = store.investments();
            let total: Decimal = investments.iter().map(|i| i.current).sum();
            let invested: Decimal = investments.iter().map(|i| i.invested).sum();
            prop_assert_eq!(store.portfolio().total_value, total);
            prop_assert_eq!(store.portfolio().total_invested, invested);

            if total > Decimal::ZERO {
                let allocation: Decimal = investments.iter().map(|i| i.allocation).sum();
                let slack = dec!(0.05) * Decimal::from(investments.len() as u64);
                prop_assert!((allocation - dec!(100)).abs() <= slack);
            }

            for goal in store.goals() {
                prop_assert!(goal.current_amount <= goal.target_amount);
            }
        }
    }
}
