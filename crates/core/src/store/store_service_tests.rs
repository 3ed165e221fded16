#[cfg(test)]
mod tests {
    use crate::constants::STORAGE_DATA_KEY;
    use crate::errors::{CalculatorError, Error, Result};
    use crate::events::{DomainEvent, MockDomainEventSink, NoOpDomainEventSink};
    use crate::expenses::{ExpenseCategory, ExpenseSource, NewExpense};
    use crate::goals::{GoalCategory, NewGoal};
    use crate::market::{ConnectivityMonitor, FixedShockSource};
    use crate::portfolio::{InvestmentType, NewInvestment, RiskLevel};
    use crate::storage::{InMemoryKeyValueStore, KeyValueStore, SnapshotRepository};
    use crate::store::{FinancialDataService, FinancialDataServiceTrait, FinancialStore};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    /// Delays the first snapshot write so a later mutation can overtake it.
    struct SlowFirstWriteStore {
        inner: InMemoryKeyValueStore,
        delayed: AtomicBool,
    }

    impl KeyValueStore for SlowFirstWriteStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            if key == STORAGE_DATA_KEY && !self.delayed.swap(true, Ordering::SeqCst) {
                std::thread::sleep(Duration::from_millis(300));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.inner.remove(key)
        }
    }

    fn expense(description: &str) -> NewExpense {
        NewExpense {
            category: ExpenseCategory::Shopping,
            amount: dec!(499),
            date: today(),
            description: description.to_string(),
            source: ExpenseSource::Manual,
        }
    }

    fn investment(invested: Decimal, current: Decimal) -> NewInvestment {
        NewInvestment {
            name: "Outsized".to_string(),
            invested,
            current,
            investment_type: InvestmentType::Stocks,
            risk: RiskLevel::High,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    fn service_with_sink() -> (FinancialDataService, MockDomainEventSink) {
        let sink = MockDomainEventSink::new();
        let service =
            FinancialDataService::new(FinancialStore::seeded(today()), Arc::new(sink.clone()));
        (service, sink)
    }

    #[tokio::test]
    async fn test_mutations_emit_events() {
        let (service, sink) = service_with_sink();

        let goal = service
            .add_goal(NewGoal {
                name: "Trip".to_string(),
                target_amount: dec!(90000),
                target_date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
                category: GoalCategory::Travel,
                monthly_contribution: dec!(7500),
            })
            .await
            .unwrap();
        service.add_funds_to_goal(&goal.id, dec!(1000)).await.unwrap();
        service.import_expenses(today()).await.unwrap();

        let events = sink.events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], DomainEvent::goals_changed(vec![goal.id.clone()]));
        match &events[2] {
            DomainEvent::ExpensesChanged { expense_ids } => assert_eq!(expense_ids.len(), 2),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_mutation_emits_nothing() {
        let (service, sink) = service_with_sink();
        assert!(service.remove_goal("missing").await.is_err());
        assert!(service.add_funds_to_goal("goal1", dec!(0)).await.is_err());
        assert!(sink.is_empty());
        assert_eq!(service.get_goals().unwrap()[0].current_amount, dec!(420000));
    }

    #[tokio::test]
    async fn test_mutations_are_persisted() {
        let repository = SnapshotRepository::new(Arc::new(InMemoryKeyValueStore::new()));
        let service = FinancialDataService::new(
            FinancialStore::seeded(today()),
            Arc::new(NoOpDomainEventSink),
        )
        .with_snapshots(repository.clone());

        service.remove_investment("inv2").await.unwrap();

        let stored = repository.load().expect("snapshot saved");
        assert_eq!(stored.investments.len(), 2);
        assert_eq!(stored.portfolio.total_value, dec!(323000));

        let restored =
            FinancialDataService::load_or_seed(repository, today(), Arc::new(NoOpDomainEventSink));
        assert_eq!(restored.get_investments().unwrap().len(), 2);
        assert!(restored.storage_info().unwrap().used_bytes > 0);
    }

    #[test]
    fn test_load_or_seed_without_snapshot() {
        let repository = SnapshotRepository::new(Arc::new(InMemoryKeyValueStore::new()));
        let service =
            FinancialDataService::load_or_seed(repository, today(), Arc::new(NoOpDomainEventSink));
        assert_eq!(service.get_data().unwrap().goals.len(), 2);
    }

    #[test]
    fn test_tick_and_connectivity() {
        let (service, sink) = service_with_sink();
        let mut source = FixedShockSource::new(vec![0.001], vec![true, true, false]);

        let outcome = service.simulate_market_tick(&mut source).unwrap();
        assert_eq!(service.get_portfolio().unwrap().total_value, outcome.new_total);

        let monitor = ConnectivityMonitor::default();
        assert!(!service.poll_connectivity(&monitor, &mut source).unwrap());
        assert!(!service.poll_connectivity(&monitor, &mut source).unwrap());
        assert!(service.poll_connectivity(&monitor, &mut source).unwrap());

        let events = sink.events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[1], DomainEvent::connectivity_changed(false));
        assert_eq!(events[2], DomainEvent::connectivity_changed(true));
    }

    #[tokio::test]
    async fn test_overflowing_investment_is_rejected_without_side_effects() {
        let (service, sink) = service_with_sink();

        for _ in 0..2 {
            let err = service
                .add_investment(investment(Decimal::MAX, Decimal::MAX))
                .await
                .unwrap_err();
            assert!(matches!(err, Error::Calculation(CalculatorError::Overflow(_))));
        }
        let err = service
            .add_investment(investment(Decimal::new(1, 28), dec!(1000000000000000)))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Calculation(_)));

        let data = service.get_data().unwrap();
        assert_eq!(data.investments.len(), 3);
        assert_eq!(data.portfolio.total_value, dec!(485000));
        assert!(sink.is_empty());

        service
            .add_investment(investment(dec!(1000), dec!(1000)))
            .await
            .unwrap();
        assert_eq!(service.get_portfolio().unwrap().total_value, dec!(486000));
    }

    #[tokio::test]
    async fn test_funding_past_decimal_range_clamps() {
        let (service, _sink) = service_with_sink();
        let goal = service
            .add_goal(NewGoal {
                name: "Everything".to_string(),
                target_amount: Decimal::MAX,
                target_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
                category: GoalCategory::Other,
                monthly_contribution: Decimal::ZERO,
            })
            .await
            .unwrap();

        service.add_funds_to_goal(&goal.id, Decimal::MAX).await.unwrap();
        let funded = service.add_funds_to_goal(&goal.id, Decimal::MAX).await.unwrap();
        assert_eq!(funded.current_amount, Decimal::MAX);
        assert!(service.get_goals().is_ok());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_snapshots_are_saved_in_mutation_order() {
        let kv = Arc::new(SlowFirstWriteStore {
            inner: InMemoryKeyValueStore::new(),
            delayed: AtomicBool::new(false),
        });
        let repository = SnapshotRepository::new(kv);
        let service = Arc::new(
            FinancialDataService::new(
                FinancialStore::seeded(today()),
                Arc::new(NoOpDomainEventSink),
            )
            .with_snapshots(repository.clone()),
        );

        let first = {
            let service = service.clone();
            tokio::spawn(async move { service.add_expense(expense("First")).await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;
        service.add_expense(expense("Second")).await.unwrap();
        first.await.unwrap().unwrap();

        assert_eq!(service.get_expenses().unwrap().len(), 5);
        let stored = repository.load().expect("snapshot saved");
        assert_eq!(stored.expenses.len(), 5);
        assert!(stored.expenses.iter().any(|e| e.description == "First"));
        assert!(stored.expenses.iter().any(|e| e.description == "Second"));
    }
}
