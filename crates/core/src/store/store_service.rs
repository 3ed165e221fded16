use async_trait::async_trait;
use chrono::NaiveDate;
use log::{info, warn};
use rust_decimal::Decimal;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{FinancialData, FinancialDataServiceTrait, FinancialStore};
use crate::errors::{Error, Result};
use crate::events::{DomainEvent, DomainEventSink};
use crate::expenses::{Expense, NewExpense};
use crate::goals::{Goal, NewGoal};
use crate::market::{ConnectivityMonitor, PriceShockSource, TickOutcome};
use crate::portfolio::{Investment, NewInvestment, PortfolioSummary};
use crate::storage::{SnapshotRepository, StorageInfo};

/// Thread-safe wrapper around [`FinancialStore`].
///
/// Each mutation runs on a copy of the store under the write lock and is
/// committed only when it succeeds. Persistent changes are saved before the
/// lock is released, so snapshots reach storage in mutation order. Events
/// are emitted after the lock is released.
pub struct FinancialDataService {
    store: RwLock<FinancialStore>,
    event_sink: Arc<dyn DomainEventSink>,
    snapshots: Option<SnapshotRepository>,
}

impl FinancialDataService {
    pub fn new(store: FinancialStore, event_sink: Arc<dyn DomainEventSink>) -> Self {
        Self {
            store: RwLock::new(store),
            event_sink,
            snapshots: None,
        }
    }

    /// Restores the last saved snapshot, or starts from the demo data.
    pub fn load_or_seed(
        snapshots: SnapshotRepository,
        today: NaiveDate,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        let restored = snapshots.load().and_then(|data| {
            let counts = (data.investments.len(), data.expenses.len(), data.goals.len());
            match FinancialStore::from_data(data) {
                Ok(store) => {
                    info!(
                        "Restored snapshot with {} investments, {} expenses, {} goals",
                        counts.0, counts.1, counts.2
                    );
                    Some(store)
                }
                Err(e) => {
                    warn!("Discarding stored snapshot: {}", e);
                    None
                }
            }
        });
        let store = restored.unwrap_or_else(|| {
            info!("No usable snapshot found, starting from demo data");
            FinancialStore::seeded(today)
        });
        Self::new(store, event_sink).with_snapshots(snapshots)
    }

    pub fn with_snapshots(mut self, snapshots: SnapshotRepository) -> Self {
        self.snapshots = Some(snapshots);
        self
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, FinancialStore>> {
        self.store
            .read()
            .map_err(|_| Error::Unexpected("financial store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, FinancialStore>> {
        self.store
            .write()
            .map_err(|_| Error::Unexpected("financial store lock poisoned".to_string()))
    }

    /// Applies `op` to a copy of the store and commits it on success,
    /// saving under the same write lock. Emits after the lock is released.
    fn mutate<T>(
        &self,
        op: impl FnOnce(&mut FinancialStore) -> Result<(T, DomainEvent)>,
    ) -> Result<T> {
        let (value, event) = {
            let mut store = self.write()?;
            let mut scratch = store.clone();
            let (value, event) = op(&mut scratch)?;
            *store = scratch;
            if event.is_persistent() {
                self.persist(store.data());
            }
            (value, event)
        };

        self.event_sink.emit(event);
        Ok(value)
    }

    fn persist(&self, data: &FinancialData) {
        if let Some(snapshots) = &self.snapshots {
            if let Err(e) = snapshots.save(data) {
                warn!("Failed to save snapshot: {}", e);
            }
        }
    }
}

#[async_trait]
impl FinancialDataServiceTrait for FinancialDataService {
    fn get_data(&self) -> Result<FinancialData> {
        Ok(self.read()?.snapshot())
    }

    fn get_portfolio(&self) -> Result<PortfolioSummary> {
        Ok(self.read()?.portfolio().clone())
    }

    fn get_investments(&self) -> Result<Vec<Investment>> {
        Ok(self.read()?.investments().to_vec())
    }

    fn get_expenses(&self) -> Result<Vec<Expense>> {
        Ok(self.read()?.expenses().to_vec())
    }

    fn get_goals(&self) -> Result<Vec<Goal>> {
        Ok(self.read()?.goals().to_vec())
    }

    async fn add_investment(&self, new_investment: NewInvestment) -> Result<Investment> {
        self.mutate(|store| {
            let investment = store.add_investment(new_investment)?;
            let event = DomainEvent::investments_changed(vec![investment.id.clone()]);
            Ok((investment, event))
        })
    }

    async fn update_investment(&self, id: &str, update: NewInvestment) -> Result<Investment> {
        self.mutate(|store| {
            let investment = store.update_investment(id, update)?;
            let event = DomainEvent::investments_changed(vec![investment.id.clone()]);
            Ok((investment, event))
        })
    }

    async fn remove_investment(&self, id: &str) -> Result<Investment> {
        self.mutate(|store| {
            let investment = store.remove_investment(id)?;
            let event = DomainEvent::investments_changed(vec![investment.id.clone()]);
            Ok((investment, event))
        })
    }

    async fn add_expense(&self, new_expense: NewExpense) -> Result<Expense> {
        self.mutate(|store| {
            let expense = store.add_expense(new_expense);
            let event = DomainEvent::expenses_changed(vec![expense.id.clone()]);
            Ok((expense, event))
        })
    }

    async fn replace_expense(&self, id: &str, replacement: NewExpense) -> Result<Expense> {
        self.mutate(|store| {
            let expense = store.replace_expense(id, replacement)?;
            let event = DomainEvent::expenses_changed(vec![id.to_string(), expense.id.clone()]);
            Ok((expense, event))
        })
    }

    async fn remove_expense(&self, id: &str) -> Result<Expense> {
        self.mutate(|store| {
            let expense = store.remove_expense(id)?;
            let event = DomainEvent::expenses_changed(vec![expense.id.clone()]);
            Ok((expense, event))
        })
    }

    async fn import_expenses(&self, today: NaiveDate) -> Result<Vec<Expense>> {
        self.mutate(|store| {
            let imported = store.import_expenses(today);
            let ids = imported.iter().map(|e| e.id.clone()).collect();
            Ok((imported, DomainEvent::expenses_changed(ids)))
        })
    }

    async fn add_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        self.mutate(|store| {
            let goal = store.add_goal(new_goal);
            let event = DomainEvent::goals_changed(vec![goal.id.clone()]);
            Ok((goal, event))
        })
    }

    async fn add_funds_to_goal(&self, id: &str, amount: Decimal) -> Result<Goal> {
        self.mutate(|store| {
            let goal = store.add_funds_to_goal(id, amount)?;
            let event = DomainEvent::goals_changed(vec![goal.id.clone()]);
            Ok((goal, event))
        })
    }

    async fn remove_goal(&self, id: &str) -> Result<Goal> {
        self.mutate(|store| {
            let goal = store.remove_goal(id)?;
            let event = DomainEvent::goals_changed(vec![goal.id.clone()]);
            Ok((goal, event))
        })
    }

    fn simulate_market_tick(&self, source: &mut dyn PriceShockSource) -> Result<TickOutcome> {
        self.mutate(|store| {
            let outcome = store.apply_market_tick(source)?;
            let event = DomainEvent::market_ticked(outcome.new_total, outcome.day_change);
            Ok((outcome, event))
        })
    }

    fn poll_connectivity(
        &self,
        monitor: &ConnectivityMonitor,
        source: &mut dyn PriceShockSource,
    ) -> Result<bool> {
        let connected = monitor.poll(source);
        let changed = self.write()?.set_connected(connected);
        if changed {
            self.event_sink
                .emit(DomainEvent::connectivity_changed(connected));
        }
        Ok(connected)
    }

    fn storage_info(&self) -> Option<StorageInfo> {
        self.snapshots.as_ref().map(SnapshotRepository::storage_info)
    }
}
