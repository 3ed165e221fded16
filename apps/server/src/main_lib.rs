use std::sync::{Arc, Mutex};

use crate::config::Config;
use financegpt_ai::{FinancialAdvisor, OverridableCredential, StaticCredential};
use financegpt_core::{
    events::{DomainEventSink, LoggingDomainEventSink},
    market::{ConnectivityMonitor, PriceShockSource, RandomShockSource, TickOutcome},
    storage::{FileKeyValueStore, SnapshotRepository},
    store::{FinancialDataService, FinancialDataServiceTrait},
    utils::today_utc,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub data_service: Arc<dyn FinancialDataServiceTrait>,
    pub advisor: Arc<FinancialAdvisor>,
    /// Key used by the advisor; replaceable at runtime through the API.
    pub credential: Arc<OverridableCredential>,
    /// Shared by the market scheduler and the manual tick route.
    pub shock_source: Mutex<Box<dyn PriceShockSource>>,
    pub connectivity: ConnectivityMonitor,
}

impl AppState {
    /// Runs one market tick with the shared shock source.
    pub fn tick_market(&self) -> financegpt_core::Result<TickOutcome> {
        let mut source = self
            .shock_source
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        self.data_service.simulate_market_tick(&mut **source)
    }

    /// Polls the simulated connection and returns the new state.
    pub fn poll_connectivity(&self) -> financegpt_core::Result<bool> {
        let mut source = self
            .shock_source
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        self.data_service
            .poll_connectivity(&self.connectivity, &mut **source)
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("FINGPT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let kv_store = FileKeyValueStore::open(&config.data_dir)?;
    tracing::info!("Snapshot directory in use: {}", kv_store.root().display());
    let snapshots = SnapshotRepository::new(Arc::new(kv_store));

    let event_sink: Arc<dyn DomainEventSink> = Arc::new(LoggingDomainEventSink);
    let data_service = Arc::new(FinancialDataService::load_or_seed(
        snapshots,
        today_utc(),
        event_sink,
    ));

    let configured_key = config
        .gemini_api_key
        .clone()
        .map(StaticCredential::new)
        .unwrap_or_else(StaticCredential::none);
    let credential = Arc::new(OverridableCredential::new(Arc::new(configured_key)));
    let advisor = Arc::new(FinancialAdvisor::gemini(credential.clone(), &config.advisor)?);
    tracing::info!(
        "AI advisor using model {} (key {:?})",
        config.advisor.model,
        advisor.api_key_status()
    );

    let shock_source: Box<dyn PriceShockSource> = match config.market_seed {
        Some(seed) => {
            tracing::info!("Market simulation seeded with {}", seed);
            Box::new(RandomShockSource::seeded(seed))
        }
        None => Box::new(RandomShockSource::from_entropy()),
    };

    Ok(Arc::new(AppState {
        data_service,
        advisor,
        credential,
        shock_source: Mutex::new(shock_source),
        connectivity: ConnectivityMonitor::new(config.disconnect_probability),
    }))
}
