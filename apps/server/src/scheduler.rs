//! Background schedulers driving the market simulation.
//!
//! Each loop runs its step synchronously on the interval; a step that
//! overruns causes the missed ticks to be skipped, never queued.

use std::sync::Arc;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::main_lib::AppState;

/// Starts the periodic market tick.
pub fn start_market_scheduler(state: Arc<AppState>, period: Duration) {
    tokio::spawn(async move {
        info!("Market scheduler started ({}s interval)", period.as_secs());

        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately; prices move only after one period.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            run_market_tick(&state);
        }
    });
}

/// Starts the periodic connectivity poll.
pub fn start_connectivity_scheduler(state: Arc<AppState>, period: Duration) {
    tokio::spawn(async move {
        info!("Connectivity scheduler started ({}s interval)", period.as_secs());

        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        ticker.tick().await;

        loop {
            ticker.tick().await;
            run_connectivity_poll(&state);
        }
    });
}

/// Runs a single scheduled market tick.
pub fn run_market_tick(state: &AppState) {
    match state.tick_market() {
        Ok(outcome) => debug!(
            "Market tick: total {} -> {} ({})",
            outcome.previous_total, outcome.new_total, outcome.day_change
        ),
        Err(e) => warn!("Scheduled market tick failed: {}", e),
    }
}

/// Runs a single scheduled connectivity poll.
pub fn run_connectivity_poll(state: &AppState) {
    match state.poll_connectivity() {
        Ok(true) => debug!("Connectivity poll: connected"),
        Ok(false) => info!("Connectivity poll: market feed disconnected"),
        Err(e) => warn!("Scheduled connectivity poll failed: {}", e),
    }
}
