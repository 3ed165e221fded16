//! Simulated market movement and connectivity.

mod market_simulator;
mod shock_source;

pub use market_simulator::{simulate_tick, ConnectivityMonitor, TickOutcome};
pub use shock_source::{FixedShockSource, PriceShockSource, RandomShockSource};
