/// Decimal places for per-investment and portfolio return percentages
pub const RETURN_PERCENT_PRECISION: u32 = 2;

/// Decimal places for allocation percentages
pub const ALLOCATION_PERCENT_PRECISION: u32 = 1;

/// Largest fractional price move applied by one market tick (±0.5%)
pub const MAX_TICK_CHANGE: f64 = 0.005;

/// Default probability that a connectivity poll reports "disconnected"
pub const DEFAULT_DISCONNECT_PROBABILITY: f64 = 0.05;

/// Persistence key holding the serialized dashboard data
pub const STORAGE_DATA_KEY: &str = "financegpt_data";

/// Persistence key holding the snapshot version tag
pub const STORAGE_VERSION_KEY: &str = "financegpt_version";

/// Current snapshot version; any other stored tag is discarded on load
pub const STORAGE_VERSION: &str = "1.0.0";

/// Largest amount accepted by any money field of a form (10^15)
pub const MAX_FORM_AMOUNT: i64 = 1_000_000_000_000_000;
