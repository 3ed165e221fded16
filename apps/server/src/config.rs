use std::{net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use financegpt_ai::AdvisorConfig;

const DEFAULT_PORT: u16 = 8088;
const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_MARKET_TICK_SECS: u64 = 30;
const DEFAULT_CONNECTIVITY_SECS: u64 = 10;
const DEFAULT_DISCONNECT_PROBABILITY: f64 = 0.05;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 60_000;

pub struct Config {
    pub listen_addr: SocketAddr,
    /// Directory holding the dashboard snapshot
    pub data_dir: PathBuf,
    pub market_tick_interval: Duration,
    pub connectivity_interval: Duration,
    pub disconnect_probability: f64,
    /// Seeds the market RNG for reproducible runs
    pub market_seed: Option<u64>,
    pub gemini_api_key: Option<String>,
    pub advisor: AdvisorConfig,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Values that fail to
    /// parse are reported and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let listen_addr = parse_or("FINGPT_LISTEN_ADDR", &lookup, || {
            SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))
        });

        let data_dir = lookup("FINGPT_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());

        let market_tick_secs =
            positive_secs("FINGPT_MARKET_TICK_SECS", &lookup, DEFAULT_MARKET_TICK_SECS);
        let connectivity_secs =
            positive_secs("FINGPT_CONNECTIVITY_SECS", &lookup, DEFAULT_CONNECTIVITY_SECS);

        let mut disconnect_probability = parse_or("FINGPT_DISCONNECT_PROBABILITY", &lookup, || {
            DEFAULT_DISCONNECT_PROBABILITY
        });
        if !(0.0..=1.0).contains(&disconnect_probability) {
            tracing::warn!(
                "FINGPT_DISCONNECT_PROBABILITY must be within [0, 1], got {}; using {}",
                disconnect_probability,
                DEFAULT_DISCONNECT_PROBABILITY
            );
            disconnect_probability = DEFAULT_DISCONNECT_PROBABILITY;
        }

        let market_seed = lookup("FINGPT_MARKET_SEED").and_then(|raw| match raw.trim().parse() {
            Ok(seed) => Some(seed),
            Err(_) => {
                tracing::warn!("Ignoring invalid FINGPT_MARKET_SEED '{}'", raw);
                None
            }
        });

        let mut advisor = AdvisorConfig::default();
        if let Some(model) = lookup("GEMINI_MODEL").filter(|v| !v.trim().is_empty()) {
            advisor.model = model.trim().to_string();
        }
        if let Some(base_url) = lookup("GEMINI_BASE_URL").filter(|v| !v.trim().is_empty()) {
            advisor.base_url = base_url.trim().trim_end_matches('/').to_string();
        }
        advisor.timeout = Duration::from_secs(positive_secs(
            "GEMINI_TIMEOUT_SECS",
            &lookup,
            advisor.timeout.as_secs(),
        ));

        let cors_allow = lookup("FINGPT_CORS_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let timeout_ms = parse_or("FINGPT_REQUEST_TIMEOUT_MS", &lookup, || {
            DEFAULT_REQUEST_TIMEOUT_MS
        });

        Self {
            listen_addr,
            data_dir: PathBuf::from(data_dir),
            market_tick_interval: Duration::from_secs(market_tick_secs),
            connectivity_interval: Duration::from_secs(connectivity_secs),
            disconnect_probability,
            market_seed,
            gemini_api_key: lookup("GEMINI_API_KEY"),
            advisor,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        }
    }
}

fn parse_or<T, L>(key: &str, lookup: &L, default: impl FnOnce() -> T) -> T
where
    T: FromStr,
    L: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default(),
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid value '{}' for {}; using the default", raw, key);
            default()
        }),
    }
}

fn positive_secs<L>(key: &str, lookup: &L, default: u64) -> u64
where
    L: Fn(&str) -> Option<String>,
{
    let secs = parse_or(key, lookup, || default);
    if secs == 0 {
        tracing::warn!("{} must be greater than zero; using {}", key, default);
        return default;
    }
    secs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:8088");
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.market_tick_interval, Duration::from_secs(30));
        assert_eq!(config.connectivity_interval, Duration::from_secs(10));
        assert_eq!(config.disconnect_probability, 0.05);
        assert_eq!(config.market_seed, None);
        assert_eq!(config.gemini_api_key, None);
        assert_eq!(config.advisor.model, "gemini-pro");
        assert_eq!(config.advisor.timeout, Duration::from_secs(30));
        assert_eq!(config.cors_allow, vec!["*".to_string()]);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("FINGPT_LISTEN_ADDR", "127.0.0.1:9000"),
            ("FINGPT_DATA_DIR", "/tmp/fingpt"),
            ("FINGPT_MARKET_TICK_SECS", "5"),
            ("FINGPT_DISCONNECT_PROBABILITY", "0.5"),
            ("FINGPT_MARKET_SEED", "42"),
            ("GEMINI_MODEL", "gemini-1.5-flash"),
            ("GEMINI_TIMEOUT_SECS", "12"),
            ("FINGPT_CORS_ORIGINS", "http://localhost:5173, http://example.com,"),
        ]);
        assert_eq!(config.listen_addr.port(), 9000);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/fingpt"));
        assert_eq!(config.market_tick_interval, Duration::from_secs(5));
        assert_eq!(config.disconnect_probability, 0.5);
        assert_eq!(config.market_seed, Some(42));
        assert_eq!(config.advisor.model, "gemini-1.5-flash");
        assert_eq!(config.advisor.timeout, Duration::from_secs(12));
        assert_eq!(
            config.cors_allow,
            vec!["http://localhost:5173".to_string(), "http://example.com".to_string()]
        );
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("FINGPT_LISTEN_ADDR", "not an address"),
            ("FINGPT_MARKET_TICK_SECS", "0"),
            ("FINGPT_CONNECTIVITY_SECS", "soon"),
            ("FINGPT_DISCONNECT_PROBABILITY", "1.5"),
            ("FINGPT_MARKET_SEED", "-3"),
        ]);
        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:8088");
        assert_eq!(config.market_tick_interval, Duration::from_secs(30));
        assert_eq!(config.connectivity_interval, Duration::from_secs(10));
        assert_eq!(config.disconnect_probability, 0.05);
        assert_eq!(config.market_seed, None);
    }
}
