use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Errors raised while reading configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required env var: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Configuration for the force-seed worker
///
/// Built once at startup and passed to the worker explicitly; never
/// consulted again after construction.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    /// qBittorrent WebUI base URL
    pub base_url: String,
    /// WebUI username
    pub username: String,
    /// WebUI password
    pub password: String,
    /// How long a completed torrent stays force-started, in days
    pub force_days: f64,
    /// Interval between poll cycles
    pub poll_interval: Duration,
    /// Categories this worker manages; torrents outside them are never touched
    pub categories: Vec<String>,
    /// Optional lowercased substring a tracker URL must contain
    pub tracker_match: Option<String>,
}

impl PolicyConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = get("QBIT_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "http://127.0.0.1:8080".to_string());
        let username = require(&get, "QBIT_USER")?;
        let password = require(&get, "QBIT_PASS")?;

        let force_days = parse(&get, "FORCE_DAYS", 7.0)?;
        let poll_seconds: u64 = parse(&get, "POLL_SECONDS", 900)?;

        let categories = parse_categories(
            get("CATEGORIES")
                .filter(|v| !v.is_empty())
                .as_deref()
                .unwrap_or("tv,movies"),
        );

        let tracker_match = normalize_tracker_match(get("TRACKER_MATCH").as_deref());

        Ok(Self {
            base_url,
            username,
            password,
            force_days,
            poll_interval: Duration::from_secs(poll_seconds),
            categories,
            tracker_match,
        })
    }
}

fn require(
    get: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<String, ConfigError> {
    get(var)
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(var))
}

fn parse<T: FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match get(var) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
        _ => Ok(default),
    }
}

fn parse_categories(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

fn normalize_tracker_match(raw: Option<&str>) -> Option<String> {
    let pattern = raw?.trim().to_lowercase();
    if pattern.is_empty() {
        None
    } else {
        Some(pattern)
    }
}
