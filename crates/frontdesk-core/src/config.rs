//! Configuration read from the process environment.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3001";
pub const DEFAULT_AGENT_PORT: u16 = 8000;
pub const DEFAULT_DESK_PORT: u16 = 3001;
pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 2 * 60 * 1000;
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Configuration for the call-handling agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// HTTP server port.
    pub port: u16,
    /// Base URL of the request store, without a trailing slash.
    pub server_url: String,
    /// Upper bound on each request store call.
    pub store_timeout: Duration,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_AGENT_PORT,
            server_url: DEFAULT_SERVER_URL.into(),
            store_timeout: Duration::from_millis(DEFAULT_STORE_TIMEOUT_MS),
        }
    }
}

impl AgentConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = parse_var(&lookup, "PORT")?.unwrap_or(DEFAULT_AGENT_PORT);

        let server_url = lookup("SERVER_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.into());

        let timeout_ms =
            parse_var(&lookup, "STORE_TIMEOUT_MS")?.unwrap_or(DEFAULT_STORE_TIMEOUT_MS);
        if timeout_ms == 0 {
            return Err(Error::Config("STORE_TIMEOUT_MS must be greater than zero".into()));
        }

        Ok(Self {
            port,
            server_url,
            store_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

/// Configuration for the help desk request store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeskConfig {
    /// HTTP server port.
    pub port: u16,
    /// JSON file holding requests and learned answers.
    pub data_file: PathBuf,
    /// Pending requests older than this are marked unresolved.
    pub request_timeout: Duration,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_DESK_PORT,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }
}

impl DeskConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = parse_var(&lookup, "PORT")?.unwrap_or(DEFAULT_DESK_PORT);
        let data_file = lookup("FRONTDESK_DATA_FILE")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
        let timeout_ms = parse_var(&lookup, "TIMEOUT_MS")?.unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);

        Ok(Self {
            port,
            data_file,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>> {
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("{} has an invalid value: {:?}", key, raw))),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_agent_defaults() {
        let config = AgentConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.server_url, "http://localhost:3001");
        assert_eq!(config.store_timeout, Duration::from_millis(5000));
    }

    #[test]
    fn test_agent_overrides() {
        let config = AgentConfig::from_lookup(lookup(&[
            ("PORT", "9100"),
            ("SERVER_URL", "http://desk.internal:4000/"),
            ("STORE_TIMEOUT_MS", "250"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.server_url, "http://desk.internal:4000");
        assert_eq!(config.store_timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_port() {
        let err = AgentConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_zero_store_timeout() {
        let err = AgentConfig::from_lookup(lookup(&[("STORE_TIMEOUT_MS", "0")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_desk_defaults_and_overrides() {
        let config = DeskConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3001);
        assert_eq!(config.data_file, PathBuf::from("data.json"));
        assert_eq!(config.request_timeout, Duration::from_secs(120));

        let config = DeskConfig::from_lookup(lookup(&[
            ("FRONTDESK_DATA_FILE", "/var/lib/frontdesk/desk.json"),
            ("TIMEOUT_MS", "1000"),
        ]))
        .unwrap();
        assert_eq!(config.data_file, PathBuf::from("/var/lib/frontdesk/desk.json"));
        assert_eq!(config.request_timeout, Duration::from_secs(1));
    }
}
