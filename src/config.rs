use std::net::SocketAddr;
use std::time::Duration;

use tracing::warn;

pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:9002";
pub const DEFAULT_MAX_REQUEST_BYTES: usize = 16 * 1024;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Runtime settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `ADVISOR_HTTP_ADDR`
    pub http_addr: SocketAddr,
    /// `ADVISOR_MAX_REQUEST_BYTES`: upper bound on head plus body of one request.
    pub max_request_bytes: usize,
    /// `ADVISOR_REQUEST_TIMEOUT_SECS`: how long a client may take to send one request.
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: SocketAddr::from(([127, 0, 0, 1], 9002)),
            max_request_bytes: DEFAULT_MAX_REQUEST_BYTES,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                warn!("Failed to load .env: {}", e);
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unparseable values are logged and replaced with the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let http_addr = match lookup("ADVISOR_HTTP_ADDR").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.trim().parse::<SocketAddr>().unwrap_or_else(|e| {
                warn!(
                    "Invalid ADVISOR_HTTP_ADDR '{}': {}; using {}",
                    raw, e, DEFAULT_HTTP_ADDR
                );
                defaults.http_addr
            }),
            None => defaults.http_addr,
        };

        let max_request_bytes = match lookup("ADVISOR_MAX_REQUEST_BYTES") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    warn!(
                        "Invalid ADVISOR_MAX_REQUEST_BYTES '{}'; using {}",
                        raw, DEFAULT_MAX_REQUEST_BYTES
                    );
                    defaults.max_request_bytes
                }
            },
            None => defaults.max_request_bytes,
        };

        let request_timeout = match lookup("ADVISOR_REQUEST_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    warn!(
                        "Invalid ADVISOR_REQUEST_TIMEOUT_SECS '{}'; using {}",
                        raw, DEFAULT_REQUEST_TIMEOUT_SECS
                    );
                    defaults.request_timeout
                }
            },
            None => defaults.request_timeout,
        };

        Self {
            http_addr,
            max_request_bytes,
            request_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.http_addr.to_string(), DEFAULT_HTTP_ADDR);
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("ADVISOR_HTTP_ADDR", "0.0.0.0:8080"),
            ("ADVISOR_MAX_REQUEST_BYTES", "4096"),
            ("ADVISOR_REQUEST_TIMEOUT_SECS", "3"),
        ]));
        assert_eq!(config.http_addr.port(), 8080);
        assert_eq!(config.max_request_bytes, 4096);
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("ADVISOR_HTTP_ADDR", "not-an-address"),
            ("ADVISOR_MAX_REQUEST_BYTES", "0"),
            ("ADVISOR_REQUEST_TIMEOUT_SECS", "soon"),
        ]));
        assert_eq!(config, ServerConfig::default());
    }
}
