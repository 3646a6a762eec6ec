//! Server configuration from environment variables

use std::net::SocketAddr;

use crate::engine::RandomSource;

/// Default host address (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port number
pub const DEFAULT_PORT: u16 = 8085;

/// Name reported by the health check
pub const SERVICE_NAME: &str = "StudyAI";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,

    /// Fixed RNG seed; `None` draws fresh entropy per request
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
            seed: None,
        }
    }
}

impl ServerConfig {
    /// Load config from environment variables with fallback to defaults
    ///
    /// Environment variables:
    /// - `STUDYAI_HOST` - Server host
    /// - `STUDYAI_PORT` - Server port
    /// - `STUDYAI_LOG_LEVEL` - Log level (trace, debug, info, warn, error)
    /// - `STUDYAI_SEED` - Fixed RNG seed for reproducible responses
    ///
    /// Unparseable values are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(host) = lookup("STUDYAI_HOST") {
            config.host = host;
        }

        if let Some(port) = lookup("STUDYAI_PORT").and_then(|p| p.parse::<u16>().ok()) {
            config.port = port;
        }

        if let Some(log_level) = lookup("STUDYAI_LOG_LEVEL") {
            config.log_level = log_level;
        }

        if let Some(seed) = lookup("STUDYAI_SEED").and_then(|s| s.parse::<u64>().ok()) {
            config.seed = Some(seed);
        }

        config
    }

    /// Per-request randomness implied by `seed`
    pub fn random_source(&self) -> RandomSource {
        RandomSource::from(self.seed)
    }

    /// Get the socket address for the server
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid address: {}", e))
    }

    /// Get the full server URL (e.g. "http://0.0.0.0:8085")
    #[must_use]
    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port cannot be zero".to_string());
        }

        if self.host.is_empty() {
            return Err("Host cannot be empty".to_string());
        }

        Ok(())
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8085);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lookup_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("STUDYAI_HOST", "127.0.0.1"),
            ("STUDYAI_PORT", "9000"),
            ("STUDYAI_LOG_LEVEL", "debug"),
            ("STUDYAI_SEED", "17"),
        ]));

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.random_source(), RandomSource::Seeded(17));
    }

    #[test]
    fn test_unparseable_values_are_ignored() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("STUDYAI_PORT", "eighty"),
            ("STUDYAI_SEED", "-1"),
        ]));

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.random_source(), RandomSource::Entropy);
    }

    #[test]
    fn test_socket_addr_and_url() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8085,
            ..ServerConfig::default()
        };
        assert_eq!(config.socket_addr().unwrap().port(), 8085);
        assert_eq!(config.server_url(), "http://127.0.0.1:8085");

        let bad = ServerConfig {
            host: "not a host".to_string(),
            ..ServerConfig::default()
        };
        assert!(bad.socket_addr().is_err());
    }

    #[test]
    fn test_validate() {
        let zero_port = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        assert!(zero_port.validate().is_err());

        let empty_host = ServerConfig {
            host: String::new(),
            ..ServerConfig::default()
        };
        assert!(empty_host.validate().is_err());
    }
}
