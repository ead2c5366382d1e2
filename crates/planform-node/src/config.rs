//! Node configuration.

use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

pub const BIND_ADDRESS_ENV: &str = "PLANFORM_BIND_ADDRESS";
pub const LOG_LEVEL_ENV: &str = "PLANFORM_LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "PLANFORM_LOG_FORMAT";

/// Configuration for the action server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    /// Address the HTTP server listens on.
    pub bind_address: SocketAddr,

    /// Tracing filter directive (e.g. "info", "planform_plans=debug").
    pub log_level: String,

    /// Log line format.
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 5055)),
            log_level: "info".to_string(),
            log_format: LogFormat::Compact,
        }
    }
}

impl NodeConfig {
    /// Defaults overridden from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(BIND_ADDRESS_ENV) {
            self.bind_address = value
                .trim()
                .parse()
                .map_err(|_| invalid(BIND_ADDRESS_ENV, &value))?;
        }

        if let Some(value) = lookup(LOG_LEVEL_ENV) {
            if value.trim().is_empty() {
                return Err(invalid(LOG_LEVEL_ENV, &value));
            }
            self.log_level = value.trim().to_string();
        }

        if let Some(value) = lookup(LOG_FORMAT_ENV) {
            self.log_format = value.parse().map_err(|_| invalid(LOG_FORMAT_ENV, &value))?;
        }

        Ok(self)
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
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
    fn test_defaults() {
        let config = NodeConfig::default().with_overrides(lookup(&[])).unwrap();
        assert_eq!(config, NodeConfig::default());
        assert_eq!(config.bind_address.port(), 5055);
        assert_eq!(config.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_overrides() {
        let config = NodeConfig::default()
            .with_overrides(lookup(&[
                (BIND_ADDRESS_ENV, "127.0.0.1:8080"),
                (LOG_LEVEL_ENV, "planform_plans=debug"),
                (LOG_FORMAT_ENV, "JSON"),
            ]))
            .unwrap();
        assert_eq!(config.bind_address, SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(config.log_level, "planform_plans=debug");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_bind_address() {
        let err = NodeConfig::default()
            .with_overrides(lookup(&[(BIND_ADDRESS_ENV, "localhost")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnvOverride {
                key: BIND_ADDRESS_ENV.to_string(),
                value: "localhost".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_log_format() {
        let result = NodeConfig::default().with_overrides(lookup(&[(LOG_FORMAT_ENV, "xml")]));
        assert!(result.is_err());
    }
}
