//! Server configuration from environment variables.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use analysis_facade::GeneratorLimits;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    InvalidValue {
        name: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Invalid HOST:PORT configuration: {0}")]
    InvalidAddress(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub snapshot_ttl: Duration,
    pub limits: GeneratorLimits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            snapshot_ttl: Duration::from_secs(300),
            limits: GeneratorLimits::default(),
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT`, `LEO_SNAPSHOT_TTL_SECS`, `LEO_MAX_TIME_RANGE`
    /// and `LEO_MAX_HORIZON`, keeping defaults for unset variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", "port number", defaults.port)?,
            snapshot_ttl: Duration::from_secs(parse_or(
                &lookup,
                "LEO_SNAPSHOT_TTL_SECS",
                "number of seconds",
                defaults.snapshot_ttl.as_secs(),
            )?),
            limits: GeneratorLimits::new(
                parse_or(
                    &lookup,
                    "LEO_MAX_TIME_RANGE",
                    "month count",
                    defaults.limits.max_time_range,
                )?,
                parse_or(
                    &lookup,
                    "LEO_MAX_HORIZON",
                    "month count",
                    defaults.limits.max_horizon,
                )?,
            ),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, expected: &'static str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            name,
            value,
            expected,
        }),
    }
}
