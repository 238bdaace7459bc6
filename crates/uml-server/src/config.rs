//! Environment-driven server settings.

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const BIND_ADDR_ENV: &str = "UML_BIND_ADDR";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Reads [`BIND_ADDR_ENV`], falling back to [`DEFAULT_BIND_ADDR`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_bind_addr(std::env::var(BIND_ADDR_ENV).ok().as_deref())
    }

    fn from_bind_addr(value: Option<&str>) -> Result<Self, ConfigError> {
        let value = value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_BIND_ADDR);
        let bind_addr = value.parse().map_err(|source| ConfigError::InvalidBindAddr {
            value: value.to_string(),
            source,
        })?;
        Ok(Self { bind_addr })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}
