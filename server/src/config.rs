//! Server configuration parsed from environment variables.

use std::net::IpAddr;

use qbv_client::config::{BASE_PATH_ENV, normalize_base_path};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT '{0}' (expected 1-65535)")]
    InvalidPort(String),
    #[error("invalid BIND_ADDR '{0}'")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub bind_addr: IpAddr,
    /// Normalized path prefix (`/qbv`) or empty for a root deployment.
    pub base_path: String,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `QBV_BASE_PATH`: default empty (root deployment)
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let bind_addr = parse_bind_addr(std::env::var("BIND_ADDR").ok().as_deref())?;
        let base_path = normalize_base_path(&std::env::var(BASE_PATH_ENV).unwrap_or_default());
        Ok(Self { port, bind_addr, base_path })
    }

    /// Absolute URL path for an app route under the configured prefix.
    pub fn route(&self, path: &str) -> String {
        qbv_client::config::join_path(&self.base_path, path)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(v) => match v.parse::<u16>() {
            Ok(0) | Err(_) => Err(ConfigError::InvalidPort(v.to_owned())),
            Ok(port) => Ok(port),
        },
    }
}

fn parse_bind_addr(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let value = match raw.map(str::trim) {
        None | Some("") => DEFAULT_BIND_ADDR,
        Some(v) => v,
    };
    value
        .parse::<IpAddr>()
        .map_err(|_| ConfigError::InvalidBindAddr(value.to_owned()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
