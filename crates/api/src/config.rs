//! Process configuration (environment variables).

use std::net::SocketAddr;

use thiserror::Error;

use searchsync_infra::{ConfigError, EngineConfig};

pub const BIND_ADDR_ENV: &str = "SEARCHSYNC_BIND_ADDR";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ApiConfigError {
    #[error("{BIND_ADDR_ENV}: invalid socket address `{0}`")]
    BindAddr(String),

    #[error(transparent)]
    Engine(#[from] ConfigError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub engine: EngineConfig,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ApiConfigError> {
        let raw = std::env::var(BIND_ADDR_ENV).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        Ok(Self {
            bind_addr: parse_bind_addr(&raw)?,
            engine: EngineConfig::from_env()?,
        })
    }
}

fn parse_bind_addr(raw: &str) -> Result<SocketAddr, ApiConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiConfigError::BindAddr(raw.to_string()))
}
