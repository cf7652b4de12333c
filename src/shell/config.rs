// Runtime configuration read from the environment.
//
// - MAP_STORE_ADDR: listen address, defaults to 0.0.0.0:8080.
// - MAP_STORE_SEED: optional path to a JSON seed for the in memory directory.

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

pub const ADDR_VAR: &str = "MAP_STORE_ADDR";
pub const SEED_VAR: &str = "MAP_STORE_SEED";
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid MAP_STORE_ADDR {value:?}: {source}")]
    InvalidAddress {
        value: String,
        source: AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapStoreConfig {
    pub addr: SocketAddr,
    pub seed_path: Option<PathBuf>,
}

impl MapStoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = value
            .parse()
            .map_err(|source| ConfigError::InvalidAddress { value, source })?;
        let seed_path = lookup(SEED_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        Ok(Self { addr, seed_path })
    }
}
