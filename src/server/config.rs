//! Server configuration read from the environment.
//!
//! Every variable is optional and falls back to a default; a present but malformed value is
//! a [`ConfigError::InvalidEnvValue`] rather than being silently replaced.

use std::{fmt::Display, net::SocketAddr, path::PathBuf, str::FromStr};

use crate::{
    client::filter::config::FilterConfig,
    server::{error::config::ConfigError, service::catalog::CatalogConfig},
};

pub static BIND_ADDR_VAR: &str = "UNISTAY_BIND_ADDR";
pub static STORE_VAR: &str = "UNISTAY_STORE";
pub static STORE_PATH_VAR: &str = "UNISTAY_STORE_PATH";
pub static REDIS_URL_VAR: &str = "UNISTAY_REDIS_URL";
pub static AFFILIATION_LATENCY_VAR: &str = "UNISTAY_AFFILIATION_LATENCY_MS";
pub static LISTING_LATENCY_VAR: &str = "UNISTAY_LISTING_LATENCY_MS";
pub static DEBOUNCE_VAR: &str = "UNISTAY_DEBOUNCE_MS";

const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 8080);
static DEFAULT_STORE_PATH: &str = "./data";

/// Which persistence backend the catalog is stored in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreKind {
    #[default]
    Memory,
    File,
    Redis,
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "file" => Ok(StoreKind::File),
            "redis" | "valkey" => Ok(StoreKind::Redis),
            other => Err(format!(
                "unknown store {:?}, expected memory, file or redis",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub store: StoreKind,
    /// Directory used by the file backend
    pub store_path: PathBuf,
    /// Connection URL used by the Redis backend
    pub redis_url: Option<String>,
    pub catalog: CatalogConfig,
    pub filter: FilterConfig,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, treating blank values as unset.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every present variable parsed
    /// - `Err(ConfigError::InvalidEnvValue)` - A present variable could not be parsed
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let catalog_defaults = CatalogConfig::default();
        let filter_defaults = FilterConfig::default();

        Ok(Self {
            bind_addr: parse_or(
                read(BIND_ADDR_VAR),
                BIND_ADDR_VAR,
                SocketAddr::from(DEFAULT_BIND_ADDR),
            )?,
            store: parse_or(read(STORE_VAR), STORE_VAR, StoreKind::default())?,
            store_path: read(STORE_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH)),
            redis_url: read(REDIS_URL_VAR),
            catalog: CatalogConfig {
                affiliation_latency_ms: parse_or(
                    read(AFFILIATION_LATENCY_VAR),
                    AFFILIATION_LATENCY_VAR,
                    catalog_defaults.affiliation_latency_ms,
                )?,
                listing_latency_ms: parse_or(
                    read(LISTING_LATENCY_VAR),
                    LISTING_LATENCY_VAR,
                    catalog_defaults.listing_latency_ms,
                )?,
            },
            filter: FilterConfig {
                debounce_ms: parse_or(
                    read(DEBOUNCE_VAR),
                    DEBOUNCE_VAR,
                    filter_defaults.debounce_ms,
                )?,
            },
        })
    }
}

fn parse_or<T>(value: Option<String>, var: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match value {
        Some(value) => value.trim().parse().map_err(|err| invalid(var, err)),
        None => Ok(default),
    }
}

fn invalid(var: &str, reason: impl Display) -> ConfigError {
    ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: reason.to_string(),
    }
}
