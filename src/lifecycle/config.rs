use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::DEFAULT_CART_KEY;
use crate::storage::validate_key;

pub const ENV_DATA_DIR: &str = "STOREFRONT_DATA_DIR";
pub const ENV_CART_KEY: &str = "STOREFRONT_CART_KEY";
pub const ENV_CATALOG_LATENCY_MS: &str = "STOREFRONT_CATALOG_LATENCY_MS";
pub const ENV_CHECKOUT_LATENCY_MS: &str = "STOREFRONT_CHECKOUT_LATENCY_MS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Durable slot key the cart is saved under.
    pub cart_key: String,
    /// Directory for the file-backed store. `None` keeps everything in memory.
    pub data_dir: Option<PathBuf>,
    /// Byte limit for the in-memory store.
    pub storage_quota_bytes: Option<usize>,
    pub catalog_latency_ms: u64,
    pub checkout_latency_ms: u64,
    pub channel_capacity: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            cart_key: DEFAULT_CART_KEY.to_string(),
            data_dir: None,
            storage_quota_bytes: None,
            catalog_latency_ms: 400,
            checkout_latency_ms: 2000,
            channel_capacity: 32,
        }
    }
}

impl StorefrontConfig {
    /// No simulated delays; handy for tests.
    pub fn instant() -> Self {
        Self {
            catalog_latency_ms: 0,
            checkout_latency_ms: 0,
            ..Self::default()
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Applies `STOREFRONT_*` environment overrides.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(dir) = lookup(ENV_DATA_DIR) {
            self.data_dir = if dir.is_empty() {
                None
            } else {
                Some(PathBuf::from(dir))
            };
        }
        if let Some(key) = lookup(ENV_CART_KEY) {
            self.cart_key = key;
        }
        if let Some(value) = lookup(ENV_CATALOG_LATENCY_MS) {
            self.catalog_latency_ms = parse_millis(ENV_CATALOG_LATENCY_MS, value)?;
        }
        if let Some(value) = lookup(ENV_CHECKOUT_LATENCY_MS) {
            self.checkout_latency_ms = parse_millis(ENV_CHECKOUT_LATENCY_MS, value)?;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cart_key.trim().is_empty() {
            return Err(ConfigError::Invalid("cart_key must not be empty".to_string()));
        }
        if self.data_dir.is_some() {
            if validate_key(&self.cart_key).is_err() {
                return Err(ConfigError::Invalid(format!(
                    "cart_key {:?} is not usable as a file name; use only A-Z, a-z, 0-9, '_', '-' and '.'",
                    self.cart_key
                )));
            }
            if self.storage_quota_bytes.is_some() {
                return Err(ConfigError::Invalid(
                    "storage_quota_bytes only applies without data_dir".to_string(),
                ));
            }
        }
        if self.channel_capacity == 0 {
            return Err(ConfigError::Invalid(
                "channel_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn catalog_latency(&self) -> Duration {
        Duration::from_millis(self.catalog_latency_ms)
    }

    pub fn checkout_latency(&self) -> Duration {
        Duration::from_millis(self.checkout_latency_ms)
    }
}

fn parse_millis(var: &'static str, value: String) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { var, value })
}
