//! Store configuration.
//!
//! Loaded once at startup from a TOML file merged with `RAMEN_`-prefixed
//! environment variables, where `__` separates nested keys:
//!
//! ```text
//! RAMEN_API_KEY=...                 # inbound key for every route
//! RAMEN_ALLOCATOR__API_KEY=...      # outbound key for the id service
//! RAMEN_SERVER__PORT=9000
//! ```

use crate::model::{Broth, Protein};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const CONFIG_PATH_VAR: &str = "RAMEN_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Remote order id service.
#[derive(Debug, Deserialize)]
pub struct AllocatorConfig {
    #[serde(default = "default_allocator_endpoint")]
    pub endpoint: String,
    pub api_key: Secret<String>,
    #[serde(default = "default_allocator_timeout_ms")]
    pub timeout_ms: u64,
}

impl AllocatorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_allocator_endpoint() -> String {
    "https://api.tech.redventures.com.br/orders/generate-id".to_string()
}

fn default_allocator_timeout_ms() -> u64 {
    5_000
}

/// Background order writer.
#[derive(Debug, Clone, Deserialize)]
pub struct PersistenceConfig {
    #[serde(default = "default_queue_size")]
    pub queue_size: usize,
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,
    #[serde(default = "default_min_backoff_ms")]
    pub min_backoff_ms: u64,
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,
    #[serde(default = "default_write_timeout_ms")]
    pub write_timeout_ms: u64,
    /// Failed writes kept for inspection; the oldest are dropped first.
    #[serde(default = "default_audit_capacity")]
    pub audit_capacity: usize,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            queue_size: default_queue_size(),
            max_retries: default_max_retries(),
            min_backoff_ms: default_min_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
            write_timeout_ms: default_write_timeout_ms(),
            audit_capacity: default_audit_capacity(),
        }
    }
}

fn default_queue_size() -> usize {
    256
}

fn default_max_retries() -> usize {
    3
}

fn default_min_backoff_ms() -> u64 {
    50
}

fn default_max_backoff_ms() -> u64 {
    2_000
}

fn default_write_timeout_ms() -> u64 {
    1_000
}

fn default_audit_capacity() -> usize {
    1_024
}

/// Entries loaded into the catalog actors at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub broths: Vec<Broth>,
    #[serde(default)]
    pub proteins: Vec<Protein>,
}

impl Default for CatalogSeed {
    fn default() -> Self {
        Self {
            broths: vec![
                seed_broth("1", "Salt", "Simple like the seawater, nothing more", 10, "salt"),
                seed_broth("2", "Shoyu", "The good old and traditional soy sauce", 10, "shoyu"),
                seed_broth("3", "Miso", "Paste made of fermented soybeans", 12, "miso"),
            ],
            proteins: vec![
                seed_protein(
                    "1",
                    "Chasu",
                    "A sliced flavourful pork meat with a selection of season vegetables.",
                    10,
                    "pork",
                ),
                seed_protein(
                    "2",
                    "Yasai Vegetarian",
                    "A delicious vegetarian lamen with a selection of season vegetables.",
                    10,
                    "yasai",
                ),
                seed_protein(
                    "3",
                    "Karaage",
                    "Three units of fried chicken, moyashi, ajitama egg and other vegetables.",
                    12,
                    "chicken",
                ),
            ],
        }
    }
}

fn seed_broth(id: &str, name: &str, description: &str, price: u32, icon: &str) -> Broth {
    Broth {
        description: description.to_string(),
        price,
        image_inactive: format!("https://tech.redventures.com.br/icons/{icon}/inactive.svg"),
        image_active: format!("https://tech.redventures.com.br/icons/{icon}/active.svg"),
        ..Broth::new(id, name)
    }
}

fn seed_protein(id: &str, name: &str, description: &str, price: u32, icon: &str) -> Protein {
    Protein {
        description: description.to_string(),
        price,
        image_inactive: format!("https://tech.redventures.com.br/icons/{icon}/inactive.svg"),
        image_active: format!("https://tech.redventures.com.br/icons/{icon}/active.svg"),
        ..Protein::new(id, name)
    }
}

#[derive(Debug, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub server: ServerConfig,
    /// Key callers must present in `x-api-key`.
    pub api_key: Secret<String>,
    pub allocator: AllocatorConfig,
    #[serde(default)]
    pub persistence: PersistenceConfig,
    #[serde(default)]
    pub catalog: CatalogSeed,
    /// Image returned for orders that carry none.
    #[serde(default = "default_image_placeholder")]
    pub image_placeholder: String,
}

fn default_image_placeholder() -> String {
    "not-found.svg".to_string()
}

impl StoreConfig {
    /// Loads from the file named by `RAMEN_CONFIG`, or `config/default.toml`.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load(path)
    }

    /// Loads from `path`, then applies `RAMEN_` environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_figment(
            Figment::new()
                .merge(Toml::file(path.as_ref()))
                .merge(Env::prefixed("RAMEN_").split("__")),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(ConfigError::Invalid("api_key must not be empty".into()));
        }
        if self.allocator.api_key.expose_secret().trim().is_empty() {
            return Err(ConfigError::Invalid(
                "allocator.api_key must not be empty".into(),
            ));
        }
        if self.allocator.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "allocator.endpoint must not be empty".into(),
            ));
        }
        if self.persistence.queue_size == 0 {
            return Err(ConfigError::Invalid(
                "persistence.queue_size must be at least 1".into(),
            ));
        }
        if self.persistence.audit_capacity == 0 {
            return Err(ConfigError::Invalid(
                "persistence.audit_capacity must be at least 1".into(),
            ));
        }
        if self.persistence.min_backoff_ms > self.persistence.max_backoff_ms {
            return Err(ConfigError::Invalid(
                "persistence.min_backoff_ms exceeds max_backoff_ms".into(),
            ));
        }
        Ok(())
    }
}
