//! Application configuration
//!
//! The defaults are embedded as TOML. Backing store connection parameters can
//! be overridden at build time:
//!
//! ```text
//! BACKING_STORE_URL=https://xyz.supabase.co BACKING_STORE_ANON_KEY=... trunk build
//! ```
//!
//! An empty `backing_store.url` switches the users page to the built-in demo
//! records.

use anyhow::{bail, Context};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub backing_store: BackingStoreConfig,
    pub users: UsersConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BackingStoreConfig {
    pub url: String,
    pub anon_key: String,
    pub table: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UsersConfig {
    pub page_size: usize,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[backing_store]
url = ""
anon_key = ""
table = "user-data"

[users]
page_size = 10
"#;

impl AppConfig {
    pub fn is_demo(&self) -> bool {
        self.backing_store.url.trim().is_empty()
    }
}

/// Parse a TOML document and validate it.
pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents).context("invalid configuration")?;
    if config.users.page_size == 0 {
        bail!("users.page_size must be greater than zero");
    }
    if config.backing_store.table.trim().is_empty() {
        bail!("backing_store.table must not be empty");
    }
    Ok(config)
}

/// Load configuration: embedded defaults, then build-time overrides.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let mut config = parse_config(DEFAULT_CONFIG)?;
    apply_overrides(
        &mut config,
        option_env!("BACKING_STORE_URL"),
        option_env!("BACKING_STORE_ANON_KEY"),
        option_env!("BACKING_STORE_TABLE"),
    );
    Ok(config)
}

/// Same as [`load_config`], logging and falling back to the embedded
/// defaults on error.
pub fn load_config_or_default() -> AppConfig {
    match load_config() {
        Ok(config) => {
            log::info!(
                "Config loaded: table='{}', page_size={}, demo={}",
                config.backing_store.table,
                config.users.page_size,
                config.is_demo()
            );
            config
        }
        Err(e) => {
            log::error!("Failed to load config, using defaults: {:#}", e);
            default_config()
        }
    }
}

fn default_config() -> AppConfig {
    AppConfig {
        backing_store: BackingStoreConfig {
            url: String::new(),
            anon_key: String::new(),
            table: "user-data".to_string(),
        },
        users: UsersConfig { page_size: 10 },
    }
}

fn apply_overrides(
    config: &mut AppConfig,
    url: Option<&str>,
    anon_key: Option<&str>,
    table: Option<&str>,
) {
    if let Some(url) = url.filter(|v| !v.is_empty()) {
        config.backing_store.url = url.trim_end_matches('/').to_string();
    }
    if let Some(key) = anon_key.filter(|v| !v.is_empty()) {
        config.backing_store.anon_key = key.to_string();
    }
    if let Some(table) = table.filter(|v| !v.is_empty()) {
        config.backing_store.table = table.to_string();
    }
}
