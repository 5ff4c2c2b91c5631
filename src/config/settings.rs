//! Settings loading from config.toml
//!
//! Every value has a built-in default, so the bot runs without any config file. A
//! file that exists but fails to parse is a hard error. The marketplace base URLs can
//! additionally be overridden from the environment.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable naming an alternate settings file.
pub const CONFIG_PATH_VAR: &str = "BOT_CONFIG_PATH";
/// Settings file read when `BOT_CONFIG_PATH` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

/// Complete bot settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub pagination: PaginationSettings,
    pub images: ImageSettings,
    pub trending: TrendingSettings,
    pub discord: DiscordSettings,
}

/// Upstream marketplace endpoints and HTTP behaviour.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Ordinals Wallet API root
    pub ordinals_wallet_base_url: String,
    /// Doggy Market API root
    pub doggy_market_base_url: String,
    /// User agent sent to Doggy Market, which refuses non-browser clients
    pub user_agent: String,
    /// Whole-request timeout
    pub request_timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            ordinals_wallet_base_url: "https://dogeturbo.ordinalswallet.com".to_string(),
            doggy_market_base_url: "https://api.doggy.market".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PaginationSettings {
    /// Safety bound on pages per listing; 0 disables the bound
    pub max_pages: u32,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self { max_pages: 500 }
    }
}

impl PaginationSettings {
    /// The bound as the paginator expects it.
    #[must_use]
    pub const fn page_limit(&self) -> Option<u32> {
        if self.max_pages == 0 {
            None
        } else {
            Some(self.max_pages)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    /// Shown when neither the image nor its fallback resolves
    pub placeholder_url: String,
    /// Maximum image probes in flight for one command
    pub probe_concurrency: usize,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            placeholder_url: "https://doggy.market/images/placeholder.png".to_string(),
            probe_concurrency: 8,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrendingSettings {
    pub default_limit: u32,
    pub max_limit: u32,
}

impl Default for TrendingSettings {
    fn default() -> Self {
        Self {
            default_limit: 10,
            max_limit: 100,
        }
    }
}

impl TrendingSettings {
    /// Applies the default and clamps a user-supplied limit into `1..=max_limit`.
    #[must_use]
    pub fn effective_limit(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default_limit)
            .clamp(1, self.max_limit.max(1))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DiscordSettings {
    /// Register slash commands globally instead of per guild
    pub register_globally: bool,
}

/// Parses settings from TOML text.
pub fn parse_settings(contents: &str) -> Result<Settings> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse settings: {e}"),
    })
}

/// Loads settings from `path`, falling back to defaults when the file does not exist.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    if !path.exists() {
        info!("No settings file at {:?}, using defaults", path);
        return Ok(Settings::default());
    }

    debug!("Loading settings from {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read settings file {path:?}: {e}"),
    })?;
    parse_settings(&contents)
}

/// Loads settings from `BOT_CONFIG_PATH` (or ./config.toml) and applies
/// environment overrides.
pub fn load_default_settings() -> Result<Settings> {
    let path =
        std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let mut settings = load_settings(&path)?;
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    validate_settings(&settings)?;
    Ok(settings)
}

/// Overrides base URLs from `ORDINALS_WALLET_BASE_URL` and `DOGGY_MARKET_BASE_URL`.
pub fn apply_env_overrides<F>(settings: &mut Settings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("ORDINALS_WALLET_BASE_URL").filter(|v| !v.trim().is_empty()) {
        settings.api.ordinals_wallet_base_url = url;
    }
    if let Some(url) = lookup("DOGGY_MARKET_BASE_URL").filter(|v| !v.trim().is_empty()) {
        settings.api.doggy_market_base_url = url;
    }
}

/// Rejects settings the bot cannot work with.
pub fn validate_settings(settings: &Settings) -> Result<()> {
    for (name, url) in [
        ("ordinals_wallet_base_url", &settings.api.ordinals_wallet_base_url),
        ("doggy_market_base_url", &settings.api.doggy_market_base_url),
    ] {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::Config {
                message: format!("{name} must be an http(s) URL, got '{url}'"),
            });
        }
    }
    if settings.api.request_timeout_secs == 0 {
        return Err(Error::Config {
            message: "request_timeout_secs must be greater than zero".to_string(),
        });
    }
    Ok(())
}
