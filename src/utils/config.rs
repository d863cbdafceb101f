//! Console configuration
//!
//! Loaded from a TOML file (`genie.toml`) with every field optional. Native
//! builds can additionally pull overrides from the environment (and a `.env`
//! file) via [`ConsoleConfig::from_env`].

use crate::auth::session::{DEFAULT_TOKEN_KEY, DEFAULT_USER_KEY};
use crate::routes;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub checkout: CheckoutConfig,

    #[serde(default)]
    pub routes: RoutesConfig,
}

// ============= API Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (native client only)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// ============= Session Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,

    #[serde(default = "default_user_key")]
    pub user_key: String,
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

fn default_user_key() -> String {
    DEFAULT_USER_KEY.to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
            user_key: default_user_key(),
        }
    }
}

// ============= Checkout Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Hosted checkout script injected on the billing page
    #[serde(default = "default_script_url")]
    pub script_url: String,

    /// Merchant name shown in the checkout widget
    #[serde(default = "default_brand_name")]
    pub brand_name: String,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default = "default_theme_color")]
    pub theme_color: String,
}

fn default_script_url() -> String {
    "https://checkout.razorpay.com/v1/checkout.js".to_string()
}

fn default_brand_name() -> String {
    "Genie".to_string()
}

fn default_theme_color() -> String {
    "#6366f1".to_string()
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            script_url: default_script_url(),
            brand_name: default_brand_name(),
            image: None,
            theme_color: default_theme_color(),
        }
    }
}

// ============= Route Configuration =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutesConfig {
    #[serde(default = "default_login_route")]
    pub login: String,

    /// Where signed-in users land when they open a public-only page
    #[serde(default = "default_home_route")]
    pub home: String,
}

fn default_login_route() -> String {
    routes::LOGIN.to_string()
}

fn default_home_route() -> String {
    routes::DASHBOARD.to_string()
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            login: default_login_route(),
            home: default_home_route(),
        }
    }
}

// ============= Loading =============

/// Errors that can occur during configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<ConfigError> for crate::types::AppError {
    fn from(err: ConfigError) -> Self {
        crate::types::AppError::Config(err.to_string())
    }
}

impl ConsoleConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ConsoleConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus `GENIE_*` overrides from the environment and `.env`.
    #[cfg(feature = "native")]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config = ConsoleConfig::default();
        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `GENIE_API_BASE_URL`, `GENIE_API_TIMEOUT_SECS` and
    /// `GENIE_CHECKOUT_SCRIPT_URL` from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup("GENIE_API_BASE_URL") {
            self.api.base_url = base_url;
        }
        if let Some(timeout) = lookup("GENIE_API_TIMEOUT_SECS") {
            self.api.timeout_secs = timeout.parse().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "GENIE_API_TIMEOUT_SECS must be a number of seconds, got '{}'",
                    timeout
                ))
            })?;
        }
        if let Some(script_url) = lookup("GENIE_CHECKOUT_SCRIPT_URL") {
            self.checkout.script_url = script_url;
        }
        Ok(())
    }

    /// Validate the configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "api.base_url must not be empty".to_string(),
            ));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "api.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.session.token_key.is_empty() || self.session.user_key.is_empty() {
            return Err(ConfigError::ValidationError(
                "session storage keys must not be empty".to_string(),
            ));
        }
        if self.session.token_key == self.session.user_key {
            return Err(ConfigError::ValidationError(
                "session.token_key and session.user_key must differ".to_string(),
            ));
        }
        for (name, path) in [("routes.login", &self.routes.login), ("routes.home", &self.routes.home)] {
            if !path.starts_with('/') {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be an absolute path, got '{}'",
                    name, path
                )));
            }
        }
        Ok(())
    }
}
