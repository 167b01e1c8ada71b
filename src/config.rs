//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and then threaded into
//! the handlers through [`crate::state::AppState`]. Nothing reads the
//! environment at request time.
//!
//! ```bash
//! export NOTION_SECRET="secret_..."
//! export NOTION_DB="0123456789abcdef0123456789abcdef"
//! ```
//!
//! ## Notion Variables
//!
//! - `NOTION_SECRET` - Integration secret. When unset, every submission is
//!   answered with `500 {"error":"Notion secret is not configured"}`.
//! - `NOTION_DB` - Target database id. When unset, every submission is answered
//!   with `500 {"error":"Notion database ID is not configured"}`.
//! - `NOTION_API_URL` - API base URL (default: `https://api.notion.com/v1`)
//! - `NOTION_VERSION` - `Notion-Version` header (default: `2022-06-28`)
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use url::Url;

pub const DEFAULT_NOTION_API_URL: &str = "https://api.notion.com/v1";
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub notion: NotionConfig,
}

/// Settings for the Notion database submissions are forwarded to.
///
/// `secret` and `database_id` are optional on purpose: a deployment without
/// them still starts and answers each submission with a configuration error.
#[derive(Clone)]
pub struct NotionConfig {
    pub secret: Option<String>,
    pub database_id: Option<String>,
    pub api_url: String,
    pub api_version: String,
}

impl std::fmt::Debug for NotionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionConfig")
            .field("secret", &self.secret.as_deref().map(mask_secret))
            .field("database_id", &self.database_id)
            .field("api_url", &self.api_url)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl NotionConfig {
    /// Builds a configuration with the default API URL and version.
    pub fn new(secret: Option<String>, database_id: Option<String>) -> Self {
        Self {
            secret,
            database_id,
            api_url: DEFAULT_NOTION_API_URL.to_string(),
            api_version: DEFAULT_NOTION_VERSION.to_string(),
        }
    }

    /// Overrides the API base URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Loads the Notion settings from the environment.
    ///
    /// Empty values are treated as unset.
    pub fn from_env() -> Self {
        Self {
            secret: non_empty_var("NOTION_SECRET"),
            database_id: non_empty_var("NOTION_DB"),
            api_url: non_empty_var("NOTION_API_URL")
                .unwrap_or_else(|| DEFAULT_NOTION_API_URL.to_string()),
            api_version: non_empty_var("NOTION_VERSION")
                .unwrap_or_else(|| DEFAULT_NOTION_VERSION.to_string()),
        }
    }

    /// Returns whether both the secret and the database id are present.
    pub fn is_complete(&self) -> bool {
        self.secret.is_some() && self.database_id.is_some()
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Currently infallible; kept fallible so that new required variables do
    /// not change the signature.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            notion: NotionConfig::from_env(),
        })
    }

    /// Validates the configuration.
    ///
    /// A missing secret or database id is not an error here; see
    /// [`NotionConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `NOTION_API_URL` is not an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let api_url = Url::parse(&self.notion.api_url)
            .with_context(|| format!("NOTION_API_URL is not a valid URL: '{}'", self.notion.api_url))?;
        if api_url.scheme() != "http" && api_url.scheme() != "https" {
            anyhow::bail!(
                "NOTION_API_URL must use http or https, got '{}'",
                self.notion.api_url
            );
        }

        if self.notion.api_version.trim().is_empty() {
            anyhow::bail!("NOTION_VERSION must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Notion API: {} ({})", self.notion.api_url, self.notion.api_version);

        match &self.notion.secret {
            Some(secret) => tracing::info!("  Notion secret: {}", mask_secret(secret)),
            None => tracing::warn!("  Notion secret: not configured, submissions will fail"),
        }

        match &self.notion.database_id {
            Some(id) => tracing::info!("  Notion database: {}", id),
            None => tracing::warn!("  Notion database: not configured, submissions will fail"),
        }
    }
}

/// Reads an environment variable, treating an empty value as unset.
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Masks a secret for logging, keeping only its first four characters.
///
/// - `secret_abcdef` → `secr***`
/// - `abc` → `***`
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 4 {
        return "***".to_string();
    }

    let prefix: String = secret.chars().take(4).collect();
    format!("{}***", prefix)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const NOTION_VARS: [&str; 4] = ["NOTION_SECRET", "NOTION_DB", "NOTION_API_URL", "NOTION_VERSION"];

    fn clear_notion_vars() {
        // SAFETY: Tests touching the environment run serially
        unsafe {
            for key in NOTION_VARS {
                env::remove_var(key);
            }
        }
    }

    fn test_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            notion: NotionConfig::new(Some("secret_test".to_string()), Some("db".to_string())),
        }
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("secret_abcdef"), "secr***");
        assert_eq!(mask_secret("abcd"), "***");
        assert_eq!(mask_secret(""), "***");
    }

    #[test]
    fn test_notion_config_debug_hides_secret() {
        let notion = NotionConfig::new(Some("secret_abcdef".to_string()), None);
        let debug = format!("{:?}", notion);
        assert!(!debug.contains("secret_abcdef"));
        assert!(debug.contains("secr***"));
    }

    #[test]
    fn test_config_validation() {
        let mut config = test_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();
        config.notion.api_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.notion.api_url = "ftp://api.notion.com/v1".to_string();
        assert!(config.validate().is_err());

        config.notion.api_url = "http://127.0.0.1:9999/v1".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_notion_settings_still_valid() {
        let mut config = test_config();
        config.notion.secret = None;
        config.notion.database_id = None;

        assert!(config.validate().is_ok());
        assert!(!config.notion.is_complete());
    }

    #[test]
    #[serial]
    fn test_notion_config_from_env() {
        clear_notion_vars();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("NOTION_SECRET", "secret_from_env");
            env::set_var("NOTION_DB", "db_from_env");
        }

        let notion = NotionConfig::from_env();

        assert_eq!(notion.secret.as_deref(), Some("secret_from_env"));
        assert_eq!(notion.database_id.as_deref(), Some("db_from_env"));
        assert_eq!(notion.api_url, DEFAULT_NOTION_API_URL);
        assert_eq!(notion.api_version, DEFAULT_NOTION_VERSION);
        assert!(notion.is_complete());

        clear_notion_vars();
    }

    #[test]
    #[serial]
    fn test_empty_notion_values_are_unset() {
        clear_notion_vars();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("NOTION_SECRET", "");
            env::set_var("NOTION_DB", "   ");
            env::set_var("NOTION_API_URL", "");
        }

        let notion = NotionConfig::from_env();

        assert_eq!(notion.secret, None);
        assert_eq!(notion.database_id, None);
        assert_eq!(notion.api_url, DEFAULT_NOTION_API_URL);

        clear_notion_vars();
    }

    #[test]
    #[serial]
    fn test_notion_api_overrides() {
        clear_notion_vars();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("NOTION_API_URL", "http://localhost:8080/v1");
            env::set_var("NOTION_VERSION", "2025-09-03");
        }

        let notion = NotionConfig::from_env();

        assert_eq!(notion.api_url, "http://localhost:8080/v1");
        assert_eq!(notion.api_version, "2025-09-03");

        clear_notion_vars();
    }
}
