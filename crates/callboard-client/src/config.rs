use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ClientError, ClientResult};
use crate::loader::DataSource;

pub const DEFAULT_PERFORMANCES_PATH: &str = "../data/performances.json";
pub const DEFAULT_LINEUPS_PATH: &str = "lineups.json";
pub const DEFAULT_SUBMIT_PATH: &str = "/";
pub const DEFAULT_FORM_NAME: &str = "performances";

/// Configuration for callboard.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (CALLBOARD_* prefix)
/// 3. Config file (~/.config/callboard/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the published site.
    ///
    /// When set, data paths are fetched relative to it and submissions are
    /// posted to it. When unset, data paths are read from disk.
    ///
    /// Can be set via:
    /// - CLI: --site-url https://example.org/signup/
    /// - ENV: CALLBOARD_SITE_URL
    /// - Config: site_url = "..."
    #[serde(default)]
    pub site_url: Option<String>,

    /// Performance data for the signup form.
    #[serde(default = "default_performances_path")]
    pub performances_path: String,

    /// Lineup data for the lineup board.
    #[serde(default = "default_lineups_path")]
    pub lineups_path: String,

    /// Path the signup form is posted to, relative to `site_url`.
    #[serde(default = "default_submit_path")]
    pub submit_path: String,

    /// Value of the hidden `form-name` field.
    #[serde(default = "default_form_name")]
    pub form_name: String,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logger settings for the binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_coloured")]
    pub coloured: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            coloured: default_coloured(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_url: None,
            performances_path: default_performances_path(),
            lineups_path: default_lineups_path(),
            submit_path: default_submit_path(),
            form_name: default_form_name(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/callboard/config.toml
    /// Reads environment variables with CALLBOARD_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new()
            .context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path.to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder.add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("callboard");
        builder.add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build()
            .context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration, letting a `--site-url` flag win when given.
    pub fn load_with_site_url(site_url: Option<String>) -> Result<Self> {
        let mut config = Self::load()?;
        if site_url.is_some() {
            config.site_url = site_url;
        }
        Ok(config)
    }

    pub fn performances_source(&self) -> ClientResult<DataSource> {
        DataSource::resolve(&self.performances_path, self.site_url.as_deref())
    }

    pub fn lineups_source(&self) -> ClientResult<DataSource> {
        DataSource::resolve(&self.lineups_path, self.site_url.as_deref())
    }

    /// Absolute URL submissions are posted to.
    ///
    /// # Errors
    ///
    /// Fails when `submit_path` is relative and no `site_url` is set.
    pub fn submit_url(&self) -> ClientResult<reqwest::Url> {
        match DataSource::resolve(&self.submit_path, self.site_url.as_deref())? {
            DataSource::Url(url) => Ok(url),
            DataSource::File(_) => Err(ClientError::InvalidUrl {
                url: self.submit_path.clone(),
                message: "set site_url to submit a relative path".to_string(),
            }),
        }
    }
}

fn default_performances_path() -> String {
    DEFAULT_PERFORMANCES_PATH.to_string()
}

fn default_lineups_path() -> String {
    DEFAULT_LINEUPS_PATH.to_string()
}

fn default_submit_path() -> String {
    DEFAULT_SUBMIT_PATH.to_string()
}

fn default_form_name() -> String {
    DEFAULT_FORM_NAME.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_coloured() -> bool {
    true
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/callboard/config.toml
/// - macOS: ~/Library/Application Support/callboard/config.toml
/// - Windows: %APPDATA%\callboard\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("callboard")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Callboard Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (CALLBOARD_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Base URL of the published site. Data files are fetched relative to it and
# the signup form is posted to it. Leave unset to read data files from disk.
#
# Can also be set via:
# - CLI: callboard --site-url https://example.org/signup/ signup
# - Environment: CALLBOARD_SITE_URL=https://example.org/signup/
#site_url = "https://example.org/signup/"

# Data files, relative to site_url (or the working directory)
performances_path = "../data/performances.json"
lineups_path = "lineups.json"

# Where the signup form is posted, relative to site_url
submit_path = "/"

# Hidden form-name field sent with every submission
form_name = "performances"

[logging]
level = "info"
coloured = true
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config())
        .context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.site_url.is_none());
        assert_eq!(config.performances_path, "../data/performances.json");
        assert_eq!(config.lineups_path, "lineups.json");
        assert_eq!(config.submit_path, "/");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_load() {
        // Should not fail even if config file doesn't exist
        let result = Config::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_site_url_flag_wins() {
        let config = Config::load_with_site_url(Some("https://example.org/signup/".to_string()));
        assert_eq!(
            config.unwrap().site_url.as_deref(),
            Some("https://example.org/signup/")
        );
    }

    #[test]
    fn test_sources_without_site_url_are_files() {
        let config = Config::default();
        assert_eq!(
            config.performances_source().unwrap(),
            DataSource::File(PathBuf::from("../data/performances.json"))
        );
        assert!(config.submit_url().is_err());
    }

    #[test]
    fn test_sources_resolve_against_site_url() {
        let config = Config {
            site_url: Some("https://example.org/signup/".to_string()),
            ..Config::default()
        };
        let DataSource::Url(url) = config.performances_source().unwrap() else {
            panic!("expected a URL source");
        };
        assert_eq!(url.as_str(), "https://example.org/data/performances.json");
        assert_eq!(config.submit_url().unwrap().as_str(), "https://example.org/");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }
}
