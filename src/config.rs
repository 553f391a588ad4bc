//! Configuration management for plankan
//!
//! This module handles loading, parsing, and validation of configuration
//! files, plus credential resolution from the environment.

use crate::constants::{CONFIG_GENERATED, ENV_API_URL, ENV_PASSWORD, ENV_USERNAME};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Planka server connection settings.
///
/// Every field can be overridden by its environment variable
/// (`PLANKA_API_URL`, `PLANKA_USERNAME`, `PLANKA_PASSWORD`), which takes
/// precedence over the file value.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the Planka instance, e.g. "https://planka.example.org"
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Explicit name of the list that "mark done" targets, matched
    /// case-insensitively. When unset, a fixed keyword set is used
    /// (done, completed, tamamlandı, tamamlanan, finished).
    pub done_list: Option<String>,
    /// Show key hints in the status bar when no notification is displayed
    pub show_key_hints: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable file logging
    pub enabled: bool,
    /// Log file path; defaults to "plankan.log" in the current directory
    pub file: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            done_list: None,
            show_key_hints: true,
        }
    }
}

/// Resolved server credentials, guaranteed complete.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub url: String,
    pub username: String,
    pub password: String,
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file();

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    pub fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("plankan.toml");
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("plankan").join("config.toml");
            if xdg_config.exists() {
                return Some(xdg_config);
            }
        }

        None
    }

    /// The locations [`Config::find_config_file`] probes, for error messages.
    pub fn search_locations() -> Vec<PathBuf> {
        let mut locations = vec![PathBuf::from("plankan.toml")];
        if let Some(config_dir) = dirs::config_dir() {
            locations.push(config_dir.join("plankan").join("config.toml"));
        }
        locations
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.server.url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("server.url must start with http:// or https://, got '{url}'");
            }
        }

        if let Some(done_list) = &self.ui.done_list {
            if done_list.trim().is_empty() {
                anyhow::bail!("ui.done_list cannot be empty when set");
            }
        }

        Ok(())
    }

    /// Resolve the complete server credentials.
    ///
    /// Environment variables win over the `[server]` section. Missing values
    /// are a fatal startup condition; the error names every missing variable
    /// and the searched config locations.
    pub fn credentials(&self) -> Result<Credentials> {
        self.credentials_with(|key| std::env::var(key).ok())
    }

    /// Credential resolution with an injected environment lookup, so the
    /// precedence rules can be exercised without touching process state.
    pub fn credentials_with(&self, env: impl Fn(&str) -> Option<String>) -> Result<Credentials> {
        let url = env(ENV_API_URL).or_else(|| self.server.url.clone());
        let username = env(ENV_USERNAME).or_else(|| self.server.username.clone());
        let password = env(ENV_PASSWORD).or_else(|| self.server.password.clone());

        let mut missing = Vec::new();
        if url.is_none() {
            missing.push(ENV_API_URL);
        }
        if username.is_none() {
            missing.push(ENV_USERNAME);
        }
        if password.is_none() {
            missing.push(ENV_PASSWORD);
        }

        if !missing.is_empty() {
            let searched = Self::search_locations()
                .iter()
                .map(|p| format!("  - {}", p.display()))
                .collect::<Vec<_>>()
                .join("\n");
            anyhow::bail!(
                "Missing Planka credentials: {}.\n\
                 Set them as environment variables, or in the [server] section of:\n{}",
                missing.join(", "),
                searched
            );
        }

        // The is_none checks above guarantee all three are present
        Ok(Credentials {
            url: url.unwrap_or_default(),
            username: username.unwrap_or_default(),
            password: password.unwrap_or_default(),
        })
    }

    /// Log file path when file logging is enabled
    pub fn log_file(&self) -> PathBuf {
        self.logging.file.clone().unwrap_or_else(|| PathBuf::from("plankan.log"))
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Plankan Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("plankan"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
