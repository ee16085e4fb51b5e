//! Configuration management for rewardsdesk
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::CONFIG_GENERATED;
use crate::utils::datetime;
use crate::utils::number::NumberFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Rows per page when the page opens
    pub page_size: usize,
    /// Page sizes offered by the pagination footer
    pub page_size_options: Vec<usize>,
    /// Animate rows in when a page arrives
    pub animation: bool,
    /// Frame tick in milliseconds
    pub tick_rate_ms: u64,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// strftime pattern for date columns
    pub date_format: String,
    /// Thousands separator for numbers, empty to disable grouping
    pub thousands_separator: String,
    pub decimal_mark: String,
    /// Appended to coin amounts
    pub coin_suffix: String,
}

/// Demo catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Simulated latency of every catalog call, in milliseconds
    pub latency_ms: u64,
    /// Number of generated prizes
    pub demo_rows: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file
    pub enabled: bool,
    /// Minimum level: error, warn, info, debug or trace
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            page_size_options: vec![10, 20, 50, 100],
            animation: true,
            tick_rate_ms: 80,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: datetime::DEFAULT_DISPLAY_FORMAT.to_string(),
            thousands_separator: ".".to_string(),
            decimal_mark: ",".to_string(),
            coin_suffix: " coins".to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            latency_ms: 300,
            demo_rows: 137,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl DisplayConfig {
    /// Number format for coin amounts
    pub fn coin_format(&self) -> NumberFormat {
        NumberFormat::default()
            .with_separators(
                self.thousands_separator.chars().next(),
                self.decimal_mark.chars().next().unwrap_or('.'),
            )
            .with_suffix(self.coin_suffix.clone())
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.level).with_context(|| format!("Invalid log level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

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
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("rewardsdesk.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("rewardsdesk").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate pagination
        if self.ui.page_size_options.is_empty() {
            anyhow::bail!("page_size_options cannot be empty");
        }
        if self.ui.page_size_options.contains(&0) {
            anyhow::bail!("page_size_options cannot contain 0");
        }
        if !self.ui.page_size_options.contains(&self.ui.page_size) {
            anyhow::bail!(
                "page_size {} must be one of page_size_options {:?}",
                self.ui.page_size,
                self.ui.page_size_options
            );
        }
        if self.ui.tick_rate_ms == 0 || self.ui.tick_rate_ms > 1000 {
            anyhow::bail!("tick_rate_ms must be between 1 and 1000, got {}", self.ui.tick_rate_ms);
        }

        // Validate display formats
        if !datetime::is_valid_pattern(&self.display.date_format) {
            anyhow::bail!("Invalid date_format '{}'", self.display.date_format);
        }
        if self.display.thousands_separator.chars().count() > 1 {
            anyhow::bail!(
                "thousands_separator must be a single character or empty, got '{}'",
                self.display.thousands_separator
            );
        }
        if self.display.decimal_mark.chars().count() != 1 {
            anyhow::bail!(
                "decimal_mark must be a single character, got '{}'",
                self.display.decimal_mark
            );
        }

        // Validate catalog simulation
        if self.catalog.latency_ms > 10_000 {
            anyhow::bail!("latency_ms cannot exceed 10000");
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# rewardsdesk Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::API_DATE_FORMAT)
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
            .map(|dir| dir.join("rewardsdesk"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
