//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use draftwatch_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Issue database location
    #[serde(default)]
    pub store: StoreSettings,

    /// Defaults applied when importing and reviewing
    #[serde(default)]
    pub defaults: Defaults,

    /// Email parsing options
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Where issues are stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSettings {
    /// SQLite database path; `~/.draftwatch/issues.db` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
}

/// Import and review defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Squad recorded on imported issues
    #[serde(default)]
    pub squad: String,

    /// Uploader recorded on imported issues
    #[serde(default = "default_uploader")]
    pub uploaded_by: String,

    /// Reviewer name recorded on reviews
    #[serde(default = "default_reviewer")]
    pub reviewer: String,

    /// Author recorded on notes
    #[serde(default = "default_author")]
    pub author: String,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Directory holding the config file and default database.
    pub fn dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".draftwatch"))
    }

    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("config.toml"))
    }

    /// Load configuration from the default location, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from a file, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config
            .extractor
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))?;
        Ok(config)
    }

    /// Load configuration from a file, writing the defaults there if it does
    /// not exist yet.
    ///
    /// Failing to write the defaults is logged and otherwise ignored.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        let config = Self::load_from(path)?;
        if !path.exists() {
            match config.save_to(path) {
                Ok(()) => info!("Wrote default config to {}", path.display()),
                Err(e) => warn!("Could not write default config to {}: {}", path.display(), e),
            }
        }
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Resolve the database path.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.store.database {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::dir()?.join("issues.db")),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            squad: String::new(),
            uploaded_by: default_uploader(),
            reviewer: default_reviewer(),
            author: default_author(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_uploader() -> String {
    "Unknown".to_string()
}

fn default_reviewer() -> String {
    "Quality Team".to_string()
}

fn default_author() -> String {
    "Current User".to_string()
}
