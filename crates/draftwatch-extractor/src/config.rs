//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum input text length (characters)
    pub max_text_length: usize,

    /// Lines starting with this prefix are separators, never description text
    pub separator_prefix: String,

    /// Emit a warning when no job number is supplied or detected
    pub warn_missing_job_number: bool,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.max_text_length == 0 {
            return Err(ExtractorError::Config(
                "max_text_length must be greater than 0".to_string(),
            ));
        }
        if self.separator_prefix.trim().is_empty() {
            return Err(ExtractorError::Config(
                "separator_prefix must contain a non-whitespace character".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// Default configuration, suited to a pasted email
    fn default() -> Self {
        Self {
            max_text_length: 100_000,
            separator_prefix: "--".to_string(),
            warn_missing_job_number: true,
        }
    }
}

impl ExtractorConfig {
    /// Strict preset: small inputs only
    pub fn strict() -> Self {
        Self {
            max_text_length: 20_000,
            ..Self::default()
        }
    }

    /// Lenient preset: large inputs, no nagging about job numbers
    pub fn lenient() -> Self {
        Self {
            max_text_length: 1_000_000,
            warn_missing_job_number: false,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
