//! Error types for the Extractor
//!
//! Parsing itself never fails; problems with the input are reported as
//! warnings in the parse result. These errors cover configuration only.

use thiserror::Error;

/// Errors that can occur while setting up an extractor
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration value out of range
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read as TOML
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration could not be written as TOML
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
