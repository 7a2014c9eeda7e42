//! Error types for configuration handling.
//!
//! Responsibilities:
//! - Define error variants for driver configuration and dotenv failures.
//!
//! Does NOT handle:
//! - Config source failures (see `source::SourceError`; the loader absorbs those).
//!
//! Invariants:
//! - All error variants include context for debugging (setting names, values).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur while turning settings into driver configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown browser '{0}' (expected chrome, firefox, edge, or safari)")]
    UnknownBrowser(String),

    #[error("Invalid config key '{key}': {message}")]
    InvalidConfigKey { key: String, message: String },

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Invalid URL for {var}: {message}")]
    InvalidUrl { var: String, message: String },

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },

    #[error("invalid window size: {message}")]
    InvalidWindowSize { message: String },

    #[error("Grid execution requested but Sauce Labs credentials are incomplete (missing {0})")]
    MissingGridCredentials(&'static str),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
