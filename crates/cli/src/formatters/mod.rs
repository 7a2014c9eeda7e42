//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide table and JSON renderings of command results.
//! - Redact sensitive setting values before they reach the terminal.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - Tables use tab-separation for consistent alignment in standard terminals.
//! - Missing values render as `N/A` in tables and `null` in JSON.
//! - Empty merged results render as `No settings found.` in tables and `{}` in JSON.

use std::collections::BTreeMap;

use anyhow::Result;
use serde::Serialize;
use webtest_config::{ContextSettings, MergedConfig, WebDriverConfig, is_sensitive_setting};

use crate::args::OutputFormat;

mod json;
mod table;

pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Placeholder printed instead of sensitive values.
pub const REDACTED: &str = "<redacted>";

/// Representation of a missing value in table output.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

/// Result of the `env` command.
#[derive(Debug, Serialize)]
pub struct EnvironmentReport {
    pub test_environment: Option<String>,
    pub pipeline_mode: bool,
    pub source: String,
}

/// Result of the `merged` command. `settings` is already redacted.
#[derive(Debug, Serialize)]
pub struct MergedOutput {
    pub environment: String,
    pub config_key: String,
    pub settings: BTreeMap<String, String>,
}

/// Result of the `load` command.
#[derive(Debug, Serialize)]
pub struct LoadOutput {
    pub environment: String,
    pub config_key: String,
    pub published: usize,
    pub context: ContextSettings,
    pub driver: WebDriverConfig,
}

/// Trait for formatting command output.
pub trait Formatter {
    fn format_environment(&self, report: &EnvironmentReport) -> Result<String>;
    fn format_merged(&self, output: &MergedOutput) -> Result<String>;
    fn format_load(&self, output: &LoadOutput) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Copy of `merged` with sensitive values replaced by [`REDACTED`].
pub fn redact_settings(merged: &MergedConfig) -> BTreeMap<String, String> {
    merged
        .iter()
        .map(|(name, value)| {
            let shown = if is_sensitive_setting(name) {
                REDACTED.to_string()
            } else {
                value.clone()
            };
            (name.clone(), shown)
        })
        .collect()
}
