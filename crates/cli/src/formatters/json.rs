//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format command results as pretty-printed JSON.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;

use crate::formatters::{EnvironmentReport, Formatter, LoadOutput, MergedOutput};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_environment(&self, report: &EnvironmentReport) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(report)?))
    }

    fn format_merged(&self, output: &MergedOutput) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(output)?))
    }

    fn format_load(&self, output: &LoadOutput) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(output)?))
    }
}
