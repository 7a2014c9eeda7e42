//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format command results as tab-separated key/value tables.
//!
//! Does NOT handle:
//! - Other output formats.

use std::fmt::Write;

use anyhow::Result;
use webtest_config::WindowGeometry;

use crate::formatters::{
    DEFAULT_MISSING_VALUE, EnvironmentReport, Formatter, LoadOutput, MergedOutput,
};

/// Table formatter.
pub struct TableFormatter;

fn row(output: &mut String, label: &str, value: impl std::fmt::Display) -> Result<()> {
    writeln!(output, "{label}:\t{value}")?;
    Ok(())
}

fn window_label(window: &WindowGeometry) -> String {
    if window.maximized {
        "maximized".to_string()
    } else {
        format!("{}x{}", window.width, window.height)
    }
}

impl Formatter for TableFormatter {
    fn format_environment(&self, report: &EnvironmentReport) -> Result<String> {
        let mut output = String::new();
        row(
            &mut output,
            "Test environment",
            report
                .test_environment
                .as_deref()
                .unwrap_or(DEFAULT_MISSING_VALUE),
        )?;
        row(&mut output, "Pipeline mode", report.pipeline_mode)?;
        row(&mut output, "Source", &report.source)?;
        Ok(output)
    }

    fn format_merged(&self, output: &MergedOutput) -> Result<String> {
        if output.settings.is_empty() {
            return Ok("No settings found.\n".to_string());
        }

        let mut rendered = String::new();
        writeln!(rendered, "Setting\tValue")?;
        writeln!(rendered, "-------\t-----")?;
        for (name, value) in &output.settings {
            writeln!(rendered, "{name}\t{value}")?;
        }
        Ok(rendered)
    }

    fn format_load(&self, output: &LoadOutput) -> Result<String> {
        let driver = &output.driver;
        let mut rendered = String::new();

        row(&mut rendered, "Environment", &output.environment)?;
        row(&mut rendered, "Config key", &output.config_key)?;
        row(&mut rendered, "Published settings", output.published)?;
        row(
            &mut rendered,
            "Application URL",
            output
                .context
                .application_url
                .as_ref()
                .map(|url| url.as_str())
                .unwrap_or(DEFAULT_MISSING_VALUE),
        )?;
        row(&mut rendered, "Browser", driver.browser)?;
        row(&mut rendered, "Headless", driver.headless)?;
        row(
            &mut rendered,
            "Locale",
            driver.locale.as_deref().unwrap_or(DEFAULT_MISSING_VALUE),
        )?;
        row(&mut rendered, "Window", window_label(&driver.window))?;
        row(
            &mut rendered,
            "Implicit wait",
            format!("{}s", driver.timeouts.implicit_wait.as_secs()),
        )?;
        row(
            &mut rendered,
            "Page load timeout",
            format!("{}s", driver.timeouts.page_load.as_secs()),
        )?;
        row(
            &mut rendered,
            "Script timeout",
            format!("{}s", driver.timeouts.script.as_secs()),
        )?;

        match &driver.grid {
            Some(grid) => {
                row(&mut rendered, "Grid", grid.hub_url()?)?;
                row(&mut rendered, "Grid user", &grid.username)?;
            }
            None => row(&mut rendered, "Grid", "local")?,
        }
        Ok(rendered)
    }
}
