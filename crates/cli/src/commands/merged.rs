//! `merged` command: print the merged configuration without publishing it.

use anyhow::Result;
use webtest_config::ContextConfigLoader;

use super::resolve_selection;
use crate::args::{OutputFormat, SelectorArgs};
use crate::formatters::{MergedOutput, get_formatter, redact_settings};

pub fn run(
    loader: &ContextConfigLoader,
    selector: &SelectorArgs,
    format: OutputFormat,
) -> Result<()> {
    let selection = resolve_selection(loader, selector)?;
    let merged = loader.merged_config(
        Some(selection.environment.as_str()),
        Some(selection.config_key.as_str()),
    );
    tracing::debug!(
        environment = %selection.environment,
        config_key = %selection.config_key,
        settings = merged.len(),
        "Computed merged configuration"
    );

    let output = MergedOutput {
        environment: selection.environment,
        config_key: selection.config_key,
        settings: redact_settings(&merged),
    };

    print!("{}", get_formatter(format).format_merged(&output)?);
    Ok(())
}
