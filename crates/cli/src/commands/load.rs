//! `load` command: publish the merged configuration and print the driver
//! configuration it produces.

use anyhow::{Context, Result};
use webtest_config::{ConfigKey, ContextConfigLoader, ContextSettings, WebDriverConfig};

use super::resolve_selection;
use crate::args::{OutputFormat, SelectorArgs};
use crate::formatters::{LoadOutput, get_formatter};

pub fn run(
    loader: &ContextConfigLoader,
    selector: &SelectorArgs,
    format: OutputFormat,
) -> Result<()> {
    let selection = resolve_selection(loader, selector)?;
    let config_key = selection
        .config_key
        .parse::<ConfigKey>()
        .context("Invalid --config-key")?;

    let published = loader.load_config(
        Some(selection.environment.as_str()),
        Some(config_key.as_str()),
    );
    tracing::info!(
        environment = %selection.environment,
        config_key = %config_key,
        published,
        "Published context configuration"
    );

    let settings = loader.settings().as_ref();
    let context = ContextSettings::from_store(settings).context("Invalid published settings")?;
    let driver = WebDriverConfig::from_settings(&config_key, settings)
        .context("Failed to build WebDriver configuration")?;

    let output = LoadOutput {
        environment: selection.environment,
        config_key: config_key.to_string(),
        published,
        context,
        driver,
    };

    print!("{}", get_formatter(format).format_load(&output)?);
    Ok(())
}
