//! Command implementations for webtest-cli.

pub mod env;
pub mod load;
pub mod merged;

use anyhow::{Context, Result, bail};
use webtest_config::ContextConfigLoader;

use crate::args::SelectorArgs;

/// Environment and config key a command should resolve.
pub(crate) struct Selection {
    pub environment: String,
    pub config_key: String,
}

/// Resolve `--environment`, falling back to the loader's signal.
///
/// The config key is passed through trimmed; only `load` needs it to name a
/// browser.
pub(crate) fn resolve_selection(
    loader: &ContextConfigLoader,
    selector: &SelectorArgs,
) -> Result<Selection> {
    let environment = match selector
        .environment
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
    {
        Some(environment) => environment.to_string(),
        None => {
            let signal = loader
                .test_environment()
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty())
                .context("No environment given: pass --environment or set TEST_ENVIRONMENT")?;
            tracing::debug!(environment = %signal, "Using test environment signal");
            signal
        }
    };

    let config_key = selector.config_key.trim();
    if config_key.is_empty() {
        bail!("--config-key must not be empty");
    }

    Ok(Selection {
        environment,
        config_key: config_key.to_string(),
    })
}
