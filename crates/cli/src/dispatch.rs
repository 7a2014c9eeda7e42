//! Command dispatch logic.
//!
//! Responsibilities:
//! - Install the context config loader every command runs against.
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Output formatting (see `formatters` module).

use std::sync::Arc;

use anyhow::Result;
use webtest_config::ContextConfigLoader;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let loader = install_loader(&cli);

    match cli.command {
        Commands::Env => commands::env::run(&loader, cli.output),
        Commands::Merged(selector) => commands::merged::run(&loader, &selector, cli.output),
        Commands::Load(selector) => commands::load::run(&loader, &selector, cli.output),
    }
}

/// Replace the process-wide loader with one rooted at `--config-dir`.
///
/// Without the flag the builder falls back to `CONTEXT_CONFIG_DIR` and then
/// the default directory, matching what `get_instance` would build.
fn install_loader(cli: &Cli) -> Arc<ContextConfigLoader> {
    let mut builder = ContextConfigLoader::builder();
    if let Some(dir) = cli
        .config_dir
        .as_ref()
        .filter(|dir| !dir.as_os_str().to_string_lossy().trim().is_empty())
    {
        builder = builder.with_config_dir(dir.clone());
    }
    let loader = ContextConfigLoader::install(builder.build());
    tracing::debug!(
        loader_id = loader.id(),
        source = %loader.source().describe(),
        "Using context config source"
    );
    loader
}
