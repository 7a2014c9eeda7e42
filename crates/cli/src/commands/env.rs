//! `env` command: report the test environment signal.

use anyhow::Result;
use webtest_config::ContextConfigLoader;

use crate::args::OutputFormat;
use crate::formatters::{EnvironmentReport, get_formatter};

pub fn run(loader: &ContextConfigLoader, format: OutputFormat) -> Result<()> {
    let report = EnvironmentReport {
        test_environment: loader.test_environment(),
        pipeline_mode: loader.is_pipeline_mode(),
        source: loader.source().describe(),
    };

    print!("{}", get_formatter(format).format_environment(&report)?);
    Ok(())
}
