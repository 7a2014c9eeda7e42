//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read `CONTEXT_CONFIG_DIR` and `TEST_ENVIRONMENT` as argument defaults.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "webtest-cli")]
#[command(about = "Inspect and publish context configuration for browser tests", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  webtest-cli env\n  webtest-cli merged -e staging-ta -k chrome-fr\n  webtest-cli --config-dir ./config/context load -e staging-ta -k chrome-fr -o json\n"
)]
pub struct Cli {
    /// Directory holding `<environment>.json` and `saucelabs.json`.
    #[arg(long, global = true, env = "CONTEXT_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the test environment signal and whether pipeline mode is on
    Env,

    /// Print the merged configuration without publishing it
    Merged(SelectorArgs),

    /// Publish the merged configuration and print the resulting driver config
    Load(SelectorArgs),
}

/// Selects which configuration to resolve.
#[derive(Args, Debug, Clone)]
pub struct SelectorArgs {
    /// Environment name (e.g. staging-ta); defaults to the test environment signal
    #[arg(short, long, env = "TEST_ENVIRONMENT")]
    pub environment: Option<String>,

    /// Config key as <browser>-<locale> (e.g. chrome-fr)
    #[arg(short = 'k', long)]
    pub config_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_merged_arguments() {
        let cli = Cli::try_parse_from([
            "webtest-cli",
            "-o",
            "json",
            "merged",
            "-e",
            "staging-ta",
            "-k",
            "chrome-fr",
        ])
        .unwrap();

        assert_eq!(cli.output, OutputFormat::Json);
        match cli.command {
            Commands::Merged(selector) => {
                assert_eq!(selector.environment.as_deref(), Some("staging-ta"));
                assert_eq!(selector.config_key, "chrome-fr");
            }
            _ => panic!("expected merged subcommand"),
        }
    }

    #[test]
    fn test_config_key_is_required() {
        assert!(Cli::try_parse_from(["webtest-cli", "load", "-e", "staging-ta"]).is_err());
    }
}
