//! Context configuration loader.
//!
//! Responsibilities:
//! - Merge the saucelabs overlay and `(environment, config_key)` entries.
//! - Publish merged entries into a `SettingsStore`.
//! - Expose the test environment signal and pipeline mode.
//! - Own the process-wide loader singleton and its reset hook.
//! - Load `.env` files behind the `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - Reading configuration files (see `source`).
//! - Interpreting published values (see `types`).
//!
//! Invariants / Assumptions:
//! - Scoped entries take precedence over saucelabs overlay entries.
//! - Missing environments, keys, and unreadable sources degrade to empty entries.
//! - Only keys present in a merge result are ever written to the settings store.

mod context;
mod env;
mod error;
mod merge;
mod signal;

pub use context::{ContextConfigLoader, ContextConfigLoaderBuilder, MergedConfig};
pub use env::{env_var_or_none, load_dotenv};
pub use error::ConfigError;
pub use merge::merge_layers;
pub use signal::EnvironmentSignal;

#[cfg(test)]
mod tests;
