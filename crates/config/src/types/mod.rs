//! Configuration type definitions for WebDriver-based test runs.
//!
//! Responsibilities:
//! - Define the browser enum and `<browser>-<locale>` config keys.
//! - Define WebDriver timeouts, window geometry, and Sauce Labs credentials.
//! - Build a validated `WebDriverConfig` from published settings.
//! - Provide a typed view (`ContextSettings`) over common published settings.
//!
//! Does NOT handle:
//! - Merging or publishing settings (see `loader` module).
//! - Starting browsers or grid sessions.
//!
//! Invariants:
//! - Secret values use `secrecy::SecretString` and are never serialized.
//! - Durations are serialized as whole seconds.
//! - Defaults come from `constants`, not magic numbers.

mod browser;
mod context_settings;
mod driver;
mod saucelabs;

pub use browser::{Browser, ConfigKey};
pub use context_settings::ContextSettings;
pub use driver::{Timeouts, WebDriverConfig, WebDriverConfigBuilder, WindowGeometry};
pub use saucelabs::SauceLabsCredentials;

use crate::loader::ConfigError;

/// Parse a boolean setting, accepting `true/false`, `yes/no`, and `1/0`.
pub(crate) fn parse_bool_setting(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: format!("must be true or false (got '{raw}')"),
        }),
    }
}

/// Parse a whole number of seconds.
pub(crate) fn parse_secs_setting(var: &str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: format!("must be a whole number of seconds (got '{raw}')"),
    })
}
