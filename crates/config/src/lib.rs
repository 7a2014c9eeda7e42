//! Context configuration for browser-based end-to-end tests.
//!
//! This crate resolves environment-specific test configuration by merging a
//! saucelabs overlay with `(environment, config_key)` entries, publishes the
//! result into a process-wide settings store, and turns published settings
//! into WebDriver configuration.

pub mod constants;
mod loader;
pub mod settings;
pub mod source;
pub mod types;

pub use loader::{
    ConfigError, ContextConfigLoader, ContextConfigLoaderBuilder, EnvironmentSignal, MergedConfig,
    env_var_or_none, load_dotenv, merge_layers,
};
pub use settings::{MemorySettings, SettingsStore, is_sensitive_setting, system_properties};
pub use source::{ConfigSource, Entries, JsonDirSource, MemorySource, SourceError};
pub use types::{
    Browser, ConfigKey, ContextSettings, SauceLabsCredentials, Timeouts, WebDriverConfig,
    WebDriverConfigBuilder, WindowGeometry,
};
