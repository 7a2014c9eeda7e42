//! The test environment signal.
//!
//! The signal is the `testEnvironment` property of a settings store. When the
//! property has never been set, the `TEST_ENVIRONMENT` environment variable is
//! read instead so CI jobs can switch on pipeline mode without code changes.
//! Unlike `env_var_or_none`, values are read verbatim: an empty or blank
//! string is a present-but-falsy signal.

use crate::constants::{TEST_ENVIRONMENT_ENV, TEST_ENVIRONMENT_PROPERTY};
use crate::settings::SettingsStore;

/// Read-only view of the test environment signal.
#[derive(Clone, Copy)]
pub struct EnvironmentSignal<'a> {
    settings: &'a dyn SettingsStore,
}

impl<'a> EnvironmentSignal<'a> {
    pub fn new(settings: &'a dyn SettingsStore) -> Self {
        Self { settings }
    }

    /// Current signal value, `None` when unset everywhere.
    pub fn value(&self) -> Option<String> {
        self.settings
            .get(TEST_ENVIRONMENT_PROPERTY)
            .or_else(|| std::env::var(TEST_ENVIRONMENT_ENV).ok())
    }

    /// True iff the signal is present and not blank.
    pub fn is_pipeline_mode(&self) -> bool {
        self.value().is_some_and(|value| !value.trim().is_empty())
    }
}

impl std::fmt::Debug for EnvironmentSignal<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvironmentSignal")
            .field("value", &self.value())
            .finish()
    }
}
