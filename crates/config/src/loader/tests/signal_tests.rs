//! Environment signal tests through the loader.
//!
//! Responsibilities:
//! - Test pipeline mode for unset, empty, and non-empty signals.
//! - Test `test_environment` returns the exact signal value.

use serial_test::serial;

use super::{isolated_loader, staging_source};
use crate::constants::{TEST_ENVIRONMENT_ENV, TEST_ENVIRONMENT_PROPERTY};
use crate::settings::SettingsStore;

#[test]
#[serial]
fn test_pipeline_mode_false_when_unset() {
    temp_env::with_vars([(TEST_ENVIRONMENT_ENV, None::<&str>)], || {
        let (loader, _settings) = isolated_loader(staging_source());
        assert!(!loader.is_pipeline_mode());
        assert_eq!(loader.test_environment(), None);
    });
}

#[test]
#[serial]
fn test_pipeline_mode_false_when_empty() {
    temp_env::with_vars([(TEST_ENVIRONMENT_ENV, None::<&str>)], || {
        let (loader, settings) = isolated_loader(staging_source());
        settings.set(TEST_ENVIRONMENT_PROPERTY, "");

        assert!(!loader.is_pipeline_mode());
        assert_eq!(loader.test_environment().as_deref(), Some(""));
    });
}

#[test]
#[serial]
fn test_pipeline_mode_true_when_set() {
    temp_env::with_vars([(TEST_ENVIRONMENT_ENV, None::<&str>)], || {
        let (loader, settings) = isolated_loader(staging_source());
        settings.set(TEST_ENVIRONMENT_PROPERTY, "staging-ta");

        assert!(loader.is_pipeline_mode());
    });
}

#[test]
#[serial]
fn test_test_environment_returns_last_value() {
    temp_env::with_vars([(TEST_ENVIRONMENT_ENV, None::<&str>)], || {
        let (loader, settings) = isolated_loader(staging_source());

        settings.set(TEST_ENVIRONMENT_PROPERTY, "staging-ta");
        settings.set(TEST_ENVIRONMENT_PROPERTY, "production");
        assert_eq!(loader.test_environment().as_deref(), Some("production"));

        settings.remove(TEST_ENVIRONMENT_PROPERTY);
        assert_eq!(loader.test_environment(), None);
    });
}

#[test]
#[serial]
fn test_pipeline_mode_from_env_var() {
    temp_env::with_vars([(TEST_ENVIRONMENT_ENV, Some("staging-ta"))], || {
        let (loader, _settings) = isolated_loader(staging_source());
        assert!(loader.is_pipeline_mode());
        assert_eq!(loader.test_environment().as_deref(), Some("staging-ta"));
    });
}

#[test]
#[serial]
fn test_pipeline_mode_false_when_blank() {
    temp_env::with_vars([(TEST_ENVIRONMENT_ENV, Some("  "))], || {
        let (loader, settings) = isolated_loader(staging_source());
        assert!(!loader.is_pipeline_mode());
        assert_eq!(loader.test_environment().as_deref(), Some("  "));

        settings.set(TEST_ENVIRONMENT_PROPERTY, " \t");
        assert!(!loader.is_pipeline_mode());
    });
}
