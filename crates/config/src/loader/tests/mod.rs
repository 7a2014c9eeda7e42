//! Tests for the context configuration loader.
//!
//! Responsibilities:
//! - Test singleton identity, reset, and install.
//! - Test the environment signal and pipeline mode accessors.
//! - Test merge precedence and absence handling.
//! - Test publishing into the settings store.
//!
//! Invariants:
//! - Tests that touch environment variables or the global loader slot are
//!   `#[serial]`.
//! - Loaders under test get their own `MemorySettings` unless the test is
//!   about the process-wide defaults.

use std::sync::Arc;

use crate::loader::ContextConfigLoader;
use crate::settings::MemorySettings;
use crate::source::MemorySource;

pub mod signal_tests;

/// Source with a `staging-ta` environment and a saucelabs overlay.
pub fn staging_source() -> MemorySource {
    MemorySource::new()
        .with_scoped(
            "staging-ta",
            "chrome-fr",
            [
                ("guiLanguage", "fr"),
                ("applicationUrl", "https://staging-ta.example.com"),
            ],
        )
        .with_scoped("staging-ta", "firefox-de", [("guiLanguage", "de")])
        .with_saucelabs([
            ("useGrid", "true"),
            ("sauceRegion", "eu-central-1"),
            ("guiLanguage", "en"),
        ])
}

/// Loader over `source` publishing into a fresh in-memory store.
pub fn isolated_loader(source: MemorySource) -> (ContextConfigLoader, Arc<MemorySettings>) {
    let settings = Arc::new(MemorySettings::new());
    let loader = ContextConfigLoader::new(Arc::new(source), settings.clone());
    (loader, settings)
}
