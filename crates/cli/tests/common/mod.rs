//! Shared test utilities for webtest-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write throwaway context config directories.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - Host `SAUCE_*`, `TEST_ENVIRONMENT` and `CONTEXT_CONFIG_DIR` never leak in.

#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// Returns a hermetic `webtest-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Variables that feed the loader or grid credentials are cleared.
pub fn webtest_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("webtest-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("CONTEXT_CONFIG_DIR")
        .env_remove("TEST_ENVIRONMENT")
        .env_remove("SAUCE_USERNAME")
        .env_remove("SAUCE_ACCESS_KEY")
        .env_remove("SAUCE_REGION")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic command already pointed at `dir` via `--config-dir`.
pub fn webtest_cmd_in(dir: &Path) -> Command {
    let mut cmd = webtest_cmd();
    cmd.arg("--config-dir").arg(dir);
    cmd
}

/// Creates a config directory with a `staging-ta` environment and a
/// saucelabs overlay that enables the grid.
pub fn staging_config_dir() -> TempDir {
    let dir = TempDir::new().unwrap();

    let staging = serde_json::json!({
        "chrome-fr": {
            "guiLanguage": "fr",
            "applicationUrl": "https://staging-ta.example.com",
            "windowSize": "1280x720"
        },
        "firefox-de": {
            "guiLanguage": "de",
            "useGrid": false,
            "headless": true
        },
        "edge-nl": {
            "windowSize": "huge"
        },
        "default": {
            "guiLanguage": "nl"
        }
    });
    let saucelabs = serde_json::json!({
        "useGrid": true,
        "sauceUsername": "ci-bot",
        "sauceAccessKey": "overlay-secret",
        "sauceRegion": "eu-central-1",
        "guiLanguage": "en"
    });

    std::fs::write(dir.path().join("staging-ta.json"), staging.to_string()).unwrap();
    std::fs::write(dir.path().join("saucelabs.json"), saucelabs.to_string()).unwrap();
    dir
}
