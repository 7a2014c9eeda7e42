//! Centralized constants for the webtest-context workspace.
//!
//! This module contains property names, environment variable names, and
//! default values used across crates to avoid magic string duplication.

// =============================================================================
// Environment Signal
// =============================================================================

/// Process-wide property carrying the test environment signal.
pub const TEST_ENVIRONMENT_PROPERTY: &str = "testEnvironment";

/// Environment variable consulted when the property is not set.
pub const TEST_ENVIRONMENT_ENV: &str = "TEST_ENVIRONMENT";

// =============================================================================
// Config Source
// =============================================================================

/// Environment variable naming the root directory of the JSON config source.
pub const CONFIG_DIR_ENV: &str = "CONTEXT_CONFIG_DIR";

/// Default root directory of the JSON config source (relative to the cwd).
pub const DEFAULT_CONFIG_DIR: &str = "config/context";

/// Name of the environment-independent overlay namespace.
pub const SAUCELABS_NAMESPACE: &str = "saucelabs";

// =============================================================================
// Published Settings
// =============================================================================

/// GUI locale used by the application under test.
pub const GUI_LANGUAGE_KEY: &str = "guiLanguage";

/// Base URL of the application under test.
pub const APPLICATION_URL_KEY: &str = "applicationUrl";

/// Whether tests run against a remote grid.
pub const USE_GRID_KEY: &str = "useGrid";

/// Browser override (takes precedence over the config key's browser).
pub const BROWSER_KEY: &str = "browser";

/// Whether the browser runs headless.
pub const HEADLESS_KEY: &str = "headless";

/// Window size as `<width>x<height>` or `maximized`.
pub const WINDOW_SIZE_KEY: &str = "windowSize";

/// WebDriver timeouts in whole seconds.
pub const IMPLICIT_WAIT_KEY: &str = "implicitWait";
pub const PAGE_LOAD_TIMEOUT_KEY: &str = "pageLoadTimeout";
pub const SCRIPT_TIMEOUT_KEY: &str = "scriptTimeout";

pub const SAUCE_USERNAME_KEY: &str = "sauceUsername";
pub const SAUCE_ACCESS_KEY_KEY: &str = "sauceAccessKey";
pub const SAUCE_REGION_KEY: &str = "sauceRegion";

// =============================================================================
// Sauce Labs Environment Overrides
// =============================================================================

pub const SAUCE_USERNAME_ENV: &str = "SAUCE_USERNAME";
pub const SAUCE_ACCESS_KEY_ENV: &str = "SAUCE_ACCESS_KEY";
pub const SAUCE_REGION_ENV: &str = "SAUCE_REGION";

/// Default Sauce Labs data center.
pub const DEFAULT_SAUCE_REGION: &str = "us-west-1";

// =============================================================================
// WebDriver Defaults
// =============================================================================

/// Default implicit wait in seconds (disabled).
pub const DEFAULT_IMPLICIT_WAIT_SECS: u64 = 0;

/// Default page load timeout in seconds.
pub const DEFAULT_PAGE_LOAD_TIMEOUT_SECS: u64 = 60;

/// Default asynchronous script timeout in seconds.
pub const DEFAULT_SCRIPT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed value for any WebDriver timeout in seconds (10 minutes).
pub const MAX_TIMEOUT_SECS: u64 = 600;

/// Default browser window width in pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 1920;

/// Default browser window height in pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 1080;

/// Upper bound for window dimensions; anything larger is a typo.
pub const MAX_WINDOW_DIMENSION: u32 = 7680;

// =============================================================================
// Logging
// =============================================================================

/// Substrings marking a setting name whose value must never be logged.
pub const SENSITIVE_KEY_MARKERS: &[&str] = &["key", "password", "token", "secret"];
