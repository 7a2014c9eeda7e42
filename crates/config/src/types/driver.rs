//! WebDriver configuration.
//!
//! Responsibilities:
//! - Define timeouts and window geometry with validated bounds.
//! - Provide `WebDriverConfigBuilder` with defaults for every field.
//! - Build a `WebDriverConfig` from a config key and published settings.
//!
//! Does NOT handle:
//! - Launching drivers or translating into vendor capabilities.
//!
//! Invariants:
//! - Every timeout is at most `MAX_TIMEOUT_SECS`; page load and script timeouts are > 0.
//! - Window dimensions are in `1..=MAX_WINDOW_DIMENSION`.
//! - Grid execution always carries credentials.

use std::time::Duration;

use serde::Serialize;

use super::browser::{Browser, ConfigKey};
use super::saucelabs::SauceLabsCredentials;
use super::{parse_bool_setting, parse_secs_setting};
use crate::constants::{
    BROWSER_KEY, DEFAULT_IMPLICIT_WAIT_SECS, DEFAULT_PAGE_LOAD_TIMEOUT_SECS,
    DEFAULT_SCRIPT_TIMEOUT_SECS, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, GUI_LANGUAGE_KEY,
    HEADLESS_KEY, IMPLICIT_WAIT_KEY, MAX_TIMEOUT_SECS, MAX_WINDOW_DIMENSION,
    PAGE_LOAD_TIMEOUT_KEY, SCRIPT_TIMEOUT_KEY, USE_GRID_KEY, WINDOW_SIZE_KEY,
};
use crate::loader::ConfigError;
use crate::settings::SettingsStore;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }
}

/// WebDriver timeouts (serialized as seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timeouts {
    #[serde(with = "duration_seconds")]
    pub implicit_wait: Duration,
    #[serde(with = "duration_seconds")]
    pub page_load: Duration,
    #[serde(with = "duration_seconds")]
    pub script: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            implicit_wait: Duration::from_secs(DEFAULT_IMPLICIT_WAIT_SECS),
            page_load: Duration::from_secs(DEFAULT_PAGE_LOAD_TIMEOUT_SECS),
            script: Duration::from_secs(DEFAULT_SCRIPT_TIMEOUT_SECS),
        }
    }
}

impl Timeouts {
    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("implicit wait", self.implicit_wait),
            ("page load timeout", self.page_load),
            ("script timeout", self.script),
        ] {
            if value.as_secs() > MAX_TIMEOUT_SECS {
                return Err(ConfigError::InvalidTimeout {
                    message: format!(
                        "{name} exceeds maximum allowed value of {MAX_TIMEOUT_SECS} seconds"
                    ),
                });
            }
        }

        if self.page_load.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                message: "page load timeout must be greater than 0 seconds".to_string(),
            });
        }
        if self.script.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                message: "script timeout must be greater than 0 seconds".to_string(),
            });
        }
        Ok(())
    }
}

/// Browser window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowGeometry {
    pub width: u32,
    pub height: u32,
    /// Maximize instead of resizing; `width`/`height` are then ignored.
    pub maximized: bool,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            maximized: false,
        }
    }
}

impl WindowGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            maximized: false,
        }
    }

    pub fn maximized() -> Self {
        Self {
            maximized: true,
            ..Self::default()
        }
    }

    /// Parse `<width>x<height>` (e.g. `1280x720`) or `maximized`.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("maximized") {
            return Ok(Self::maximized());
        }

        let invalid = || ConfigError::InvalidWindowSize {
            message: format!("expected <width>x<height> or 'maximized' (got '{raw}')"),
        };
        let (width, height) = trimmed
            .split_once(['x', 'X'])
            .ok_or_else(invalid)?;
        let width = width.trim().parse().map_err(|_| invalid())?;
        let height = height.trim().parse().map_err(|_| invalid())?;

        let geometry = Self::new(width, height);
        geometry.validate()?;
        Ok(geometry)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.maximized {
            return Ok(());
        }
        let in_range = |v: u32| (1..=MAX_WINDOW_DIMENSION).contains(&v);
        if !in_range(self.width) || !in_range(self.height) {
            return Err(ConfigError::InvalidWindowSize {
                message: format!(
                    "{}x{} is outside 1..={MAX_WINDOW_DIMENSION}",
                    self.width, self.height
                ),
            });
        }
        Ok(())
    }
}

/// Everything needed to start a local or remote WebDriver session.
#[derive(Debug, Clone, Serialize)]
pub struct WebDriverConfig {
    pub browser: Browser,
    pub headless: bool,
    pub locale: Option<String>,
    pub timeouts: Timeouts,
    pub window: WindowGeometry,
    /// Present iff the run targets the Sauce Labs grid.
    pub grid: Option<SauceLabsCredentials>,
}

impl WebDriverConfig {
    pub fn builder() -> WebDriverConfigBuilder {
        WebDriverConfigBuilder::default()
    }

    /// Build the driver configuration for `config_key` from published settings.
    ///
    /// Settings override what the config key implies: `browser` replaces the
    /// key's browser and `guiLanguage` replaces its locale.
    pub fn from_settings(
        config_key: &ConfigKey,
        settings: &dyn SettingsStore,
    ) -> Result<Self, ConfigError> {
        let setting = |key: &str| settings.get(key).filter(|v| !v.trim().is_empty());

        let mut builder = Self::builder().with_browser(config_key.browser());
        if let Some(locale) = config_key.locale() {
            builder = builder.with_locale(locale.to_string());
        }

        if let Some(browser) = setting(BROWSER_KEY) {
            builder = builder.with_browser(browser.parse()?);
        }
        if let Some(language) = setting(GUI_LANGUAGE_KEY) {
            builder = builder.with_locale(language);
        }
        if let Some(headless) = setting(HEADLESS_KEY) {
            builder = builder.with_headless(parse_bool_setting(HEADLESS_KEY, &headless)?);
        }
        if let Some(size) = setting(WINDOW_SIZE_KEY) {
            builder = builder.with_window(WindowGeometry::parse(&size)?);
        }

        let mut timeouts = Timeouts::default();
        if let Some(secs) = setting(IMPLICIT_WAIT_KEY) {
            timeouts.implicit_wait =
                Duration::from_secs(parse_secs_setting(IMPLICIT_WAIT_KEY, &secs)?);
        }
        if let Some(secs) = setting(PAGE_LOAD_TIMEOUT_KEY) {
            timeouts.page_load =
                Duration::from_secs(parse_secs_setting(PAGE_LOAD_TIMEOUT_KEY, &secs)?);
        }
        if let Some(secs) = setting(SCRIPT_TIMEOUT_KEY) {
            timeouts.script = Duration::from_secs(parse_secs_setting(SCRIPT_TIMEOUT_KEY, &secs)?);
        }
        builder = builder.with_timeouts(timeouts);

        let use_grid = setting(USE_GRID_KEY)
            .map(|raw| parse_bool_setting(USE_GRID_KEY, &raw))
            .transpose()?
            .unwrap_or(false);
        if use_grid {
            let credentials = SauceLabsCredentials::resolve(settings)?
                .ok_or(ConfigError::MissingGridCredentials("username and access key"))?;
            builder = builder.with_grid(credentials);
        }

        builder.build()
    }
}

/// Builder for [`WebDriverConfig`]; every field has a default.
#[derive(Debug, Default)]
pub struct WebDriverConfigBuilder {
    browser: Option<Browser>,
    headless: Option<bool>,
    locale: Option<String>,
    timeouts: Option<Timeouts>,
    window: Option<WindowGeometry>,
    grid: Option<SauceLabsCredentials>,
}

impl WebDriverConfigBuilder {
    pub fn with_browser(mut self, browser: Browser) -> Self {
        self.browser = Some(browser);
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = Some(headless);
        self
    }

    pub fn with_locale(mut self, locale: String) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = Some(timeouts);
        self
    }

    pub fn with_window(mut self, window: WindowGeometry) -> Self {
        self.window = Some(window);
        self
    }

    pub fn with_grid(mut self, credentials: SauceLabsCredentials) -> Self {
        self.grid = Some(credentials);
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<WebDriverConfig, ConfigError> {
        let browser = self.browser.unwrap_or_default();
        let headless = self.headless.unwrap_or(false);
        if headless && !browser.supports_headless() {
            return Err(ConfigError::InvalidValue {
                var: HEADLESS_KEY.to_string(),
                message: format!("{browser} does not support headless mode"),
            });
        }

        let timeouts = self.timeouts.unwrap_or_default();
        timeouts.validate()?;

        let window = self.window.unwrap_or_default();
        window.validate()?;

        if let Some(grid) = &self.grid {
            grid.hub_url()?;
        }

        Ok(WebDriverConfig {
            browser,
            headless,
            locale: self.locale,
            timeouts,
            window,
            grid: self.grid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SAUCE_ACCESS_KEY_KEY, SAUCE_USERNAME_KEY};
    use crate::settings::MemorySettings;

    #[test]
    fn test_builder_defaults() {
        let config = WebDriverConfig::builder().build().unwrap();
        assert_eq!(config.browser, Browser::Chrome);
        assert!(!config.headless);
        assert_eq!(config.timeouts, Timeouts::default());
        assert_eq!(config.window, WindowGeometry::default());
        assert!(config.grid.is_none());
    }

    #[test]
    fn test_builder_rejects_out_of_range_timeouts() {
        let too_long = Timeouts {
            page_load: Duration::from_secs(MAX_TIMEOUT_SECS + 1),
            ..Timeouts::default()
        };
        let result = WebDriverConfig::builder().with_timeouts(too_long).build();
        assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));

        let zero_script = Timeouts {
            script: Duration::ZERO,
            ..Timeouts::default()
        };
        let result = WebDriverConfig::builder().with_timeouts(zero_script).build();
        assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
    }

    #[test]
    fn test_safari_headless_is_rejected() {
        let result = WebDriverConfig::builder()
            .with_browser(Browser::Safari)
            .with_headless(true)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_window_geometry_parse() {
        assert_eq!(
            WindowGeometry::parse("1280x720").unwrap(),
            WindowGeometry::new(1280, 720)
        );
        assert_eq!(
            WindowGeometry::parse(" 800 X 600 ").unwrap(),
            WindowGeometry::new(800, 600)
        );
        assert!(WindowGeometry::parse("Maximized").unwrap().maximized);
        assert!(WindowGeometry::parse("0x720").is_err());
        assert!(WindowGeometry::parse("wide").is_err());
    }

    #[test]
    fn test_from_settings_uses_config_key_defaults() {
        let key: ConfigKey = "firefox-de".parse().unwrap();
        let config = WebDriverConfig::from_settings(&key, &MemorySettings::new()).unwrap();

        assert_eq!(config.browser, Browser::Firefox);
        assert_eq!(config.locale.as_deref(), Some("de"));
        assert!(config.grid.is_none());
    }

    #[test]
    fn test_from_settings_applies_overrides() {
        let key: ConfigKey = "chrome-fr".parse().unwrap();
        let settings = MemorySettings::with_values([
            (BROWSER_KEY, "edge"),
            (GUI_LANGUAGE_KEY, "nl"),
            (HEADLESS_KEY, "true"),
            (WINDOW_SIZE_KEY, "1366x768"),
            (PAGE_LOAD_TIMEOUT_KEY, "90"),
        ]);

        let config = WebDriverConfig::from_settings(&key, &settings).unwrap();

        assert_eq!(config.browser, Browser::Edge);
        assert_eq!(config.locale.as_deref(), Some("nl"));
        assert!(config.headless);
        assert_eq!(config.window, WindowGeometry::new(1366, 768));
        assert_eq!(config.timeouts.page_load, Duration::from_secs(90));
        assert_eq!(
            config.timeouts.script,
            Duration::from_secs(DEFAULT_SCRIPT_TIMEOUT_SECS)
        );
    }

    #[test]
    fn test_from_settings_rejects_bad_values() {
        let key: ConfigKey = "chrome-fr".parse().unwrap();

        let settings = MemorySettings::with_values([(HEADLESS_KEY, "sometimes")]);
        assert!(WebDriverConfig::from_settings(&key, &settings).is_err());

        let settings = MemorySettings::with_values([(BROWSER_KEY, "netscape")]);
        assert!(matches!(
            WebDriverConfig::from_settings(&key, &settings),
            Err(ConfigError::UnknownBrowser(_))
        ));
    }

    #[test]
    #[serial_test::serial]
    fn test_from_settings_grid_requires_credentials() {
        temp_env::with_vars(
            [
                ("SAUCE_USERNAME", None::<&str>),
                ("SAUCE_ACCESS_KEY", None),
                ("SAUCE_REGION", None),
            ],
            || {
                let key: ConfigKey = "chrome-fr".parse().unwrap();

                let settings = MemorySettings::with_values([(USE_GRID_KEY, "true")]);
                assert!(matches!(
                    WebDriverConfig::from_settings(&key, &settings),
                    Err(ConfigError::MissingGridCredentials(_))
                ));

                let settings = MemorySettings::with_values([
                    (USE_GRID_KEY, "true"),
                    (SAUCE_USERNAME_KEY, "ci-bot"),
                    (SAUCE_ACCESS_KEY_KEY, "secret"),
                ]);
                let config = WebDriverConfig::from_settings(&key, &settings).unwrap();
                let grid = config.grid.unwrap();
                assert_eq!(grid.username, "ci-bot");
            },
        );
    }
}
