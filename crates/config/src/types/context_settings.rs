//! Typed view over the most common published settings.

use serde::Serialize;
use url::Url;

use super::parse_bool_setting;
use crate::constants::{APPLICATION_URL_KEY, GUI_LANGUAGE_KEY, USE_GRID_KEY};
use crate::loader::ConfigError;
use crate::settings::SettingsStore;

/// Settings most test suites read after `load_config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextSettings {
    pub gui_language: Option<String>,
    pub application_url: Option<Url>,
    pub use_grid: bool,
}

impl ContextSettings {
    /// Read and validate the settings from `settings`.
    ///
    /// Unset values are `None` / `false`; set-but-invalid values are errors.
    pub fn from_store(settings: &dyn SettingsStore) -> Result<Self, ConfigError> {
        let setting = |key: &str| settings.get(key).filter(|v| !v.trim().is_empty());

        let application_url = setting(APPLICATION_URL_KEY)
            .map(|raw| parse_application_url(&raw))
            .transpose()?;
        let use_grid = setting(USE_GRID_KEY)
            .map(|raw| parse_bool_setting(USE_GRID_KEY, &raw))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            gui_language: setting(GUI_LANGUAGE_KEY).map(|v| v.trim().to_string()),
            application_url,
            use_grid,
        })
    }
}

/// Parse an absolute http(s) URL with a host.
fn parse_application_url(raw: &str) -> Result<Url, ConfigError> {
    let parsed = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl {
        var: APPLICATION_URL_KEY.to_string(),
        message: format!("must be an absolute http(s) URL (e.g. https://app.example.com): {e}"),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidUrl {
            var: APPLICATION_URL_KEY.to_string(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }
    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidUrl {
            var: APPLICATION_URL_KEY.to_string(),
            message: "host is required".to_string(),
        });
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemorySettings;

    #[test]
    fn test_from_store_reads_published_values() {
        let settings = MemorySettings::with_values([
            (GUI_LANGUAGE_KEY, "fr"),
            (APPLICATION_URL_KEY, "https://staging-ta.example.com/app"),
            (USE_GRID_KEY, "true"),
        ]);

        let context = ContextSettings::from_store(&settings).unwrap();

        assert_eq!(context.gui_language.as_deref(), Some("fr"));
        assert_eq!(
            context.application_url.unwrap().as_str(),
            "https://staging-ta.example.com/app"
        );
        assert!(context.use_grid);
    }

    #[test]
    fn test_from_store_defaults_when_unset() {
        let context = ContextSettings::from_store(&MemorySettings::new()).unwrap();
        assert_eq!(context.gui_language, None);
        assert_eq!(context.application_url, None);
        assert!(!context.use_grid);
    }

    #[test]
    fn test_from_store_rejects_bad_url() {
        for bad in ["not a url", "ftp://files.example.com", "file:///tmp/x"] {
            let settings = MemorySettings::with_values([(APPLICATION_URL_KEY, bad)]);
            assert!(
                matches!(
                    ContextSettings::from_store(&settings),
                    Err(ConfigError::InvalidUrl { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }
}
