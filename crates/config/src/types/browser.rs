//! Browser selection and config keys.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::loader::ConfigError;

/// Browsers a test run can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    #[default]
    Chrome,
    Firefox,
    Edge,
    Safari,
}

impl Browser {
    pub const ALL: [Browser; 4] = [
        Browser::Chrome,
        Browser::Firefox,
        Browser::Edge,
        Browser::Safari,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Firefox => "firefox",
            Browser::Edge => "edge",
            Browser::Safari => "safari",
        }
    }

    /// Whether the browser accepts a headless flag.
    pub fn supports_headless(self) -> bool {
        !matches!(self, Browser::Safari)
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Browser {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chrome" | "googlechrome" => Ok(Browser::Chrome),
            "firefox" | "ff" => Ok(Browser::Firefox),
            "edge" | "msedge" | "microsoftedge" => Ok(Browser::Edge),
            "safari" => Ok(Browser::Safari),
            _ => Err(ConfigError::UnknownBrowser(s.to_string())),
        }
    }
}

/// A `<browser>[-<locale>]` selector such as `chrome-fr` or `firefox-en-gb`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigKey {
    raw: String,
    browser: Browser,
    locale: Option<String>,
}

impl ConfigKey {
    /// The key exactly as given (used for config source lookups).
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn browser(&self) -> Browser {
        self.browser
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(ConfigError::InvalidConfigKey {
                key: s.to_string(),
                message: "must not be empty".to_string(),
            });
        }

        let (browser_part, locale) = match raw.split_once('-') {
            Some((browser, locale)) => (browser, Some(locale)),
            None => (raw, None),
        };

        let browser = browser_part
            .parse::<Browser>()
            .map_err(|_| ConfigError::InvalidConfigKey {
                key: raw.to_string(),
                message: format!("unknown browser '{browser_part}'"),
            })?;

        if let Some(locale) = locale
            && (locale.is_empty()
                || !locale
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        {
            return Err(ConfigError::InvalidConfigKey {
                key: raw.to_string(),
                message: format!("invalid locale '{locale}'"),
            });
        }

        Ok(Self {
            raw: raw.to_string(),
            browser,
            locale: locale.map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_from_str_accepts_aliases() {
        assert_eq!("Chrome".parse::<Browser>().unwrap(), Browser::Chrome);
        assert_eq!("ff".parse::<Browser>().unwrap(), Browser::Firefox);
        assert_eq!("msedge".parse::<Browser>().unwrap(), Browser::Edge);
        assert!(matches!(
            "opera".parse::<Browser>(),
            Err(ConfigError::UnknownBrowser(_))
        ));
    }

    #[test]
    fn test_browser_display_round_trips() {
        for browser in Browser::ALL {
            assert_eq!(browser.to_string().parse::<Browser>().unwrap(), browser);
        }
    }

    #[test]
    fn test_config_key_with_locale() {
        let key: ConfigKey = "chrome-fr".parse().unwrap();
        assert_eq!(key.browser(), Browser::Chrome);
        assert_eq!(key.locale(), Some("fr"));
        assert_eq!(key.as_str(), "chrome-fr");
    }

    #[test]
    fn test_config_key_with_region_locale() {
        let key: ConfigKey = "firefox-en-gb".parse().unwrap();
        assert_eq!(key.browser(), Browser::Firefox);
        assert_eq!(key.locale(), Some("en-gb"));
    }

    #[test]
    fn test_config_key_without_locale() {
        let key: ConfigKey = "safari".parse().unwrap();
        assert_eq!(key.browser(), Browser::Safari);
        assert_eq!(key.locale(), None);
    }

    #[test]
    fn test_config_key_rejects_bad_input() {
        assert!("".parse::<ConfigKey>().is_err());
        assert!("opera-fr".parse::<ConfigKey>().is_err());
        assert!("chrome-".parse::<ConfigKey>().is_err());
        assert!("chrome-f r".parse::<ConfigKey>().is_err());
    }
}
