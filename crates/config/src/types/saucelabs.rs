//! Sauce Labs grid credentials.
//!
//! Credentials resolve from environment variables first, then from published
//! settings, so CI secrets never have to live in config files.

use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};
use url::Url;

use crate::constants::{
    DEFAULT_SAUCE_REGION, SAUCE_ACCESS_KEY_ENV, SAUCE_ACCESS_KEY_KEY, SAUCE_REGION_ENV,
    SAUCE_REGION_KEY, SAUCE_USERNAME_ENV, SAUCE_USERNAME_KEY,
};
use crate::loader::{ConfigError, env_var_or_none};
use crate::settings::SettingsStore;

fn redacted<S: Serializer>(_: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str("<redacted>")
}

/// Credentials and data center for a Sauce Labs remote grid.
#[derive(Debug, Clone, Serialize)]
pub struct SauceLabsCredentials {
    pub username: String,
    #[serde(serialize_with = "redacted")]
    pub access_key: SecretString,
    pub region: String,
}

impl SauceLabsCredentials {
    pub fn new(username: impl Into<String>, access_key: impl Into<String>) -> Self {
        let access_key: String = access_key.into();
        Self {
            username: username.into(),
            access_key: SecretString::new(access_key.into()),
            region: DEFAULT_SAUCE_REGION.to_string(),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Resolve credentials from `SAUCE_*` env vars, falling back to settings.
    ///
    /// Returns `Ok(None)` when neither username nor access key is available,
    /// and `MissingGridCredentials` when only one of them is.
    pub fn resolve(settings: &dyn SettingsStore) -> Result<Option<Self>, ConfigError> {
        let lookup = |env: &str, key: &str| {
            env_var_or_none(env).or_else(|| settings.get(key).filter(|v| !v.trim().is_empty()))
        };

        let username = lookup(SAUCE_USERNAME_ENV, SAUCE_USERNAME_KEY);
        let access_key = lookup(SAUCE_ACCESS_KEY_ENV, SAUCE_ACCESS_KEY_KEY);
        let region = lookup(SAUCE_REGION_ENV, SAUCE_REGION_KEY)
            .unwrap_or_else(|| DEFAULT_SAUCE_REGION.to_string());

        match (username, access_key) {
            (None, None) => Ok(None),
            (Some(_), None) => Err(ConfigError::MissingGridCredentials("access key")),
            (None, Some(_)) => Err(ConfigError::MissingGridCredentials("username")),
            (Some(username), Some(access_key)) => {
                Ok(Some(Self::new(username, access_key).with_region(region)))
            }
        }
    }

    /// WebDriver hub endpoint for this region.
    ///
    /// Credentials are not embedded; send them as capabilities instead.
    pub fn hub_url(&self) -> Result<Url, ConfigError> {
        let region = self.region.trim();
        if region.is_empty()
            || !region
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(ConfigError::InvalidUrl {
                var: SAUCE_REGION_KEY.to_string(),
                message: format!("invalid Sauce Labs region '{}'", self.region),
            });
        }

        let raw = format!("https://ondemand.{region}.saucelabs.com/wd/hub");
        Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl {
            var: SAUCE_REGION_KEY.to_string(),
            message: e.to_string(),
        })
    }

    /// Access key for building `sauce:options` capabilities.
    pub fn expose_access_key(&self) -> &str {
        self.access_key.expose_secret()
    }
}
