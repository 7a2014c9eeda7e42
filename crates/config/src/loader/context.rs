//! The context configuration loader and its process-wide singleton.
//!
//! Responsibilities:
//! - Build merged configuration for an `(environment, config_key)` pair.
//! - Publish merged entries into the injected `SettingsStore`.
//! - Provide `get_instance` / `reset` / `install` for the global loader.
//!
//! Does NOT handle:
//! - Parsing configuration files (see `source`).
//! - Typed interpretation of published settings (see `types`).
//!
//! Invariants / Assumptions:
//! - `merged_config` never mutates the settings store and never caches.
//! - Source failures are logged and treated as an empty namespace.
//! - Every loader gets a fresh id, so identity after `reset` is always distinct.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use super::env::env_var_or_none;
use super::merge::merge_layers;
use super::signal::EnvironmentSignal;
use crate::constants::{CONFIG_DIR_ENV, DEFAULT_CONFIG_DIR, SAUCELABS_NAMESPACE};
use crate::settings::{SettingsStore, is_sensitive_setting, system_properties};
use crate::source::{ConfigSource, Entries, JsonDirSource, SourceError};

/// Flattened result of a merge, keyed by setting name.
pub type MergedConfig = BTreeMap<String, String>;

static NEXT_LOADER_ID: AtomicU64 = AtomicU64::new(1);

fn global_slot() -> &'static Mutex<Option<Arc<ContextConfigLoader>>> {
    static SLOT: OnceLock<Mutex<Option<Arc<ContextConfigLoader>>>> = OnceLock::new();
    SLOT.get_or_init(|| Mutex::new(None))
}

/// Trim an argument; `None`, `""` and whitespace-only all become `None`.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Value safe to put in a log line for the given setting name.
fn loggable<'a>(name: &str, value: &'a str) -> &'a str {
    if is_sensitive_setting(name) {
        "<redacted>"
    } else {
        value
    }
}

/// Resolves environment-specific test configuration and publishes it.
///
/// Construct one explicitly with [`ContextConfigLoader::new`] or
/// [`ContextConfigLoader::builder`] when the caller owns its lifecycle, or use
/// [`ContextConfigLoader::get_instance`] for the shared process-wide loader.
pub struct ContextConfigLoader {
    id: u64,
    source: Arc<dyn ConfigSource>,
    settings: Arc<dyn SettingsStore>,
}

impl std::fmt::Debug for ContextConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextConfigLoader")
            .field("id", &self.id)
            .field("source", &self.source.describe())
            .finish_non_exhaustive()
    }
}

impl ContextConfigLoader {
    /// Create a loader over an explicit source and settings store.
    pub fn new(source: Arc<dyn ConfigSource>, settings: Arc<dyn SettingsStore>) -> Self {
        Self {
            id: NEXT_LOADER_ID.fetch_add(1, Ordering::Relaxed),
            source,
            settings,
        }
    }

    pub fn builder() -> ContextConfigLoaderBuilder {
        ContextConfigLoaderBuilder::default()
    }

    /// Create the default loader: a `JsonDirSource` rooted at
    /// `CONTEXT_CONFIG_DIR` (or `config/context`) publishing into the
    /// process-wide system properties.
    pub fn from_env() -> Self {
        Self::builder().build()
    }

    /// Return the process-wide loader, creating it on first use.
    ///
    /// Repeated calls without an intervening [`reset`](Self::reset) return the
    /// same `Arc` (compare with `Arc::ptr_eq`).
    pub fn get_instance() -> Arc<Self> {
        let mut slot = global_slot()
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slot.get_or_insert_with(|| {
            let loader = Arc::new(Self::from_env());
            tracing::debug!(loader_id = loader.id, "Created context config loader");
            loader
        }))
    }

    /// Discard the process-wide loader so the next
    /// [`get_instance`](Self::get_instance) builds a new one.
    ///
    /// Settings already published stay in place.
    pub fn reset() {
        let previous = global_slot()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(loader) = previous {
            tracing::debug!(loader_id = loader.id, "Reset context config loader");
        }
    }

    /// Replace the process-wide loader with an explicitly constructed one.
    pub fn install(loader: Self) -> Arc<Self> {
        let loader = Arc::new(loader);
        *global_slot()
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&loader));
        tracing::debug!(loader_id = loader.id, "Installed context config loader");
        loader
    }

    /// Unique id of this loader instance.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn settings(&self) -> &Arc<dyn SettingsStore> {
        &self.settings
    }

    pub fn source(&self) -> &Arc<dyn ConfigSource> {
        &self.source
    }

    /// True iff the test environment signal is set and non-empty.
    pub fn is_pipeline_mode(&self) -> bool {
        EnvironmentSignal::new(self.settings.as_ref()).is_pipeline_mode()
    }

    /// The test environment signal, `None` when unset.
    pub fn test_environment(&self) -> Option<String> {
        EnvironmentSignal::new(self.settings.as_ref()).value()
    }

    /// Merge configuration for `(environment, config_key)` and publish every
    /// merged entry into the settings store.
    ///
    /// Arguments are trimmed. A missing or blank `environment` or
    /// `config_key` skips the call entirely. Settings not present in the merge result are left alone.
    /// Returns the number of settings written.
    pub fn load_config(&self, environment: Option<&str>, config_key: Option<&str>) -> usize {
        let (Some(environment), Some(config_key)) = (non_empty(environment), non_empty(config_key))
        else {
            tracing::debug!(
                environment = environment.unwrap_or_default(),
                config_key = config_key.unwrap_or_default(),
                "Skipping context config load: environment and config key are required"
            );
            return 0;
        };

        let merged = self.merged_config(Some(environment), Some(config_key));
        for (name, value) in &merged {
            self.settings.set(name, value);
            tracing::debug!(setting = %name, value = loggable(name, value), "Published setting");
        }

        tracing::info!(
            environment,
            config_key,
            published = merged.len(),
            "Loaded context configuration"
        );
        merged.len()
    }

    /// Compute the merged configuration without publishing it.
    ///
    /// Returns an empty map when `environment` is missing or empty. An
    /// unknown environment or config key yields just the saucelabs overlay.
    pub fn merged_config(
        &self,
        environment: Option<&str>,
        config_key: Option<&str>,
    ) -> MergedConfig {
        let Some(environment) = non_empty(environment) else {
            return MergedConfig::new();
        };

        let scoped = non_empty(config_key).and_then(|config_key| {
            self.read_namespace(environment, config_key, || {
                self.source.scoped_entries(environment, config_key)
            })
        });
        let saucelabs = self.read_namespace(SAUCELABS_NAMESPACE, "", || {
            self.source.saucelabs_entries()
        });

        merge_layers(saucelabs, scoped)
    }

    /// Run one namespace lookup, degrading failures to `None`.
    fn read_namespace(
        &self,
        namespace: &str,
        config_key: &str,
        lookup: impl FnOnce() -> Result<Option<Entries>, SourceError>,
    ) -> Option<Entries> {
        match lookup() {
            Ok(Some(entries)) => Some(entries),
            Ok(None) => {
                tracing::debug!(
                    namespace,
                    config_key,
                    source = %self.source.describe(),
                    "No config entries found"
                );
                None
            }
            Err(e) => {
                tracing::warn!(
                    namespace,
                    config_key,
                    error = %e,
                    "Config source unavailable; continuing without it"
                );
                None
            }
        }
    }
}

/// Builder for [`ContextConfigLoader`]; unset parts fall back to defaults.
#[derive(Default)]
pub struct ContextConfigLoaderBuilder {
    source: Option<Arc<dyn ConfigSource>>,
    settings: Option<Arc<dyn SettingsStore>>,
    config_dir: Option<PathBuf>,
}

impl ContextConfigLoaderBuilder {
    /// Use an explicit config source.
    pub fn with_source(mut self, source: Arc<dyn ConfigSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Publish into an explicit settings store.
    pub fn with_settings(mut self, settings: Arc<dyn SettingsStore>) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Root directory for the default `JsonDirSource`.
    ///
    /// Ignored when an explicit source is set.
    pub fn with_config_dir(mut self, dir: PathBuf) -> Self {
        self.config_dir = Some(dir);
        self
    }

    pub fn build(self) -> ContextConfigLoader {
        let source = self.source.unwrap_or_else(|| {
            let root = self
                .config_dir
                .or_else(|| env_var_or_none(CONFIG_DIR_ENV).map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR));
            Arc::new(JsonDirSource::new(root)) as Arc<dyn ConfigSource>
        });
        let settings = self
            .settings
            .unwrap_or_else(|| system_properties() as Arc<dyn SettingsStore>);
        ContextConfigLoader::new(source, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loggable_redacts_sensitive_names() {
        assert_eq!(loggable("sauceAccessKey", "abc"), "<redacted>");
        assert_eq!(loggable("adminPassword", "abc"), "<redacted>");
        assert_eq!(loggable("guiLanguage", "fr"), "fr");
    }

    #[test]
    fn test_non_empty_filters_blank_arguments() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("  ")), None);
        assert_eq!(non_empty(Some("chrome-fr")), Some("chrome-fr"));
        assert_eq!(non_empty(Some(" staging-ta ")), Some("staging-ta"));
    }
}
