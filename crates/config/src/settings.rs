//! Process-wide settings store.
//!
//! Responsibilities:
//! - Define the `SettingsStore` trait the context loader publishes into.
//! - Provide `MemorySettings`, an in-memory store for tests and embedding.
//! - Provide `system_properties()`, the shared process-wide table.
//!
//! Does NOT handle:
//! - Deciding which keys get published (see `loader::context`).
//! - Interpreting setting values (see `types::context_settings`).
//!
//! Invariants:
//! - Stores never fail: a poisoned lock is recovered, not propagated.
//! - Writes are last-writer-wins.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::constants::SENSITIVE_KEY_MARKERS;

/// Whether a setting's value must be kept out of logs and terminal output.
pub fn is_sensitive_setting(name: &str) -> bool {
    let lowered = name.to_ascii_lowercase();
    SENSITIVE_KEY_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// A mutable string key/value table shared across a test process.
///
/// Methods take `&self` because the store is shared behind `Arc`;
/// implementations provide their own interior mutability.
pub trait SettingsStore: Send + Sync {
    /// Read a setting, `None` if it was never set (or was removed).
    fn get(&self, key: &str) -> Option<String>;

    /// Write a setting, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove a setting, returning the previous value.
    fn remove(&self, key: &str) -> Option<String>;

    /// Snapshot of every setting currently held.
    fn snapshot(&self) -> BTreeMap<String, String>;
}

/// In-memory `SettingsStore` backed by an `RwLock<BTreeMap>`.
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: RwLock<BTreeMap<String, String>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given pairs.
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: RwLock::new(
                values
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Remove every setting.
    pub fn clear(&self) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) -> Option<String> {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
    }

    fn snapshot(&self) -> BTreeMap<String, String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// The process-wide settings table.
///
/// This is what the default loader singleton publishes into and what
/// downstream suite code reads from. Tests that need isolation should inject
/// their own `MemorySettings` instead of touching this table.
pub fn system_properties() -> Arc<MemorySettings> {
    static PROPERTIES: OnceLock<Arc<MemorySettings>> = OnceLock::new();
    Arc::clone(PROPERTIES.get_or_init(|| Arc::new(MemorySettings::new())))
}
