//! In-memory config source.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use super::{ConfigSource, Entries, SourceError};

#[derive(Debug, Default)]
struct Tables {
    scoped: BTreeMap<(String, String), Entries>,
    saucelabs: Option<Entries>,
}

/// `ConfigSource` held entirely in memory.
///
/// Mutators take `&self` so a source shared with a loader can be changed
/// between merges.
#[derive(Debug, Default)]
pub struct MemorySource {
    tables: RwLock<Tables>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`MemorySource::insert_scoped`].
    pub fn with_scoped<I, K, V>(self, environment: &str, config_key: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.insert_scoped(environment, config_key, entries);
        self
    }

    /// Builder-style variant of [`MemorySource::set_saucelabs`].
    pub fn with_saucelabs<I, K, V>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.set_saucelabs(entries);
        self
    }

    /// Replace the entries for `(environment, config_key)`.
    pub fn insert_scoped<I, K, V>(&self, environment: &str, config_key: &str, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tables
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .scoped
            .insert(
                (environment.to_string(), config_key.to_string()),
                collect(entries),
            );
    }

    /// Replace the saucelabs overlay.
    pub fn set_saucelabs<I, K, V>(&self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tables
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .saucelabs = Some(collect(entries));
    }

    /// Drop the saucelabs overlay entirely.
    pub fn clear_saucelabs(&self) {
        self.tables
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .saucelabs = None;
    }
}

fn collect<I, K, V>(entries: I) -> Entries
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

impl ConfigSource for MemorySource {
    fn scoped_entries(
        &self,
        environment: &str,
        config_key: &str,
    ) -> Result<Option<Entries>, SourceError> {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        Ok(tables
            .scoped
            .get(&(environment.to_string(), config_key.to_string()))
            .cloned())
    }

    fn saucelabs_entries(&self) -> Result<Option<Entries>, SourceError> {
        let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        Ok(tables.saucelabs.clone())
    }

    fn describe(&self) -> String {
        "in-memory source".to_string()
    }
}
