//! Directory of JSON files as a config source.
//!
//! Layout:
//! - `<root>/<environment>.json`: object of config keys to flat objects.
//! - `<root>/saucelabs.json`: one flat object.
//!
//! Scalar values (string, number, bool) are stringified. `null`, arrays and
//! nested objects are skipped with a warning.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::{ConfigSource, Entries, SourceError};
use crate::constants::SAUCELABS_NAMESPACE;

/// File-backed `ConfigSource` rooted at a directory.
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    root: PathBuf,
}

impl JsonDirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `environment`, or `None` for names that
    /// would escape the root directory.
    fn environment_path(&self, environment: &str) -> Option<PathBuf> {
        if environment.is_empty()
            || environment.contains(['/', '\\'])
            || environment.contains("..")
        {
            return None;
        }
        Some(self.root.join(format!("{environment}.json")))
    }

    fn saucelabs_path(&self) -> PathBuf {
        self.root.join(format!("{SAUCELABS_NAMESPACE}.json"))
    }
}

/// Read and parse a JSON object, `Ok(None)` if the file does not exist.
fn read_object(path: &Path) -> Result<Option<Map<String, Value>>, SourceError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(SourceError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    serde_json::from_str::<Map<String, Value>>(&content)
        .map(Some)
        .map_err(|e| SourceError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Flatten a JSON object of scalars into string entries.
fn flatten_scalars(object: &Map<String, Value>, path: &Path) -> Entries {
    let mut entries = Entries::new();
    for (name, value) in object {
        let rendered = match value {
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => {
                tracing::warn!(
                    path = %path.display(),
                    entry = %name,
                    "Skipping non-scalar config entry"
                );
                continue;
            }
        };
        entries.insert(name.clone(), rendered);
    }
    entries
}

impl ConfigSource for JsonDirSource {
    fn scoped_entries(
        &self,
        environment: &str,
        config_key: &str,
    ) -> Result<Option<Entries>, SourceError> {
        let Some(path) = self.environment_path(environment) else {
            return Ok(None);
        };
        let Some(object) = read_object(&path)? else {
            return Ok(None);
        };

        match object.get(config_key) {
            Some(Value::Object(scoped)) => Ok(Some(flatten_scalars(scoped, &path))),
            Some(_) => {
                tracing::warn!(
                    path = %path.display(),
                    config_key,
                    "Config key does not map to an object; ignoring"
                );
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn saucelabs_entries(&self) -> Result<Option<Entries>, SourceError> {
        let path = self.saucelabs_path();
        Ok(read_object(&path)?.map(|object| flatten_scalars(&object, &path)))
    }

    fn describe(&self) -> String {
        format!("json directory {}", self.root.display())
    }
}
