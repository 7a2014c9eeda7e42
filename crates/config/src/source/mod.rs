//! Config sources feeding the context loader.
//!
//! Responsibilities:
//! - Define the `ConfigSource` lookup abstraction.
//! - Define `SourceError` for unreadable or malformed backing stores.
//! - Provide file-backed (`JsonDirSource`) and in-memory (`MemorySource`) sources.
//!
//! Does NOT handle:
//! - Merging namespaces (see `loader::merge`).
//! - Deciding how failures are surfaced (the loader absorbs them).
//!
//! Invariants:
//! - An unknown environment or config key is `Ok(None)`, never an error.
//! - `Err` is reserved for a backing store that exists but cannot be used.

use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

mod json_dir;
mod memory;

pub use json_dir::JsonDirSource;
pub use memory::MemorySource;

/// A flat set of configuration entries from one namespace.
pub type Entries = BTreeMap<String, String>;

/// Errors raised by a config source whose backing store is present but unusable.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read config source at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config source at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Keyed store of configuration entries.
///
/// Sources are read on every merge; implementations must not cache results
/// across calls unless their backing data is immutable.
pub trait ConfigSource: Send + Sync {
    /// Entries scoped to `(environment, config_key)`.
    fn scoped_entries(
        &self,
        environment: &str,
        config_key: &str,
    ) -> Result<Option<Entries>, SourceError>;

    /// Entries of the environment-independent saucelabs overlay.
    fn saucelabs_entries(&self) -> Result<Option<Entries>, SourceError>;

    /// Human-readable description for logging.
    fn describe(&self) -> String;
}
