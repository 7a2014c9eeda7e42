//! Environment variable helpers.
//!
//! Responsibilities:
//! - Read environment variables with empty/whitespace filtering.
//! - Load `.env` files unless `DOTENV_DISABLED` is set.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn dotenv_disabled() -> bool {
    matches!(
        std::env::var("DOTENV_DISABLED").ok().as_deref(),
        Some("true") | Some("1")
    )
}

fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}

/// Load environment variables from a `.env` file if present.
///
/// Missing `.env` files are silently ignored. When `DOTENV_DISABLED` is
/// `true` or `1` nothing is read.
///
/// # Errors
///
/// - `ConfigError::DotenvParse` if the file exists but has invalid syntax.
/// - `ConfigError::DotenvIo` if the file exists but cannot be read.
pub fn load_dotenv() -> Result<(), ConfigError> {
    if dotenv_disabled() {
        tracing::debug!("DOTENV_DISABLED set; skipping .env");
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env file");
            Ok(())
        }
        Err(e) if is_not_found(&e) => Ok(()),
        Err(dotenvy::Error::LineParse(_, idx)) => {
            Err(ConfigError::DotenvParse { error_index: idx })
        }
        Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
            kind: io_err.kind(),
        }),
        Err(_) => Err(ConfigError::DotenvUnknown),
    }
}
