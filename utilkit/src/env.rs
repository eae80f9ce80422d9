//! Environment variable lookup.
//!
//! [`get_env_or_default`] is the plain "value or fallback" lookup. Values a
//! program cannot run without go through [`require_env`], which trims them
//! and refuses blanks.

use std::env::{self, VarError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvVarError {
    #[error("Required environment variable '{key}' is not set. Export it or add it to .env.")]
    NotFound { key: String },

    #[error("Environment variable '{key}' does not hold valid UTF-8.")]
    InvalidUtf8 { key: String },

    #[error("Environment variable '{key}' is set but blank.")]
    Empty { key: String },
}

/// Returns the value of `key`, or `default` when the variable is not set.
///
/// A variable that is set to the empty string is returned as `""`; only an
/// unset variable falls back. Values that are not valid UTF-8 are converted
/// lossily rather than treated as missing.
///
/// ```no_run
/// use utilkit::get_env_or_default;
///
/// let level = get_env_or_default("LOG_LEVEL", "info");
/// ```
pub fn get_env_or_default(key: &str, default: &str) -> String {
    match env::var_os(key) {
        Some(value) => value.to_string_lossy().into_owned(),
        None => default.to_string(),
    }
}

/// Returns the trimmed value of `key`.
///
/// # Errors
///
/// [`EnvVarError::NotFound`] when `key` is unset, [`EnvVarError::InvalidUtf8`]
/// when its value is not UTF-8 and [`EnvVarError::Empty`] when nothing but
/// whitespace is left after trimming.
pub fn require_env(key: &str) -> Result<String, EnvVarError> {
    let value = env::var(key).map_err(|err| match err {
        VarError::NotPresent => EnvVarError::NotFound {
            key: key.to_string(),
        },
        VarError::NotUnicode(_) => EnvVarError::InvalidUtf8 {
            key: key.to_string(),
        },
    })?;

    match value.trim() {
        "" => Err(EnvVarError::Empty {
            key: key.to_string(),
        }),
        trimmed => Ok(trimmed.to_string()),
    }
}

/// [`require_env`] without the reason: `None` for unset, blank or non-UTF-8
/// values.
pub fn optional_env(key: &str) -> Option<String> {
    require_env(key).ok()
}
