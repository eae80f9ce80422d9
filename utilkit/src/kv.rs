//! Splitting `key<sep>value` strings.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("Separator '{separator}' not found in '{input}'")]
    SeparatorNotFound { input: String, separator: String },

    #[error("Separator cannot be empty")]
    EmptySeparator,
}

/// Splits `s` at the first occurrence of `separator`.
///
/// Later occurrences stay in the right-hand part, so
/// `split_key_value("a=b=c", "=")` yields `("a", "b=c")`.
///
/// # Errors
///
/// [`SplitError::SeparatorNotFound`] when `separator` does not occur in `s`,
/// [`SplitError::EmptySeparator`] when `separator` is empty.
pub fn split_key_value<'a>(
    s: &'a str,
    separator: &str,
) -> Result<(&'a str, &'a str), SplitError> {
    if separator.is_empty() {
        return Err(SplitError::EmptySeparator);
    }

    s.split_once(separator)
        .ok_or_else(|| SplitError::SeparatorNotFound {
            input: s.to_string(),
            separator: separator.to_string(),
        })
}
