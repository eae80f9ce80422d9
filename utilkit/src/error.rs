use crate::db::DbConfigError;
use crate::env::EnvVarError;
use crate::kv::SplitError;
use crate::text::TextFileError;
use thiserror::Error;

/// Any error returned by a utilkit helper.
///
/// Each module has its own error type; this enum lets callers that use
/// several helpers propagate them with `?` through one type.
#[derive(Debug, Error)]
pub enum UtilkitError {
    #[error(transparent)]
    Env(#[from] EnvVarError),

    #[error(transparent)]
    Split(#[from] SplitError),

    #[error(transparent)]
    Text(#[from] TextFileError),

    #[error(transparent)]
    DbConfig(#[from] DbConfigError),

    #[error("Random source unavailable: {0}")]
    Random(#[from] rand::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, UtilkitError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::split_key_value;
    use claims::*;

    fn split_owned(input: &str) -> Result<String> {
        let (key, _) = split_key_value(input, "=")?;
        Ok(key.to_string())
    }

    #[test]
    fn test_module_errors_convert_with_question_mark() {
        assert_eq!(assert_ok!(split_owned("k=v")), "k");
        assert_matches!(split_owned("kv"), Err(UtilkitError::Split(_)));
    }

    #[test]
    fn test_transparent_messages_are_kept() {
        let err = UtilkitError::from(SplitError::EmptySeparator);
        assert_eq!(err.to_string(), "Separator cannot be empty");
    }
}
