//! Error types for cfgmigrate
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for migration operations
pub type MigrateResult<T> = Result<T, MigrateError>;

/// Main error type for migration operations
#[derive(Error, Debug)]
pub enum MigrateError {
    /// The shipped default template could not be loaded or parsed
    #[error("default template unavailable: {message}")]
    TemplateUnavailable { message: String },

    /// The user's configuration file is not valid YAML
    #[error("invalid configuration in {file}: {message}")]
    UserConfigInvalid { file: PathBuf, message: String },

    /// The line-based rewrite hit a state it cannot handle
    #[error("rewrite failed: {message}")]
    RewriteFailure { message: String },

    /// The tool's own settings file is malformed
    #[error("invalid settings in {file}: {message}")]
    InvalidSettings { file: PathBuf, message: String },

    /// Both the primary rewrite and the structured fallback failed
    #[error("fallback merge failed after rewrite error ({primary}): {fallback}")]
    FallbackFailed { primary: String, fallback: String },

    /// File system port error
    #[error("file system error: {0}")]
    Fs(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or serialisation error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl MigrateError {
    pub fn rewrite(message: impl Into<String>) -> Self {
        MigrateError::RewriteFailure {
            message: message.into(),
        }
    }

    pub fn template(message: impl Into<String>) -> Self {
        MigrateError::TemplateUnavailable {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_user_config_invalid() {
        let err = MigrateError::UserConfigInvalid {
            file: PathBuf::from("plugins/config.yml"),
            message: "mapping values are not allowed here".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration in plugins/config.yml: mapping values are not allowed here"
        );
    }

    #[test]
    fn test_error_display_fallback_failed() {
        let err = MigrateError::FallbackFailed {
            primary: "disk full".to_string(),
            fallback: "disk still full".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "fallback merge failed after rewrite error (disk full): disk still full"
        );
    }

    #[test]
    fn test_error_helpers() {
        assert!(matches!(
            MigrateError::template("missing"),
            MigrateError::TemplateUnavailable { .. }
        ));
        assert!(matches!(
            MigrateError::rewrite("oops"),
            MigrateError::RewriteFailure { .. }
        ));
    }
}
