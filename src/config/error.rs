//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),

    /// A configured path that has to exist does not.
    #[error("{field} points to `{}`, which does not exist", path.display())]
    MissingPath { field: &'static str, path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("docmacro.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("docmacro.toml"));

        let validation_err = ConfigError::Validation("[locale.default] must not be empty".to_string());
        assert!(validation_err.to_string().contains("[locale.default]"));

        let missing = ConfigError::MissingPath {
            field: "[store.fixture]",
            path: PathBuf::from("fixtures/documents.json"),
        };
        assert_eq!(
            missing.to_string(),
            "[store.fixture] points to `fixtures/documents.json`, which does not exist"
        );
    }

    #[test]
    fn test_toml_error_converts() {
        let err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        assert!(matches!(ConfigError::from(err), ConfigError::Toml(_)));
    }
}
