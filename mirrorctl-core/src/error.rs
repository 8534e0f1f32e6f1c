/// Structured error types for mirrorctl-core.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (mirrorctl-cli) can still use `anyhow` for convenience,
/// but library consumers get structured, composable errors.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mirrorctl-core operations
#[derive(Error, Debug)]
pub enum MirrorError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Configuration file missing
    #[error("Config not found at {path:?}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration invalid
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for mirrorctl-core operations
pub type Result<T> = std::result::Result<T, MirrorError>;

impl MirrorError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create a config-not-found error
    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MirrorError::config("database.url is empty");
        assert_eq!(err.to_string(), "Configuration error: database.url is empty");

        let err = MirrorError::config_not_found("/tmp/none.toml");
        assert!(err.to_string().contains("/tmp/none.toml"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: MirrorError = io_err.into();

        assert!(matches!(err, MirrorError::Io { .. }));
    }
}
