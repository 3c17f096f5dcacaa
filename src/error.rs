//! Error types for svj-siginj.

use std::path::PathBuf;

/// Result type alias for svj-siginj operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for svj-siginj.
///
/// Failures of the external tools are not errors: they are recorded as step
/// outcomes and surface through the exit code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A flag or positional argument was not recognised.
    #[error("Unknown parameter passed: {flag}")]
    UnknownParameter {
        /// The offending argument as typed.
        flag: String,
    },

    /// Command-line usage error other than an unknown flag.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to serialize the run summary.
    #[error("failed to serialize run summary")]
    SummarySerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write the run summary.
    #[error("failed to write run summary '{path}'")]
    SummaryWrite {
        /// Path to the summary file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_parameter_message() {
        let err = Error::UnknownParameter {
            flag: "--bogus".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown parameter passed: --bogus");
    }

    #[test]
    fn test_config_validation_message() {
        let err = Error::ConfigValidation {
            message: "tools.analysis must not be empty".to_string(),
        };
        assert!(err.to_string().contains("tools.analysis"));
    }
}
