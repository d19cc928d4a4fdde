//! # Error Taxonomy
//!
//! Every fallible operation in the workspace reports one of the variants below.
//!
//! * [`ValidationError`]: a malformed flag handed to the builder. Recorded on the
//!   configuration and surfaced later, so it must stay cheap to clone.
//! * [`ConfigError`]: the configuration cannot be turned into a runnable invocation.
//! * [`Error::Execution`]: the scanner process exited unsuccessfully.
//! * [`Error::Parse`]: the scanner produced output that does not match the XML schema.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// A flag rejected by `add_flags`/`set_flags`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("flag '{flag}' must not contain whitespace")]
    InvalidFlag { flag: String },

    /// Output redirection flags would break the XML-on-stdout capture.
    #[error("flag '{flag}' is not allowed")]
    DisallowedFlag { flag: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("no hosts added")]
    NoHosts,

    #[error("scanner binary not found: {}", .0.display())]
    BinaryNotFound(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Non-success exit. `message` is the exit status followed by captured stderr.
    #[error("scanner failed: {message}")]
    Execution { message: String },

    #[error("failed to parse scanner output: {0}")]
    Parse(String),

    #[error("failed to spawn scanner: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display() {
        let err = ValidationError::DisallowedFlag {
            flag: "-oX".to_string(),
        };
        assert_eq!(err.to_string(), "flag '-oX' is not allowed");

        let err = ValidationError::InvalidFlag {
            flag: "-p 80".to_string(),
        };
        assert_eq!(err.to_string(), "flag '-p 80' must not contain whitespace");
    }

    #[test]
    fn wrapped_errors_are_transparent() {
        let err = Error::from(ConfigError::NoHosts);
        assert_eq!(err.to_string(), "no hosts added");

        let err = Error::from(ValidationError::InvalidFlag {
            flag: "a b".to_string(),
        });
        assert!(matches!(err, Error::Validation(ValidationError::InvalidFlag { .. })));
    }

    #[test]
    fn execution_error_carries_stderr() {
        let err = Error::Execution {
            message: "exit status: 1\nFailed to resolve \"nope\".".to_string(),
        };
        assert!(err.to_string().contains("Failed to resolve"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("no such file"));
    }
}
