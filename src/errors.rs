// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CmdTimerError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("invalid redirect: {0:?}")]
    InvalidRedirect(String),

    #[error("command not found: {0}")]
    CommandNotFound(String),

    #[error("failed to launch {command}: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Template error: {0}")]
    Template(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CmdTimerError {
    /// Exit code the wrapper uses when it fails before the child produced a
    /// status of its own. Follows the shell's conventions for lookup and
    /// permission failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            CmdTimerError::CommandNotFound(_) => 127,
            CmdTimerError::Launch { source, .. }
                if source.kind() == std::io::ErrorKind::PermissionDenied =>
            {
                126
            }
            _ => 1,
        }
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, CmdTimerError>;
