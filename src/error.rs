//! Error types for sitepush
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sitepush operations
pub type SitepushResult<T> = Result<T, SitepushError>;

/// Main error type for sitepush operations
#[derive(Error, Debug)]
pub enum SitepushError {
    /// No git repository found in the directory or any of its ancestors
    #[error("not a git repository (or any of the parent directories): {path}")]
    NotARepository { path: PathBuf },

    /// Repository exists but HEAD cannot be read (e.g. no commits yet)
    #[error("malformed repository: {message}")]
    MalformedRepository { message: String },

    /// External program could not be started
    #[error("failed to run '{program}': {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// External program exited with a non-zero status
    #[error("'{program}' exited with {}: {stderr}", .code.map_or_else(|| "a signal".to_string(), |c| format!("status {c}")))]
    CommandFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    /// A configured command line has no program
    #[error("'{setting}' must name a program to run")]
    EmptyCommand { setting: String },

    /// The site listing produced no sites
    #[error("no sites found - create one with 'omd create <name>'")]
    NoSites,

    /// Commit timestamp could not be parsed
    #[error("invalid commit timestamp '{value}'")]
    InvalidTimestamp { value: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SitepushError {
    /// Whether the error means "run this from inside a usable repository".
    pub fn is_repository_error(&self) -> bool {
        matches!(
            self,
            SitepushError::NotARepository { .. } | SitepushError::MalformedRepository { .. }
        )
    }
}
