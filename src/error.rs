//! Error types for devsync
//!
//! Uses `thiserror` for library errors. Every variant is fatal for the job
//! that raised it and maps to process exit status 1.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::Direction;

/// Result type alias for devsync operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Main error type for devsync operations
#[derive(Error, Debug)]
pub enum SyncError {
    /// Required external program is not on PATH
    #[error("{program} command not found, please install it (e.g. 'brew install {program}' or 'apt install {program}')")]
    DependencyMissing { program: String },

    /// Environment entry absent from a database config source
    #[error("can't read {env} entry from {source_name}")]
    ConfigMissing { env: String, source_name: String },

    /// Database config source is not well-formed YAML
    #[error("invalid database config in {source_name}: {message}")]
    ConfigInvalid {
        source_name: String,
        message: String,
    },

    /// No dump/load builder registered for the adapter
    #[error("can't {direction}: unknown adapter {adapter:?}")]
    UnsupportedAdapter {
        adapter: String,
        direction: Direction,
    },

    /// Remote disk-usage output could not be parsed
    #[error("can't estimate size of {path}: unexpected output {output:?}")]
    Estimation { path: String, output: String },

    /// Invocation is missing a value it needs
    #[error("missing required parameter: {0}")]
    MissingParameter(String),

    /// Invocation value that would be misread on a command line
    #[error("invalid {name} {value:?}: must not start with '-'")]
    InvalidParameter { name: &'static str, value: String },

    /// Remote command could not be started
    #[error("remote command failed on {host}: {message}")]
    Transport { host: String, message: String },

    /// Tool configuration file is malformed
    #[error("invalid configuration in {file}: {message}")]
    ToolConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SyncError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        1
    }
}
