//! Where a database config document comes from

use std::fmt;
use std::path::PathBuf;

/// Location of a `database.yml`-style document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// File on the remote host, fetched over the control channel
    Remote(String),
    /// File on the local disk
    Local(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Remote(path) => write!(f, "remote:{}", path),
            ConfigSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}
