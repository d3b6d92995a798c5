//! The job processed by one invocation

use crate::domain::value_objects::{ConfigSource, TableFilter};

use super::{DatabaseConfig, Resolution};

/// Exactly one of these is processed per invocation
#[derive(Debug, Clone)]
pub enum SyncJob {
    Database(DatabaseJob),
    Directory(DirectoryJob),
}

impl SyncJob {
    pub fn kind(&self) -> &'static str {
        match self {
            SyncJob::Database(_) => "database",
            SyncJob::Directory(_) => "directory",
        }
    }
}

/// Copy a remote database into a local one
#[derive(Debug, Clone)]
pub struct DatabaseJob {
    pub remote_env: String,
    pub local_env: String,
    pub remote_source: ConfigSource,
    pub local_source: ConfigSource,
    pub tables: TableFilter,
    pub(crate) remote_config: Resolution<DatabaseConfig>,
    pub(crate) local_config: Resolution<DatabaseConfig>,
}

impl DatabaseJob {
    pub fn new(
        remote_env: impl Into<String>,
        remote_source: ConfigSource,
        local_env: impl Into<String>,
        local_source: ConfigSource,
        tables: TableFilter,
    ) -> Self {
        Self {
            remote_env: remote_env.into(),
            local_env: local_env.into(),
            remote_source,
            local_source,
            tables,
            remote_config: Resolution::Pending,
            local_config: Resolution::Pending,
        }
    }

    pub fn remote_config(&self) -> Option<&DatabaseConfig> {
        self.remote_config.get()
    }

    pub fn local_config(&self) -> Option<&DatabaseConfig> {
        self.local_config.get()
    }
}

/// Copy a remote directory tree into a local path
#[derive(Debug, Clone)]
pub struct DirectoryJob {
    pub from: String,
    pub to: String,
    pub(crate) total: Resolution<u64>,
}

impl DirectoryJob {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            total: Resolution::Pending,
        }
    }

    /// Byte total of the remote tree, once estimated
    pub fn total(&self) -> Option<u64> {
        self.total.get().copied()
    }
}
