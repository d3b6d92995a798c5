//! Job planning - invocation parameters to a `SyncJob`

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::entities::{DatabaseJob, DirectoryJob, SyncJob};
use crate::domain::value_objects::{ConfigSource, TableFilter};
use crate::error::{SyncError, SyncResult};

/// What the operator asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobRequest {
    /// Copy the remote database into the local one
    Database {
        /// Remote environment, defaults to the configured `remote_env`
        remote_env: Option<String>,
        local_env: String,
        /// Whitespace-separated tables, empty for all
        tables: String,
    },
    /// Copy `<deploy_to>/<from>` into the local `to`
    Directory { from: String, to: String },
    /// Copy the release's `public/system/` into the local `public/system/`
    PublicSystem,
}

const DIRECTORY_USAGE: &str = "FROM and TO (usage: devsync dir --from <path> --to <path>)";

pub fn plan_job(config: &Config, request: JobRequest) -> SyncResult<SyncJob> {
    match request {
        JobRequest::Database {
            remote_env,
            local_env,
            tables,
        } => Ok(SyncJob::Database(DatabaseJob::new(
            remote_env.unwrap_or_else(|| config.remote_env.clone()),
            ConfigSource::Remote(config.remote_database_yml()?),
            local_env,
            ConfigSource::Local(PathBuf::from(&config.database_yml)),
            TableFilter::parse(&tables),
        ))),
        JobRequest::Directory { from, to } => {
            let (from, to) = (from.trim(), to.trim());
            if from.is_empty() || to.is_empty() {
                return Err(SyncError::MissingParameter(DIRECTORY_USAGE.to_string()));
            }
            let from_path = format!(
                "{}/{}",
                config.deploy_to()?.trim_end_matches('/'),
                from.trim_start_matches('/')
            );
            Ok(SyncJob::Directory(DirectoryJob::new(from_path, to)))
        }
        JobRequest::PublicSystem => {
            let from_path = format!(
                "{}/public/system/",
                config.current_path()?.trim_end_matches('/')
            );
            Ok(SyncJob::Directory(DirectoryJob::new(from_path, "public/system/")))
        }
    }
}
