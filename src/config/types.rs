//! Configuration type definitions

use serde::Deserialize;

use crate::domain::value_objects::RemoteTarget;
use crate::error::{SyncError, SyncResult};

/// Remote host configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RemoteConfig {
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub user: Option<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,

    /// Remote application root
    #[serde(default)]
    pub deploy_to: Option<String>,

    /// Remote release path, defaults to `<deploy_to>/current`
    #[serde(default)]
    pub current_path: Option<String>,

    /// Environment entry read from the remote database config
    #[serde(default = "default_remote_env")]
    pub remote_env: String,

    /// Database config path relative to the application root
    #[serde(default = "default_database_yml")]
    pub database_yml: String,

    #[serde(default = "default_progress_meter")]
    pub progress_meter: String,

    /// Local drop/create command; `{env}` is replaced by the local environment
    #[serde(default = "default_prepare_command")]
    pub prepare_command: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: RemoteConfig::default(),
            deploy_to: None,
            current_path: None,
            remote_env: default_remote_env(),
            database_yml: default_database_yml(),
            progress_meter: default_progress_meter(),
            prepare_command: default_prepare_command(),
        }
    }
}

fn default_remote_env() -> String {
    "production".to_string()
}

fn default_database_yml() -> String {
    "config/database.yml".to_string()
}

fn default_progress_meter() -> String {
    "pv".to_string()
}

fn default_prepare_command() -> String {
    "bundle exec rake -q db:drop db:create RAILS_ENV={env}".to_string()
}

impl Config {
    /// The remote target, failing if host or user is not configured
    pub fn remote_target(&self) -> SyncResult<RemoteTarget> {
        let host = non_empty(&self.remote.host)
            .ok_or_else(|| missing("remote host (--host, DEVSYNC_HOST or [remote] host)"))?;
        let user = non_empty(&self.remote.user)
            .ok_or_else(|| missing("remote user (--user, DEVSYNC_USER or [remote] user)"))?;
        // ssh would parse a leading dash as an option
        if host.starts_with('-') {
            return Err(SyncError::InvalidParameter {
                name: "remote host",
                value: host.to_string(),
            });
        }
        Ok(RemoteTarget::new(host, user).with_port(self.remote.port))
    }

    /// Remote application root
    pub fn deploy_to(&self) -> SyncResult<&str> {
        non_empty(&self.deploy_to)
            .ok_or_else(|| missing("deploy_to (--deploy-to, DEVSYNC_DEPLOY_TO or deploy_to)"))
    }

    /// Remote release path
    pub fn current_path(&self) -> SyncResult<String> {
        if let Some(path) = non_empty(&self.current_path) {
            return Ok(path.to_string());
        }
        Ok(format!("{}/current", self.deploy_to()?.trim_end_matches('/')))
    }

    /// Remote database config path
    pub fn remote_database_yml(&self) -> SyncResult<String> {
        Ok(format!(
            "{}/{}",
            self.current_path()?.trim_end_matches('/'),
            self.database_yml
        ))
    }
}

fn missing(what: &str) -> SyncError {
    SyncError::MissingParameter(what.to_string())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
