//! ConfigResolver - reads one environment entry of a database config
//!
//! The document is a mapping from environment name to connection settings.
//! Only `adapter`, `username` (or `user`), `password`, `database`, `socket`
//! and `host` are read; other keys are ignored. YAML merge keys (`<<`) are
//! applied before lookup so shared defaults resolve.

use serde_yaml_ng::Value;

use crate::domain::entities::DatabaseConfig;
use crate::domain::ports::LocalShell;
use crate::domain::value_objects::{shell_quote_path, ConfigSource};
use crate::error::{SyncError, SyncResult};

use super::SyncContext;

pub struct ConfigResolver<'a> {
    ctx: &'a SyncContext<'a>,
    local: &'a dyn LocalShell,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(ctx: &'a SyncContext<'a>, local: &'a dyn LocalShell) -> Self {
        Self { ctx, local }
    }

    /// Fetch `source` and read the entry for `env`
    pub fn resolve(&self, source: &ConfigSource, env: &str) -> SyncResult<DatabaseConfig> {
        let document = match source {
            ConfigSource::Remote(path) => {
                self.ctx.capture(&format!("cat {}", shell_quote_path(path)))?
            }
            ConfigSource::Local(path) => self.local.read_to_string(path)?,
        };
        parse_database_config(&document, env, &source.to_string())
    }
}

/// Parse `document` and map the `env` entry to a [`DatabaseConfig`]
pub fn parse_database_config(
    document: &str,
    env: &str,
    source_name: &str,
) -> SyncResult<DatabaseConfig> {
    let invalid = |message: String| SyncError::ConfigInvalid {
        source_name: source_name.to_string(),
        message,
    };
    let missing = || SyncError::ConfigMissing {
        env: env.to_string(),
        source_name: source_name.to_string(),
    };

    let mut root: Value = serde_yaml_ng::from_str(document).map_err(|e| invalid(e.to_string()))?;
    root.apply_merge().map_err(|e| invalid(e.to_string()))?;

    let entry = match &root {
        Value::Null => return Err(missing()),
        Value::Mapping(_) => root.get(env).ok_or_else(missing)?,
        _ => return Err(invalid("top level is not a mapping".to_string())),
    };
    match entry {
        Value::Mapping(_) => {}
        Value::Null => return Err(missing()),
        _ => return Err(invalid(format!("entry '{}' is not a mapping", env))),
    }

    Ok(DatabaseConfig {
        adapter: scalar(entry, "adapter").unwrap_or_default(),
        user: scalar(entry, "username").or_else(|| scalar(entry, "user")),
        pass: scalar(entry, "password"),
        dbname: scalar(entry, "database").unwrap_or_default(),
        socket: scalar(entry, "socket"),
        host: scalar(entry, "host"),
    })
}

fn scalar(entry: &Value, key: &str) -> Option<String> {
    match entry.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
