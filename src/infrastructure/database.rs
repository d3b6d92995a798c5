//! Local database preparation through a shell command template

use std::process::{Command, Stdio};

use crate::domain::ports::LocalDatabase;
use crate::domain::value_objects::shell_quote;
use crate::error::SyncResult;

use super::shell::exit_code;

/// Drops and recreates the local database by running a command template
///
/// `{env}` in the template is replaced by the quoted environment name.
pub struct CommandDatabase {
    template: String,
}

impl CommandDatabase {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Command text for `env`
    pub fn command_for(&self, env: &str) -> String {
        self.template.replace("{env}", &shell_quote(env))
    }
}

impl LocalDatabase for CommandDatabase {
    fn drop_and_create(&self, env: &str) -> SyncResult<i32> {
        let command = self.command_for(env);
        tracing::debug!(command = %command, "preparing local database");
        let status = Command::new("sh")
            .arg("-c")
            .arg(&command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        Ok(exit_code(status))
    }
}
