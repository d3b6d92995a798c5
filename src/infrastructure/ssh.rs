//! Ssh remote shell
//!
//! Runs one-shot commands on the remote target. Arguments are passed as an
//! array, so only the remote command string is interpreted by a shell, and
//! that on the remote side.

use std::process::{Command, Stdio};

use crate::domain::ports::{CommandOutput, RemoteShell};
use crate::domain::value_objects::RemoteTarget;
use crate::error::{SyncError, SyncResult};

/// Remote shell using the system `ssh` client
pub struct SshShell {
    program: String,
}

impl SshShell {
    pub fn new() -> Self {
        Self {
            program: "ssh".to_string(),
        }
    }

    /// Use a different ssh-compatible client
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, target: &RemoteTarget, command: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(target.ssh_args())
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl Default for SshShell {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteShell for SshShell {
    fn run(&self, target: &RemoteTarget, command: &str) -> SyncResult<CommandOutput> {
        tracing::debug!(host = target.host(), command, "remote command");
        let output = self
            .command(target, command)
            .output()
            .map_err(|e| SyncError::Transport {
                host: target.host().to_string(),
                message: e.to_string(),
            })?;

        Ok(CommandOutput {
            stdout: output.stdout,
            stderr: output.stderr,
            status: output.status.code(),
        })
    }
}
