//! RemoteShell port - one-shot command execution on the remote target
//!
//! Implementations:
//! - `SshShell` - runs the command through `ssh`
//! - test doubles that return canned output

use crate::domain::value_objects::RemoteTarget;
use crate::error::SyncResult;

/// Everything a finished remote command produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Concatenated success-stream bytes
    pub stdout: Vec<u8>,
    /// Concatenated error-stream bytes
    pub stderr: Vec<u8>,
    /// Exit status, if the process exited normally
    pub status: Option<i32>,
}

impl CommandOutput {
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// Control channel to the remote target
pub trait RemoteShell {
    /// Run `command` once on `target` and collect its output
    ///
    /// Fails only if the command could not be run at all; a non-zero exit
    /// status is reported through [`CommandOutput::status`].
    fn run(&self, target: &RemoteTarget, command: &str) -> SyncResult<CommandOutput>;
}
