//! Local system shell

use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::LocalShell;
use crate::error::SyncResult;

/// Local shell backed by PATH lookup and `sh -c`
#[derive(Debug, Default)]
pub struct SystemShell;

impl SystemShell {
    pub fn new() -> Self {
        Self
    }
}

impl LocalShell for SystemShell {
    fn has_program(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }

    fn read_to_string(&self, path: &Path) -> SyncResult<String> {
        Ok(fs::read_to_string(path)?)
    }

    fn run_pipeline(&self, command: &str) -> SyncResult<i32> {
        tracing::debug!(command, "running pipeline");
        let status = Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        Ok(exit_code(status))
    }
}

/// Exit code of a finished process; signals map to `128 + signal` on unix
pub(crate) fn exit_code(status: std::process::ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
