//! LocalShell port - the local side of a sync job

use std::path::Path;

use crate::error::SyncResult;

/// Local process and file access used by the orchestrator
pub trait LocalShell {
    /// Check whether `program` can be found on PATH
    fn has_program(&self, program: &str) -> bool;

    /// Read a local file as text
    fn read_to_string(&self, path: &Path) -> SyncResult<String>;

    /// Run `command` through the shell, blocking until it finishes
    ///
    /// Stdio is inherited so progress output reaches the operator.
    /// Returns the composite exit status of the command.
    fn run_pipeline(&self, command: &str) -> SyncResult<i32>;
}
