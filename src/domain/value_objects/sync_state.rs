//! Orchestrator states

use std::fmt;

/// State of a sync job
///
/// `Init → DependencyCheck → ConfigResolved → [LocalPrepared →] Executing → Done`,
/// with any state able to move to `FatalAbort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncState {
    Init,
    DependencyCheck,
    ConfigResolved,
    LocalPrepared,
    Executing,
    Done,
    FatalAbort,
}

impl fmt::Display for SyncState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SyncState::Init => "init",
            SyncState::DependencyCheck => "dependency-check",
            SyncState::ConfigResolved => "config-resolved",
            SyncState::LocalPrepared => "local-prepared",
            SyncState::Executing => "executing",
            SyncState::Done => "done",
            SyncState::FatalAbort => "fatal-abort",
        };
        f.write_str(name)
    }
}
