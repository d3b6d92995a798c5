//! Sync Event Port
//!
//! The logger capability handed to every component through the sync
//! context. Production code forwards events to `tracing`; tests record them.

use crate::domain::value_objects::SyncState;

/// Event emitted while a job runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// Orchestrator moved between states
    StateChanged { from: SyncState, to: SyncState },

    /// Operator-facing progress message
    Step(String),

    /// Something worth surfacing that does not stop the job
    Warning(String),

    /// Pipeline finished with this composite exit status
    Completed { exit_code: i32 },
}

/// Trait for receiving sync events
pub trait SyncEventSink {
    fn on_event(&self, event: SyncEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SyncEventSink for NoopEventSink {
    fn on_event(&self, _event: SyncEvent) {}
}
