//! Tracing event sink

use crate::domain::ports::{SyncEvent, SyncEventSink};

/// Forwards sync events to the `tracing` subscriber installed by the binary
#[derive(Debug, Default)]
pub struct TracingEventSink;

impl SyncEventSink for TracingEventSink {
    fn on_event(&self, event: SyncEvent) {
        match event {
            SyncEvent::StateChanged { from, to } => {
                tracing::debug!(%from, %to, "state changed");
            }
            SyncEvent::Step(message) => tracing::info!("{}", message),
            SyncEvent::Warning(message) => tracing::warn!("{}", message),
            SyncEvent::Completed { exit_code: 0 } => tracing::info!("sync completed"),
            SyncEvent::Completed { exit_code } => {
                tracing::warn!(exit_code, "pipeline exited with non-zero status");
            }
        }
    }
}
