//! Sync context - the remote target and logger capability of one job
//!
//! Every component that talks to the remote host or reports progress takes
//! a `&SyncContext` at construction instead of reaching for shared helpers.

use crate::domain::ports::{RemoteShell, SyncEvent, SyncEventSink};
use crate::domain::value_objects::RemoteTarget;
use crate::error::SyncResult;

pub struct SyncContext<'a> {
    target: RemoteTarget,
    remote: &'a dyn RemoteShell,
    events: &'a dyn SyncEventSink,
}

impl<'a> SyncContext<'a> {
    pub fn new(
        target: RemoteTarget,
        remote: &'a dyn RemoteShell,
        events: &'a dyn SyncEventSink,
    ) -> Self {
        Self {
            target,
            remote,
            events,
        }
    }

    pub fn target(&self) -> &RemoteTarget {
        &self.target
    }

    /// Run `command` on the remote target and return its success stream
    ///
    /// Error-stream output and a non-zero exit status are reported as
    /// warnings and do not change the returned text.
    pub fn capture(&self, command: &str) -> SyncResult<String> {
        let output = self.remote.run(&self.target, command)?;

        let stderr = output.stderr_text();
        let stderr = stderr.trim_end();
        if !stderr.is_empty() {
            self.warn(format!("[err :: {}] {}", self.target.host(), stderr));
        }
        match output.status {
            Some(0) => {}
            Some(code) => self.warn(format!(
                "[{}] `{}` exited with status {}",
                self.target.host(),
                command,
                code
            )),
            None => self.warn(format!(
                "[{}] `{}` was terminated by a signal",
                self.target.host(),
                command
            )),
        }

        Ok(output.stdout_text())
    }

    pub fn emit(&self, event: SyncEvent) {
        self.events.on_event(event);
    }

    pub fn step(&self, message: impl Into<String>) {
        self.emit(SyncEvent::Step(message.into()));
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.emit(SyncEvent::Warning(message.into()));
    }
}
