//! Domain Ports (Interfaces)
//!
//! These traits define the process boundary of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod local_database;
pub mod local_shell;
pub mod remote_shell;
pub mod sync_events;

pub use local_database::LocalDatabase;
pub use local_shell::LocalShell;
pub use remote_shell::{CommandOutput, RemoteShell};
pub use sync_events::{NoopEventSink, SyncEvent, SyncEventSink};
