//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `ssh` - Remote command execution over ssh
//! - `shell` - Local program lookup, file reads and pipeline execution
//! - `database` - Local drop/create through a configurable command
//! - `events/` - Event sinks

pub mod database;
pub mod events;
pub mod shell;
pub mod ssh;

// Re-export for convenience
pub use database::CommandDatabase;
pub use events::TracingEventSink;
pub use shell::SystemShell;
pub use ssh::SshShell;
