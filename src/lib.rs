//! devsync - pull production state down to a development machine
//!
//! Copies a remote database (dump → progress meter → local load) or a remote
//! directory tree (tar → progress meter → tar) over ssh in one streaming
//! shell pipeline.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{plan_job, JobRequest, SyncOptions, SyncOrchestrator, SyncReport};
pub use config::Config;
pub use domain::entities::{DatabaseConfig, SyncJob};
pub use domain::services::{AdapterRegistry, CommandPipeline, SyncContext};
pub use domain::value_objects::{RemoteTarget, SyncState};
pub use error::{SyncError, SyncResult};
