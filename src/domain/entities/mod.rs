//! Domain Entities
//!
//! Per-job data. Nothing here outlives a single invocation.
//! - `DatabaseConfig` - Connection settings for one side of a database sync
//! - `SyncJob` - The job being processed, with its resolved-or-not slots
//! - `Resolution` - A value computed at most once per job

mod database_config;
mod resolution;
mod sync_job;

pub use database_config::DatabaseConfig;
pub use resolution::Resolution;
pub use sync_job::{DatabaseJob, DirectoryJob, SyncJob};
