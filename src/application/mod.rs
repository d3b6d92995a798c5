//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SyncOrchestrator` - Drives one database or directory sync job
//! - `plan_job` - Turns invocation parameters into a `SyncJob`

pub mod jobs;
pub mod orchestrator;

pub use jobs::{plan_job, JobRequest};
pub use orchestrator::{check_dependencies, SyncOptions, SyncOrchestrator, SyncReport};
