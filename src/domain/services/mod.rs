//! Domain Services
//!
//! The sync core. Builders and parsers here are pure; anything that needs
//! the remote host goes through the injected [`SyncContext`].

mod adapter_registry;
mod config_resolver;
mod context;
mod pipeline;
mod size_estimator;

pub use adapter_registry::{AdapterBuilders, AdapterRegistry, DumpBuilder, LoadBuilder};
pub use config_resolver::{parse_database_config, ConfigResolver};
pub use context::SyncContext;
pub use pipeline::{CommandPipeline, PipelineStage, ProgressMeter};
pub use size_estimator::{disk_usage_command, format_bytes, parse_disk_usage, SizeEstimator};
