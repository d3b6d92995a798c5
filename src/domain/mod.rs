//! Domain Layer
//!
//! The sync core: config resolution, adapter command builders, size
//! estimation and pipeline composition.
//!
//! ## Structure
//!
//! - `entities/` - Per-job data (DatabaseConfig, SyncJob, Resolution)
//! - `value_objects/` - Immutable value types (RemoteTarget, TableFilter, SyncState)
//! - `services/` - ConfigResolver, AdapterRegistry, SizeEstimator, CommandPipeline
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - Remote and local processes are reached through ports
//! 2. **Pure builders** - Command text is a function of its inputs only
//! 3. **Ports & Adapters** - Tests swap in recording implementations

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
