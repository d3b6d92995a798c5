//! Configuration module for devsync
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DEVSYNC_*)
//! 3. Project config (./devsync.toml or --config)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_or_default, ConfigWarning};
pub use types::{Config, RemoteConfig};
