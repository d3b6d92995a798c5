//! Common test utilities for devsync CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working directory with fake `ssh` and `pv` on PATH
//! - Fixtures: Reusable database config documents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
