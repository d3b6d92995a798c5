//! LocalDatabase port - destructive preparation of the local database

use crate::error::SyncResult;

/// Drops and recreates the local database for an environment
pub trait LocalDatabase {
    /// Drop and recreate the database of `env`, returning the exit status
    fn drop_and_create(&self, env: &str) -> SyncResult<i32>;
}
