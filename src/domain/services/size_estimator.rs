//! SizeEstimator - byte size of a remote directory tree
//!
//! Drives the progress meter of a directory sync.

use crate::domain::value_objects::shell_quote_path;
use crate::error::{SyncError, SyncResult};

use super::SyncContext;

pub struct SizeEstimator<'a> {
    ctx: &'a SyncContext<'a>,
}

impl<'a> SizeEstimator<'a> {
    pub fn new(ctx: &'a SyncContext<'a>) -> Self {
        Self { ctx }
    }

    /// Total bytes under `remote_path` on the context's target
    pub fn estimate(&self, remote_path: &str) -> SyncResult<u64> {
        self.ctx.step("calculate files size");
        let output = self.ctx.capture(&disk_usage_command(remote_path))?;
        let total = parse_disk_usage(remote_path, &output)?;
        self.ctx.step(format!("TOTAL: {}", format_bytes(total)));
        Ok(total)
    }
}

/// Remote disk-usage query restricted to `path`
pub fn disk_usage_command(path: &str) -> String {
    format!("du -sb {}", shell_quote_path(path))
}

/// Parse the first whitespace-delimited token of `du` output
pub fn parse_disk_usage(path: &str, output: &str) -> SyncResult<u64> {
    output
        .split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| SyncError::Estimation {
            path: path.to_string(),
            output: output.trim().to_string(),
        })
}

/// Format bytes in human-readable binary units
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{} {}", bytes, UNITS[0]);
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;
    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    format!("{:.2} {}", size, UNITS[unit_index])
}
