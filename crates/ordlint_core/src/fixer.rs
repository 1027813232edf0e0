//! Writing fixes back to disk.

use std::fs;

use tracing::debug;

use crate::{FileReport, LinterError};

/// Result of applying a report's fix to its file.
#[derive(Debug, PartialEq, Eq)]
pub struct FixerResult {
    /// Number of findings the fix resolved.
    pub fixes_applied: usize,
    /// Whether the file was rewritten.
    pub modified: bool,
}

impl FixerResult {
    /// Creates a result indicating no changes were made.
    pub fn unchanged() -> Self {
        Self {
            fixes_applied: 0,
            modified: false,
        }
    }
}

/// Writes `report.fixed_content` to `report.path` when the report changes it.
pub fn apply_fix_to_file(report: &FileReport) -> Result<FixerResult, LinterError> {
    if !report.changed {
        return Ok(FixerResult::unchanged());
    }

    fs::write(&report.path, &report.fixed_content).map_err(|e| {
        LinterError::file(format!("Failed to write {}: {}", report.path.display(), e))
    })?;
    debug!(
        "Fixed {} findings in {}",
        report.errors.len(),
        report.path.display()
    );

    Ok(FixerResult {
        fixes_applied: report.errors.len(),
        modified: true,
    })
}
