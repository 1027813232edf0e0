//! Fix application logic

use std::path::PathBuf;

use miette::Result;
use ordlint_core::{FileReport, apply_fix_to_file};
use tracing::error;

/// Summary of applied fixes.
pub struct FixSummary {
    pub total_fixes: usize,
    pub files_fixed: usize,
    pub fixes_by_file: Vec<(PathBuf, usize)>,
    pub errors: Vec<(PathBuf, String)>,
}

/// Applies fixes to every file whose report changes it.
pub fn apply_fixes(reports: &[FileReport], dry_run: bool) -> Result<FixSummary> {
    let mut total_fixes = 0;
    let mut files_fixed = 0;
    let mut fixes_by_file = Vec::new();
    let mut errors = Vec::new();

    for report in reports {
        if !report.changed {
            continue;
        }

        if dry_run {
            fixes_by_file.push((report.path.clone(), report.errors.len()));
            total_fixes += report.errors.len();
            files_fixed += 1;
            continue;
        }

        match apply_fix_to_file(report) {
            Ok(fixer_result) => {
                if fixer_result.modified {
                    fixes_by_file.push((report.path.clone(), fixer_result.fixes_applied));
                    total_fixes += fixer_result.fixes_applied;
                    files_fixed += 1;
                }
            }
            Err(e) => {
                error!("Failed to fix {}: {}", report.path.display(), e);
                errors.push((report.path.clone(), e.to_string()));
            }
        }
    }

    Ok(FixSummary {
        total_fixes,
        files_fixed,
        fixes_by_file,
        errors,
    })
}

/// Outputs the fix summary.
pub fn output_fix_summary(summary: &FixSummary, dry_run: bool) {
    if summary.total_fixes == 0 && summary.errors.is_empty() {
        println!("No fixable issues found.");
        return;
    }

    if summary.total_fixes > 0 {
        let action = if dry_run { "Would fix" } else { "Fixed" };

        println!(
            "\n{} {} issues in {} files:",
            action, summary.total_fixes, summary.files_fixed
        );
        for (path, count) in &summary.fixes_by_file {
            println!("  {}: {} fixes", path.display(), count);
        }

        if dry_run {
            println!("\nRun without --dry-run to apply fixes.");
        }
    }

    if !summary.errors.is_empty() {
        eprintln!("\nFailed to fix {} file(s):", summary.errors.len());
        for (path, err) in &summary.errors {
            eprintln!("  {}: {}", path.display(), err);
        }
    }
}
