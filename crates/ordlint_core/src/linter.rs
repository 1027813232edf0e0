//! Core linter engine.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::file_finder::FileFinder;
use crate::{
    FileReport, LinterConfig, LinterError, validate_code_block_indentation, validate_ordered_lists,
};

/// Result type for `lint_files` and `lint_patterns`.
///
/// Contains a tuple of:
/// - Successful reports
/// - Failed files with their errors (path and error)
pub type LintFilesResult = Result<(Vec<FileReport>, Vec<(PathBuf, LinterError)>), LinterError>;

/// Runs every enabled check over documents and files.
pub struct Linter {
    config: LinterConfig,
    finder: FileFinder,
}

impl Linter {
    /// Creates a new linter with the given configuration.
    pub fn new(config: LinterConfig) -> Result<Self, LinterError> {
        let finder = FileFinder::new(&config.include, &config.exclude)?;
        Ok(Self { config, finder })
    }

    pub fn config(&self) -> &LinterConfig {
        &self.config
    }

    /// Lints a document held in memory.
    ///
    /// The code block check runs first, and numbering is checked on its fixed
    /// output: re-indenting a fence can move it inside a list item, which
    /// decides whether the list continues after the block. Neither fix adds or
    /// removes lines, so every finding points at a line of the input. A clean
    /// document is returned unchanged.
    pub fn lint_content(&self, path: impl Into<PathBuf>, content: &str) -> FileReport {
        let path = path.into();
        let mut errors = Vec::new();

        let indented = if self.config.code_block_indent {
            let indentation = validate_code_block_indentation(content);
            errors.extend(indentation.errors);
            indentation.fixed_content
        } else {
            content.to_string()
        };

        let numbering = validate_ordered_lists(&indented, &self.config.lint_options());
        errors.extend(numbering.errors);
        errors.sort_by_key(|finding| (finding.line, finding.rule));

        if errors.is_empty() {
            debug!("{}: no findings", path.display());
            return FileReport {
                path,
                errors,
                fixed_content: content.to_string(),
                changed: false,
            };
        }

        let mut fixed_content = if numbering.fixed_content.is_empty() {
            indented
        } else {
            numbering.fixed_content
        };
        if content.ends_with('\n') && !fixed_content.ends_with('\n') {
            fixed_content.push('\n');
        }

        debug!("{}: {} findings", path.display(), errors.len());
        let changed = fixed_content != content;
        FileReport {
            path,
            errors,
            fixed_content,
            changed,
        }
    }

    /// Reads and lints a single file.
    pub fn lint_file(&self, path: &Path) -> Result<FileReport, LinterError> {
        let content = fs::read_to_string(path)
            .map_err(|e| LinterError::file(format!("Failed to read {}: {}", path.display(), e)))?;
        Ok(self.lint_content(path, &content))
    }

    /// Lints the given files in parallel.
    ///
    /// Returns a tuple of (successful reports, failed files with errors).
    pub fn lint_files(&self, paths: &[PathBuf]) -> LintFilesResult {
        let results: Vec<Result<FileReport, (PathBuf, LinterError)>> = paths
            .par_iter()
            .map(|path| self.lint_file(path).map_err(|e| (path.clone(), e)))
            .collect();

        let mut successes = Vec::new();
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(report) => successes.push(report),
                Err((path, error)) => {
                    warn!("Failed to lint {}: {}", path.display(), error);
                    failures.push((path, error));
                }
            }
        }

        Ok((successes, failures))
    }

    /// Lints files matching the given patterns.
    ///
    /// Globs are resolved against the configuration file's directory when
    /// there is one, and the working directory otherwise.
    pub fn lint_patterns(&self, patterns: &[String]) -> LintFilesResult {
        let base_dir = self
            .config
            .base_dir
            .clone()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from("."));
        let files = self.finder.discover_files(patterns, &base_dir)?;
        self.lint_files(&files)
    }
}
