//! File discovery.
//!
//! Patterns are either paths or globs. A file path is taken as is, a directory
//! is searched for markdown files, and anything else is matched as a glob
//! against every file under the base directory. Configured include and exclude
//! globs filter the result.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::LinterError;

/// Extensions searched for when a directory is given.
const MARKDOWN_EXTENSIONS: [&str; 3] = ["md", "markdown", "mdx"];

pub struct FileFinder {
    include: Option<GlobSet>,
    exclude: Option<GlobSet>,
}

impl FileFinder {
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self, LinterError> {
        Ok(Self {
            include: build_globset(include)?,
            exclude: build_globset(exclude)?,
        })
    }

    /// Checks whether include/exclude patterns filter out `path`.
    ///
    /// Patterns match either the path as given or the path relative to
    /// `base_dir`, so `node_modules/**` applies to `./node_modules/x.md` and
    /// to `/repo/node_modules/x.md` under `/repo`.
    pub fn should_ignore(&self, path: &Path, base_dir: &Path) -> bool {
        let relative = relative_to(path, base_dir);
        let relative = relative.strip_prefix(".").unwrap_or(relative);
        let matches = |set: &GlobSet| set.is_match(path) || set.is_match(relative);

        let excluded = self.exclude.as_ref().is_some_and(matches);
        let not_included = self.include.as_ref().is_some_and(|includes| !matches(includes));
        excluded || not_included
    }

    /// Resolves `patterns` to a sorted, de-duplicated list of files.
    pub fn discover_files(
        &self,
        patterns: &[String],
        base_dir: &Path,
    ) -> Result<Vec<PathBuf>, LinterError> {
        let mut files = Vec::new();
        let mut globs = Vec::new();

        for pattern in patterns {
            let path = Path::new(pattern);
            match path.symlink_metadata() {
                Ok(meta) if meta.file_type().is_file() => files.push(path.to_path_buf()),
                Ok(meta) if meta.is_dir() => {
                    files.extend(walk_files(path).filter(|p| is_markdown(p)));
                }
                _ => globs.push(pattern.as_str()),
            }
        }

        if !globs.is_empty() {
            let glob_set = build_globset(&globs)?.unwrap_or_else(GlobSet::empty);
            files.extend(walk_files(base_dir).filter(|path| {
                glob_set.is_match(path) || glob_set.is_match(relative_to(path, base_dir))
            }));
        }

        files.retain(|path| {
            let ignored = self.should_ignore(path, base_dir);
            if ignored {
                debug!("Ignoring {}", path.display());
            }
            !ignored
        });
        files.sort();
        files.dedup();

        info!("Discovered {} files to lint", files.len());
        Ok(files)
    }
}

fn build_globset<S: AsRef<str>>(patterns: &[S]) -> Result<Option<GlobSet>, LinterError> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let glob = Glob::new(pattern).map_err(|e| {
            LinterError::config(format!("Invalid glob pattern '{}': {}", pattern, e))
        })?;
        builder.add(glob);
    }

    builder
        .build()
        .map(Some)
        .map_err(|e| LinterError::config(format!("Failed to build globset: {}", e)))
}

fn walk_files(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

fn relative_to<'p>(path: &'p Path, base: &Path) -> &'p Path {
    path.strip_prefix(base).unwrap_or(path)
}
