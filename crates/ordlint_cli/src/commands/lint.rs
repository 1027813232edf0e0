//! Lint command implementation

use std::io::Read;

use miette::{IntoDiagnostic, Result};
use ordlint_core::{Linter, LinterConfig, ListStyle};
use tracing::{debug, info};

use crate::cli::{Cli, OutputFormat};
use crate::fix::{apply_fixes, output_fix_summary};
use crate::output::output_results;

/// Name reported for content read from stdin.
const STDIN_PATH: &str = "<stdin>";

pub fn run_lint(
    cli: &Cli,
    patterns: &[String],
    style: Option<ListStyle>,
    format: OutputFormat,
    fix: bool,
    dry_run: bool,
) -> Result<bool> {
    let mut config = if let Some(ref path) = cli.config {
        LinterConfig::from_file(path).into_diagnostic()?
    } else {
        find_config()?
    };

    if let Some(style) = style {
        debug!("List style overridden to {}", style);
        config.list_style = style;
    }

    let linter = Linter::new(config).into_diagnostic()?;

    if matches!(patterns, [pattern] if pattern == "-") {
        return lint_stdin(&linter, format, fix && !dry_run);
    }

    let (reports, failures) = linter.lint_patterns(patterns).into_diagnostic()?;

    if !failures.is_empty() {
        eprintln!("\n{} file(s) failed to lint:", failures.len());
        for (path, error) in &failures {
            eprintln!("  {}: {}", path.display(), error);
        }
    }

    if fix {
        let fix_summary = apply_fixes(&reports, dry_run)?;
        output_fix_summary(&fix_summary, dry_run);

        if dry_run {
            let has_errors = output_results(&reports, format)?;
            return Ok(has_errors || !failures.is_empty());
        }

        return Ok(!fix_summary.errors.is_empty() || !failures.is_empty());
    }

    let has_errors = output_results(&reports, format)?;

    Ok(has_errors || !failures.is_empty())
}

/// Lints stdin. With `fix`, the corrected document is written to stdout
/// instead of a report.
fn lint_stdin(linter: &Linter, format: OutputFormat, fix: bool) -> Result<bool> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .into_diagnostic()?;

    let report = linter.lint_content(STDIN_PATH, &content);

    if fix {
        print!("{}", report.fixed_content);
        return Ok(false);
    }

    output_results(std::slice::from_ref(&report), format)
}

pub fn find_config() -> Result<LinterConfig> {
    if let Some(path) = LinterConfig::discover(".") {
        info!("Using config: {}", path.display());
        return LinterConfig::from_file(&path).into_diagnostic();
    }

    info!("No config file found, using defaults");
    Ok(LinterConfig::new())
}
