//! Output formatting module

mod json;
mod sarif;
mod text;

use miette::Result;
use ordlint_core::FileReport;

use crate::cli::OutputFormat;

/// Prints `reports` in `format` and returns whether any report has findings.
pub fn output_results(reports: &[FileReport], format: OutputFormat) -> Result<bool> {
    let has_errors = reports.iter().any(|r| !r.is_valid());

    match format {
        OutputFormat::Sarif => sarif::output_sarif(reports)?,
        OutputFormat::Json => json::output_json(reports)?,
        OutputFormat::Text => text::output_text(reports),
    }

    Ok(has_errors)
}
