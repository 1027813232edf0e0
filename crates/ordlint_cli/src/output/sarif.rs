//! SARIF output formatter

use miette::{IntoDiagnostic, Result};
use ordlint_core::FileReport;

pub fn output_sarif(reports: &[FileReport]) -> Result<()> {
    let sarif_output = ordlint_core::generate_sarif(reports).into_diagnostic()?;
    println!("{}", sarif_output);
    Ok(())
}
