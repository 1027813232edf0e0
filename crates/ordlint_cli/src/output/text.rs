//! Text output formatter

use ordlint_core::FileReport;

pub fn output_text(reports: &[FileReport]) {
    for report in reports {
        for finding in &report.errors {
            println!(
                "{}:{}: [{}] {}",
                report.path.display(),
                finding.line,
                finding.rule,
                finding.message
            );
        }
    }

    let total_files = reports.len();
    let total_issues: usize = reports.iter().map(|r| r.errors.len()).sum();

    println!();
    println!(
        "Checked {} files, found {} issues",
        total_files, total_issues
    );
}
