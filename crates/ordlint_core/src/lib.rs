//! # ordlint_core
//!
//! Ordered-list linter for markdown.
//!
//! This crate provides:
//! - Numbering validation and auto-fix under a selectable [`ListStyle`]
//! - Indentation validation for fenced code blocks nested in list items
//! - Configuration loading, file discovery and parallel file linting
//! - SARIF output
//!
//! The checks are pure functions over text:
//!
//! ```rust
//! use ordlint_core::{LintOptions, ListStyle, fix_list_formatting, validate_ordered_lists};
//!
//! let options = LintOptions::new(ListStyle::Ordered);
//! let result = validate_ordered_lists("1. a\n3. b\n4. c", &options);
//! assert!(!result.is_valid());
//! assert_eq!(result.messages()[0], "Line 2: Expected list item to be '2.'");
//!
//! assert_eq!(fix_list_formatting("1. a\n3. b\n4. c", &options), "1. a\n2. b\n3. c");
//! ```
//!
//! [`Linter`] runs both checks over files:
//!
//! ```rust,ignore
//! use ordlint_core::{Linter, LinterConfig};
//!
//! let config = LinterConfig::from_file(".ordlint.jsonc")?;
//! let linter = Linter::new(config)?;
//!
//! let (reports, failures) = linter.lint_patterns(&["docs/**/*.md".to_string()])?;
//! for report in reports {
//!     println!("{}: {} issues", report.path.display(), report.errors.len());
//! }
//! ```

mod code_block;
mod config;
mod error;
pub mod file_finder;
mod fixer;
pub mod formatters;
mod linter;
pub mod list_item;
mod numbering;
mod result;
mod style;

pub use code_block::validate_code_block_indentation;
pub use config::LinterConfig;
pub use error::LinterError;
pub use fixer::{FixerResult, apply_fix_to_file};
pub use formatters::generate_sarif;
pub use linter::{LintFilesResult, Linter};
pub use numbering::{fix_list_formatting, validate_ordered_lists};
pub use result::{FileReport, Finding, LintResult, Rule};
pub use style::{LintOptions, ListStyle, ParseListStyleError};
