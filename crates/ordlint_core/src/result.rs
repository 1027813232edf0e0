//! Lint findings and results.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// The check that produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// Ordered-list numbering.
    ListNumbering,
    /// Indentation of fenced code blocks inside list items.
    CodeBlockIndent,
}

impl Rule {
    /// Stable identifier used in reports.
    pub fn id(&self) -> &'static str {
        match self {
            Rule::ListNumbering => "list-numbering",
            Rule::CodeBlockIndent => "code-block-indent",
        }
    }

    /// One-line description of what the rule checks.
    pub fn description(&self) -> &'static str {
        match self {
            Rule::ListNumbering => "Ordered list items follow the configured numbering style",
            Rule::CodeBlockIndent => {
                "Fenced code blocks in list items are indented 3 spaces past the item"
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A single rule violation.
///
/// Displays as `Line <n>: <message>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// 1-based line number.
    pub line: usize,
    pub rule: Rule,
    pub message: String,
}

impl Finding {
    pub fn new(rule: Rule, line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            rule,
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

/// Outcome of one check over one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintResult {
    /// Findings in line order.
    pub errors: Vec<Finding>,
    /// The document with every finding corrected, trailing whitespace trimmed.
    pub fixed_content: String,
}

impl LintResult {
    /// True when no finding was reported.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Findings rendered as `Line <n>: <message>`.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Findings and fix for one file (or stdin).
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    /// Findings of every enabled check, ordered by line.
    pub errors: Vec<Finding>,
    /// Content after all fixes. Equal to the input when nothing was found.
    pub fixed_content: String,
    /// Whether `fixed_content` differs from the input.
    pub changed: bool,
}

impl FileReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
