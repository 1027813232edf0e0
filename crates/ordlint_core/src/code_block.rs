//! Indentation of fenced code blocks nested in list items.
//!
//! A fence opened while a list item is active must sit exactly three spaces
//! past the item's indentation, and every line of the block must keep at
//! least that indentation. Fences outside any list are passed through.

use crate::list_item::{self, ListItem};
use crate::result::{Finding, LintResult, Rule};

/// Extra indentation of a code block relative to its list item.
const CODE_BLOCK_INDENT: &str = "   ";

const FENCE_MESSAGE: &str = "Code block should be indented with 3 spaces from list item";
const CONTENT_MESSAGE: &str = "Code block content should maintain indentation";

#[derive(Debug, Default)]
enum Fence {
    #[default]
    Closed,
    /// Inside a block opened under a list item.
    InItem { expected: String },
    /// Inside a block opened outside any list.
    Detached,
}

#[derive(Debug, Default)]
struct Walk<'a> {
    in_list: bool,
    list_indent: &'a str,
    fence: Fence,
}

/// A line that needs new indentation.
struct Reindent {
    message: &'static str,
    line: String,
}

impl Reindent {
    fn to(expected: &str, line: &str, message: &'static str) -> Self {
        Self {
            message,
            line: format!("{}{}", expected, line.trim()),
        }
    }
}

impl<'a> Walk<'a> {
    fn visit(&mut self, line: &'a str) -> Option<Reindent> {
        match std::mem::take(&mut self.fence) {
            Fence::Detached => {
                if !list_item::is_fence(line) {
                    self.fence = Fence::Detached;
                }
                None
            }
            Fence::InItem { expected } => {
                if list_item::is_fence(line) {
                    return check_fence(line, &expected);
                }
                let reindent = (!list_item::is_blank(line) && !line.starts_with(&expected))
                    .then(|| Reindent::to(&expected, line, CONTENT_MESSAGE));
                self.fence = Fence::InItem { expected };
                reindent
            }
            Fence::Closed => {
                if let Some(item) = ListItem::parse(line) {
                    self.in_list = true;
                    self.list_indent = item.indent;
                    None
                } else if list_item::is_fence(line) {
                    if !self.in_list {
                        self.fence = Fence::Detached;
                        return None;
                    }
                    let expected = format!("{}{}", self.list_indent, CODE_BLOCK_INDENT);
                    let reindent = check_fence(line, &expected);
                    self.fence = Fence::InItem { expected };
                    reindent
                } else {
                    if list_item::is_blank(line) {
                        self.in_list = false;
                    }
                    None
                }
            }
        }
    }
}

fn check_fence(line: &str, expected: &str) -> Option<Reindent> {
    (list_item::leading_whitespace(line) != expected)
        .then(|| Reindent::to(expected, line, FENCE_MESSAGE))
}

/// Validates the indentation of fenced code blocks inside list items.
///
/// Offending lines are re-indented to the item's indentation plus three
/// spaces in [`LintResult::fixed_content`].
pub fn validate_code_block_indentation(content: &str) -> LintResult {
    let mut walk = Walk::default();
    let mut errors = Vec::new();
    let mut fixed = String::with_capacity(content.len());

    for (index, line) in content.split('\n').enumerate() {
        match walk.visit(line) {
            Some(reindent) => {
                errors.push(Finding::new(Rule::CodeBlockIndent, index + 1, reindent.message));
                fixed.push_str(&reindent.line);
            }
            None => fixed.push_str(line),
        }
        fixed.push('\n');
    }

    LintResult {
        errors,
        fixed_content: fixed.trim_end().to_string(),
    }
}
