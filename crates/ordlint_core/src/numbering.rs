//! Ordered-list numbering validation and auto-fix.
//!
//! The document is walked line by line with a small state machine. A list is a
//! run of items at one indentation; deeper items open a nested list and
//! shallower items close it again, so the outer list resumes its count. Blank
//! lines end every open list. A fenced code block ends them too, unless the
//! fence is indented under the current item, in which case the block belongs
//! to that item. Lines inside a fenced block are never treated as items.

use tracing::trace;

use crate::list_item::{self, ListItem};
use crate::result::{Finding, LintResult, Rule};
use crate::style::{LintOptions, ListStyle};

/// An open list at one indentation.
#[derive(Debug)]
struct ListContext<'a> {
    indent: &'a str,
    /// Next numeral under [`ListStyle::Ordered`].
    next_number: u64,
    /// Numeral written for the previous item, after correction.
    previous: Option<u64>,
}

impl<'a> ListContext<'a> {
    fn new(indent: &'a str) -> Self {
        Self {
            indent,
            next_number: 1,
            previous: None,
        }
    }

    /// Checks `actual` against `style` and advances the context.
    fn check(&mut self, style: ListStyle, actual: u64) -> Verdict {
        let verdict = match style {
            ListStyle::One => Verdict::exactly(actual, 1, "Expected list item to start with '1.'"),
            ListStyle::Zero => Verdict::exactly(actual, 0, "Expected list item to start with '0.'"),
            ListStyle::Ordered => {
                let expected = self.next_number;
                self.next_number = self.next_number.saturating_add(1);
                Verdict::exactly(
                    actual,
                    expected,
                    format!("Expected list item to be '{expected}.'"),
                )
            }
            ListStyle::OneOrOrdered => match self.previous {
                None => Verdict::exactly(actual, 1, "First list item should start with '1.'"),
                Some(previous) if actual == previous || actual == previous.saturating_add(1) => {
                    Verdict::Conforming
                }
                Some(previous) => Verdict::Renumber {
                    number: previous.saturating_add(1),
                    message: "List item should either match previous number or increment by 1"
                        .to_string(),
                },
            },
        };

        self.previous = Some(verdict.written(actual));
        verdict
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Verdict {
    Conforming,
    Renumber { number: u64, message: String },
}

impl Verdict {
    fn exactly(actual: u64, expected: u64, message: impl Into<String>) -> Self {
        if actual == expected {
            Verdict::Conforming
        } else {
            Verdict::Renumber {
                number: expected,
                message: message.into(),
            }
        }
    }

    /// The numeral that ends up in the fixed document.
    fn written(&self, actual: u64) -> u64 {
        match self {
            Verdict::Conforming => actual,
            Verdict::Renumber { number, .. } => *number,
        }
    }
}

#[derive(Debug, Default)]
struct Walk<'a> {
    /// Open lists, outermost first.
    lists: Vec<ListContext<'a>>,
    in_fence: bool,
}

impl<'a> Walk<'a> {
    fn end_lists(&mut self) {
        self.lists.clear();
    }

    fn open_fence(&mut self, line: &str) {
        let indent = list_item::leading_whitespace(line);
        let inside_item = self
            .lists
            .last()
            .is_some_and(|list| indent.len() > list.indent.len());
        if !inside_item {
            self.end_lists();
        }
        self.in_fence = true;
    }

    /// Returns the list an item at `indent` belongs to, opening one if needed.
    fn enter_item(&mut self, indent: &'a str) -> &mut ListContext<'a> {
        while self.lists.last().is_some_and(|list| {
            list.indent.len() > indent.len()
                || (list.indent.len() == indent.len() && list.indent != indent)
        }) {
            self.lists.pop();
        }

        let continues = self.lists.last().is_some_and(|list| list.indent == indent);
        if !continues {
            self.lists.push(ListContext::new(indent));
        }

        let innermost = self.lists.len() - 1;
        &mut self.lists[innermost]
    }
}

/// Validates ordered-list numbering against `options.list_style`.
///
/// Every violation is reported as a [`Finding`] and corrected in
/// [`LintResult::fixed_content`]; only the numeral of an offending line is
/// rewritten.
pub fn validate_ordered_lists(content: &str, options: &LintOptions) -> LintResult {
    let mut walk = Walk::default();
    let mut errors = Vec::new();
    let mut fixed = String::with_capacity(content.len());

    for (index, line) in content.split('\n').enumerate() {
        if walk.in_fence {
            if list_item::is_fence(line) {
                walk.in_fence = false;
            }
            push_line(&mut fixed, line);
            continue;
        }

        let Some(item) = ListItem::parse(line) else {
            if list_item::is_fence(line) {
                walk.open_fence(line);
            } else if list_item::is_blank(line) {
                walk.end_lists();
            }
            push_line(&mut fixed, line);
            continue;
        };

        match walk.enter_item(item.indent).check(options.list_style, item.number) {
            Verdict::Conforming => push_line(&mut fixed, line),
            Verdict::Renumber { number, message } => {
                trace!(line = index + 1, found = item.number, number, "renumbering list item");
                errors.push(Finding::new(Rule::ListNumbering, index + 1, message));
                push_line(&mut fixed, &item.renumber(number));
            }
        }
    }

    LintResult {
        errors,
        fixed_content: fixed.trim_end().to_string(),
    }
}

/// Returns `content` with list numbering fixed.
///
/// Only the numbering check runs; see
/// [`validate_code_block_indentation`](crate::validate_code_block_indentation)
/// for the indentation check.
pub fn fix_list_formatting(content: &str, options: &LintOptions) -> String {
    let result = validate_ordered_lists(content, options);
    if result.fixed_content.is_empty() {
        content.to_string()
    } else {
        result.fixed_content
    }
}

fn push_line(buf: &mut String, line: &str) {
    buf.push_str(line);
    buf.push('\n');
}
