//! List numbering policies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The numbering convention ordered lists are checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStyle {
    /// Every item is `1.`.
    One,
    /// Items count up from `1.` in steps of one.
    Ordered,
    /// Every item is `0.`.
    Zero,
    /// The first item is `1.`; each later item repeats the previous numeral
    /// or adds one to it.
    #[default]
    OneOrOrdered,
}

impl ListStyle {
    /// All styles, in the order they are documented.
    pub const ALL: [ListStyle; 4] = [
        ListStyle::One,
        ListStyle::Ordered,
        ListStyle::Zero,
        ListStyle::OneOrOrdered,
    ];

    /// The configuration name of the style.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListStyle::One => "one",
            ListStyle::Ordered => "ordered",
            ListStyle::Zero => "zero",
            ListStyle::OneOrOrdered => "one_or_ordered",
        }
    }
}

impl fmt::Display for ListStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no [`ListStyle`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown list style '{0}' (expected one, ordered, zero or one_or_ordered)")]
pub struct ParseListStyleError(String);

impl FromStr for ListStyle {
    type Err = ParseListStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| ParseListStyleError(s.to_string()))
    }
}

/// Options for [`validate_ordered_lists`](crate::validate_ordered_lists).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LintOptions {
    /// Expected numbering convention.
    pub list_style: ListStyle,
}

impl LintOptions {
    pub fn new(list_style: ListStyle) -> Self {
        Self { list_style }
    }
}
