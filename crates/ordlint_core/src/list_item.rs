//! Line classification.
//!
//! Lines are classified by hand instead of with a regex so that the accepted
//! shapes are explicit: indentation is the run of leading spaces and tabs, the
//! numeral is one or more ASCII digits, and the marker is `.` followed by at
//! least one space or tab.

/// Characters accepted as indentation and as the separator after `.`.
const BLANKS: [char; 2] = [' ', '\t'];

/// Marker that opens or closes a fenced code block.
const FENCE: &str = "```";

/// An ordered-list item line such as `   2. Install the tool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem<'a> {
    /// Leading spaces and tabs.
    pub indent: &'a str,
    /// The numeral before the `.`.
    ///
    /// Numerals too large for `u64` are read as `0`.
    pub number: u64,
    /// Everything after the `.`, starting with the separator whitespace.
    pub rest: &'a str,
}

impl<'a> ListItem<'a> {
    /// Parses `line` as a list item, returning `None` for any other line.
    pub fn parse(line: &'a str) -> Option<Self> {
        let indent = leading_whitespace(line);
        let marker = &line[indent.len()..];

        let digits_len = marker.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return None;
        }

        let (digits, tail) = marker.split_at(digits_len);
        let rest = tail.strip_prefix('.')?;
        if !rest.starts_with(BLANKS) {
            return None;
        }

        Some(Self {
            indent,
            number: digits.parse().unwrap_or(0),
            rest,
        })
    }

    /// Text of the item after the separator.
    pub fn content(&self) -> &'a str {
        self.rest.trim_start_matches(BLANKS)
    }

    /// Rebuilds the line with a different numeral.
    ///
    /// Indentation, separator and content are kept byte for byte.
    pub fn renumber(&self, number: u64) -> String {
        format!("{}{}.{}", self.indent, number, self.rest)
    }
}

/// Returns the leading spaces and tabs of `line`.
pub fn leading_whitespace(line: &str) -> &str {
    let len = line.len() - line.trim_start_matches(BLANKS).len();
    &line[..len]
}

/// Whether `line` opens or closes a fenced code block.
pub fn is_fence(line: &str) -> bool {
    line.trim().starts_with(FENCE)
}

/// Whether `line` holds only whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_simple_item() {
        let item = ListItem::parse("1. First item").unwrap();
        assert_eq!(item.indent, "");
        assert_eq!(item.number, 1);
        assert_eq!(item.rest, " First item");
        assert_eq!(item.content(), "First item");
    }

    #[test]
    fn test_parse_indented_item() {
        let item = ListItem::parse("   12. Nested").unwrap();
        assert_eq!(item.indent, "   ");
        assert_eq!(item.number, 12);
        assert_eq!(item.content(), "Nested");
    }

    #[test]
    fn test_parse_tab_separator() {
        let item = ListItem::parse("\t3.\tTabbed").unwrap();
        assert_eq!(item.indent, "\t");
        assert_eq!(item.number, 3);
        assert_eq!(item.content(), "Tabbed");
    }

    #[test]
    fn test_parse_leading_zeros() {
        let item = ListItem::parse("007. Agent").unwrap();
        assert_eq!(item.number, 7);
    }

    #[test]
    fn test_parse_overflowing_numeral_reads_as_zero() {
        let item = ListItem::parse("99999999999999999999999. Huge").unwrap();
        assert_eq!(item.number, 0);
        assert_eq!(item.content(), "Huge");
    }

    #[rstest]
    #[case::no_space_after_dot("1.First")]
    #[case::dot_at_end_of_line("1.")]
    #[case::paren_delimiter("1) First")]
    #[case::no_digits(". First")]
    #[case::bullet("- First")]
    #[case::prose("Version 1. is out")]
    #[case::decimal("1.5 apples")]
    #[case::empty("")]
    fn test_parse_rejects(#[case] line: &str) {
        assert_eq!(ListItem::parse(line), None);
    }

    #[test]
    fn test_renumber_keeps_layout() {
        let item = ListItem::parse("   3.  Spaced  content ").unwrap();
        assert_eq!(item.renumber(1), "   1.  Spaced  content ");
    }

    #[rstest]
    #[case("```", true)]
    #[case("   ```rust", true)]
    #[case("````", true)]
    #[case("``", false)]
    #[case("text ```", false)]
    fn test_is_fence(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_fence(line), expected);
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \t"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(leading_whitespace("  \tabc"), "  \t");
        assert_eq!(leading_whitespace("abc"), "");
        assert_eq!(leading_whitespace("   "), "   ");
    }
}
