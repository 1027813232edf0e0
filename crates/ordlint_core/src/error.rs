//! Linter error types.

use thiserror::Error;

/// Errors from everything around the checks themselves.
///
/// The checks never fail; these cover configuration and file access.
#[derive(Debug, Error)]
pub enum LinterError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File error.
    #[error("File error: {0}")]
    File(String),
}

impl LinterError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a file error.
    pub fn file(message: impl Into<String>) -> Self {
        Self::File(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LinterError::config("bad glob").to_string(),
            "Configuration error: bad glob"
        );
        assert_eq!(
            LinterError::file("Failed to read a.md").to_string(),
            "File error: Failed to read a.md"
        );
    }
}
