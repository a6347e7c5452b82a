//! vCard parse error types.

use std::fmt;

/// Result type for strict vCard parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// A line rejected by strict parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Line number where the error occurred (1-based, blank lines counted).
    pub line: usize,
    /// Additional context or message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    /// Creates a missing separator error for a line without a colon.
    #[must_use]
    pub fn missing_separator(line: usize, content: &str) -> Self {
        Self::new(
            ParseErrorKind::MissingSeparator,
            line,
            format!("no ':' in {content:?}"),
        )
    }

    /// Creates an empty property name error for a line starting with a colon.
    #[must_use]
    pub fn empty_property_name(line: usize) -> Self {
        Self::new(
            ParseErrorKind::EmptyPropertyName,
            line,
            "property key before ':' is empty",
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.kind, self.message)
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Line has no `:` between key and value.
    MissingSeparator,
    /// Line has an empty key.
    EmptyPropertyName,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator => write!(f, "missing separator"),
            Self::EmptyPropertyName => write!(f, "empty property name"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line_and_kind() {
        let err = ParseError::missing_separator(4, "INVALID_LINE_WITHOUT_COLON");
        assert_eq!(
            err.to_string(),
            "line 4: missing separator: no ':' in \"INVALID_LINE_WITHOUT_COLON\""
        );
    }

    #[test]
    fn empty_name_kind() {
        let err = ParseError::empty_property_name(2);
        assert_eq!(err.kind, ParseErrorKind::EmptyPropertyName);
        assert_eq!(err.line, 2);
    }
}
