//! Error types for template compilation.
//!
//! Only structural problems in the template text are errors. Anything that goes
//! wrong while looking values up during rendering degrades to empty output instead.

use std::fmt;

use thiserror::Error;

/// Result type alias for compile operations.
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors raised while scanning template text into tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("Unterminated tag starting at byte {offset}")]
    UnterminatedTag { offset: usize },
}

/// The kind of structural problem found by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A close tag that does not match the innermost open section, or closes nothing.
    UnbalancedSection,
    /// A section still open at the end of the template.
    UnclosedSection,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnbalancedSection => write!(f, "Unbalanced section"),
            Self::UnclosedSection => write!(f, "Unclosed section"),
        }
    }
}

/// A section nesting error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} '{name}' at byte {offset}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Name of the offending tag.
    pub name: String,
    /// Byte offset of the offending tag in the source.
    pub offset: usize,
}

impl ParseError {
    pub fn unbalanced(name: impl Into<String>, offset: usize) -> Self {
        Self {
            kind: ParseErrorKind::UnbalancedSection,
            name: name.into(),
            offset,
        }
    }

    pub fn unclosed(name: impl Into<String>, offset: usize) -> Self {
        Self {
            kind: ParseErrorKind::UnclosedSection,
            name: name.into(),
            offset,
        }
    }
}

/// Errors that can occur while compiling a template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}
