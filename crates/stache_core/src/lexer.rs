//! Template tokenizer.
//!
//! Splits template text into literal runs and `{{…}}` tags. The lexer knows
//! nothing about nesting; that is the parser's job.

use std::ops::Range;

use crate::error::LexError;

pub const TAG_OPEN: &str = "{{";
pub const TAG_CLOSE: &str = "}}";
const TRIPLE_CLOSE: &str = "}}}";

/// What a tag does, decided by its leading sigil.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `{{name}}`
    Variable,
    /// `{{{name}}}` or `{{&name}}`
    UnescapedVariable,
    /// `{{#name}}`
    SectionOpen,
    /// `{{/name}}`
    SectionClose,
    /// `{{^name}}`
    InvertedSectionOpen,
    /// `{{! text}}`
    Comment,
    /// `{{> name}}`
    Partial,
}

impl TagKind {
    fn from_sigil(c: char) -> Option<Self> {
        match c {
            '#' => Some(Self::SectionOpen),
            '^' => Some(Self::InvertedSectionOpen),
            '/' => Some(Self::SectionClose),
            '!' => Some(Self::Comment),
            '>' => Some(Self::Partial),
            '&' => Some(Self::UnescapedVariable),
            _ => None,
        }
    }
}

/// A lexical item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Text(String),
    Tag {
        kind: TagKind,
        name: String,
        /// Byte range of the whole tag, delimiters included.
        span: Range<usize>,
    },
}

/// Scan `source` into tokens.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(found) = source[pos..].find(TAG_OPEN) {
        let start = pos + found;
        if start > pos {
            tokens.push(Token::Text(source[pos..start].to_string()));
        }

        let inner_start = start + TAG_OPEN.len();
        let triple = source[inner_start..].starts_with('{');
        let (content, end) = if triple {
            let close = source[inner_start + 1..]
                .find(TRIPLE_CLOSE)
                .ok_or(LexError::UnterminatedTag { offset: start })?;
            let content_end = inner_start + 1 + close;
            (
                &source[inner_start + 1..content_end],
                content_end + TRIPLE_CLOSE.len(),
            )
        } else {
            let close = source[inner_start..]
                .find(TAG_CLOSE)
                .ok_or(LexError::UnterminatedTag { offset: start })?;
            let content_end = inner_start + close;
            (&source[inner_start..content_end], content_end + TAG_CLOSE.len())
        };

        tokens.push(classify(content, triple, start..end));
        pos = end;
    }

    if pos < source.len() {
        tokens.push(Token::Text(source[pos..].to_string()));
    }

    Ok(tokens)
}

fn classify(content: &str, triple: bool, span: Range<usize>) -> Token {
    if triple {
        return Token::Tag {
            kind: TagKind::UnescapedVariable,
            name: content.trim().to_string(),
            span,
        };
    }

    let trimmed = content.trim_start();
    let mut chars = trimmed.chars();
    let (kind, rest) = match chars.next().and_then(TagKind::from_sigil) {
        Some(kind) => (kind, chars.as_str()),
        None => (TagKind::Variable, trimmed),
    };

    Token::Tag {
        kind,
        name: rest.trim().to_string(),
        span,
    }
}
