//! Section matching and tree construction.

use crate::error::ParseError;
use crate::lexer::{TagKind, Token};

/// A node in a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Variable {
        name: String,
        escape: bool,
    },
    Section {
        name: String,
        inverted: bool,
        children: Vec<Node>,
    },
    Partial(String),
}

/// A section that has been opened but not yet closed.
struct OpenSection {
    name: String,
    inverted: bool,
    offset: usize,
    children: Vec<Node>,
}

/// Build a node tree from a token sequence.
///
/// Fails on the first close tag that does not match the innermost open section,
/// or on a section left open at the end of input.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Node>, ParseError> {
    let mut root = Vec::new();
    let mut open: Vec<OpenSection> = Vec::new();

    for token in tokens {
        let node = match token {
            Token::Text(text) => Node::Text(text),
            Token::Tag { kind, name, span } => match kind {
                TagKind::Variable => Node::Variable { name, escape: true },
                TagKind::UnescapedVariable => Node::Variable {
                    name,
                    escape: false,
                },
                TagKind::Partial => Node::Partial(name),
                TagKind::Comment => continue,
                TagKind::SectionOpen | TagKind::InvertedSectionOpen => {
                    open.push(OpenSection {
                        name,
                        inverted: kind == TagKind::InvertedSectionOpen,
                        offset: span.start,
                        children: Vec::new(),
                    });
                    continue;
                }
                TagKind::SectionClose => match open.pop() {
                    Some(section) if section.name == name => Node::Section {
                        name: section.name,
                        inverted: section.inverted,
                        children: section.children,
                    },
                    _ => return Err(ParseError::unbalanced(name, span.start)),
                },
            },
        };

        match open.last_mut() {
            Some(section) => section.children.push(node),
            None => root.push(node),
        }
    }

    match open.pop() {
        Some(section) => Err(ParseError::unclosed(section.name, section.offset)),
        None => Ok(root),
    }
}
