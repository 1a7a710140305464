//! Compiled templates.

use tracing::debug;

use crate::error::CompileResult;
use crate::lexer::tokenize;
use crate::parser::{parse, Node};
use crate::renderer::Renderer;
use crate::value::Value;

/// A template source paired with its parsed node tree.
///
/// Immutable once built. Two compiled templates are equal when their sources are,
/// since the same source always parses to the same tree.
#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    source: String,
    nodes: Vec<Node>,
}

impl CompiledTemplate {
    /// Tokenize and parse `source`.
    pub fn compile(source: impl Into<String>) -> CompileResult<Self> {
        let source = source.into();
        let tokens = tokenize(&source)?;
        debug!("Tokenized template into {} tokens", tokens.len());
        let nodes = parse(tokens)?;
        Ok(Self { source, nodes })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Render against `context` with no partials available.
    pub fn render(&self, context: &Value) -> String {
        Renderer::new().render(self, context)
    }
}

impl PartialEq for CompiledTemplate {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for CompiledTemplate {}

/// Compile a template source.
pub fn compile(source: &str) -> CompileResult<CompiledTemplate> {
    CompiledTemplate::compile(source)
}
