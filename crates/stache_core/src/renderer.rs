//! Template rendering.
//!
//! Rendering walks a compiled node tree against a stack of context frames. It
//! cannot fail: missing names, odd value shapes and unknown partials all render as
//! empty output.

use tracing::{debug, warn};

use crate::context::ContextStack;
use crate::parser::Node;
use crate::partials::{NoPartials, PartialResolver};
use crate::template::CompiledTemplate;
use crate::value::Value;

/// Default limit on nested partial expansion.
pub const DEFAULT_MAX_PARTIAL_DEPTH: usize = 64;

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Partials nested deeper than this render empty.
    pub max_partial_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_partial_depth: DEFAULT_MAX_PARTIAL_DEPTH,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_partial_depth(mut self, depth: usize) -> Self {
        self.max_partial_depth = depth;
        self
    }
}

/// Renders compiled templates.
///
/// A renderer holds no per-render state, so one instance can serve any number of
/// calls, including concurrent ones when the resolver allows it.
pub struct Renderer<'p> {
    partials: &'p dyn PartialResolver,
    options: RenderOptions,
}

impl Default for Renderer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer<'static> {
    /// Create a renderer with no partials and default options.
    pub fn new() -> Self {
        Self {
            partials: &NoPartials,
            options: RenderOptions::default(),
        }
    }
}

impl<'p> Renderer<'p> {
    /// Use `partials` to resolve `{{> name}}` tags.
    pub fn with_partials<'q>(self, partials: &'q dyn PartialResolver) -> Renderer<'q> {
        Renderer {
            partials,
            options: self.options,
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render `template` with `context` as the outermost frame.
    pub fn render(&self, template: &CompiledTemplate, context: &Value) -> String {
        let mut out = String::with_capacity(template.source().len());
        let mut stack = ContextStack::new(context);
        self.render_nodes(template.nodes(), &mut stack, &mut out, 0);
        out
    }

    fn render_nodes<'a>(
        &self,
        nodes: &[Node],
        stack: &mut ContextStack<'a>,
        out: &mut String,
        depth: usize,
    ) {
        for node in nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Variable { name, escape } => {
                    if let Some(value) = stack.lookup(name) {
                        if *escape {
                            let mut raw = String::new();
                            value.write_output(&mut raw);
                            escape_html(&raw, out);
                        } else {
                            value.write_output(out);
                        }
                    }
                }
                Node::Section {
                    name,
                    inverted,
                    children,
                } => {
                    let value = stack.lookup(name).filter(|v| v.is_truthy());
                    match (value, *inverted) {
                        (None, true) => self.render_nodes(children, stack, out, depth),
                        (Some(value), false) => {
                            self.render_section(value, children, stack, out, depth)
                        }
                        _ => {}
                    }
                }
                Node::Partial(name) => {
                    if depth >= self.options.max_partial_depth {
                        warn!(
                            "Partial '{}' exceeds max depth {}, skipping",
                            name, self.options.max_partial_depth
                        );
                        continue;
                    }
                    match self.partials.resolve_partial(name) {
                        Some(partial) => {
                            self.render_nodes(partial.nodes(), stack, out, depth + 1)
                        }
                        None => debug!("Partial not found: {}", name),
                    }
                }
            }
        }
    }

    /// Render the children of a section whose value is truthy.
    fn render_section<'a>(
        &self,
        value: &'a Value,
        children: &[Node],
        stack: &mut ContextStack<'a>,
        out: &mut String,
        depth: usize,
    ) {
        match value {
            Value::Sequence(items) => {
                for item in items {
                    stack.push(item);
                    self.render_nodes(children, stack, out, depth);
                    stack.pop();
                }
            }
            Value::Mapping(_) => {
                stack.push(value);
                self.render_nodes(children, stack, out, depth);
                stack.pop();
            }
            _ => self.render_nodes(children, stack, out, depth),
        }
    }
}

/// Render `template` against `context` with no partials.
pub fn render(template: &CompiledTemplate, context: &Value) -> String {
    Renderer::new().render(template, context)
}

/// Append `raw` to `out`, replacing `&`, `<`, `>` and `"` with HTML entities.
pub fn escape_html(raw: &str, out: &mut String) {
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
