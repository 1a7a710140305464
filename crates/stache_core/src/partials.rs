//! Partial resolution.
//!
//! The core never reads files or the network. Whoever embeds the renderer decides
//! where partials come from by implementing [`PartialResolver`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::CompileResult;
use crate::template::CompiledTemplate;

/// Looks up named sub-templates for `{{> name}}` tags.
///
/// Resolvers are not required to detect cycles; the renderer bounds partial depth.
#[cfg_attr(test, mockall::automock)]
pub trait PartialResolver {
    /// Return the compiled partial called `name`, if there is one.
    fn resolve_partial(&self, name: &str) -> Option<Arc<CompiledTemplate>>;
}

/// A resolver with no partials. Every partial tag renders empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPartials;

impl PartialResolver for NoPartials {
    fn resolve_partial(&self, _name: &str) -> Option<Arc<CompiledTemplate>> {
        None
    }
}

impl<F> PartialResolver for F
where
    F: Fn(&str) -> Option<Arc<CompiledTemplate>>,
{
    fn resolve_partial(&self, name: &str) -> Option<Arc<CompiledTemplate>> {
        self(name)
    }
}

/// In-memory partials keyed by name.
#[derive(Debug, Clone, Default)]
pub struct PartialMap {
    partials: HashMap<String, Arc<CompiledTemplate>>,
}

impl PartialMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an already compiled partial.
    pub fn insert(&mut self, name: impl Into<String>, template: Arc<CompiledTemplate>) {
        self.partials.insert(name.into(), template);
    }

    /// Compile `source` and register it under `name`.
    pub fn insert_source(&mut self, name: impl Into<String>, source: &str) -> CompileResult<()> {
        let template = CompiledTemplate::compile(source)?;
        self.insert(name, Arc::new(template));
        Ok(())
    }

    pub fn with_source(mut self, name: impl Into<String>, source: &str) -> CompileResult<Self> {
        self.insert_source(name, source)?;
        Ok(self)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.partials.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.partials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partials.is_empty()
    }

    /// Names of all registered partials, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.partials.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl PartialResolver for PartialMap {
    fn resolve_partial(&self, name: &str) -> Option<Arc<CompiledTemplate>> {
        self.partials.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_map() {
        let partials = PartialMap::new()
            .with_source("header", "<h1>{{title}}</h1>")
            .unwrap()
            .with_source("footer", "bye")
            .unwrap();

        assert_eq!(partials.len(), 2);
        assert_eq!(partials.names(), vec!["footer", "header"]);
        assert!(partials.resolve_partial("header").is_some());
        assert!(partials.resolve_partial("missing").is_none());
    }

    #[test]
    fn test_partial_map_rejects_bad_source() {
        let mut partials = PartialMap::new();
        assert!(partials.insert_source("bad", "{{#open}}").is_err());
        assert!(!partials.contains("bad"));
    }

    #[test]
    fn test_closure_resolver() {
        let shared = Arc::new(CompiledTemplate::compile("shared").unwrap());
        let resolver = move |name: &str| (name == "shared").then(|| shared.clone());

        assert!(resolver.resolve_partial("shared").is_some());
        assert!(resolver.resolve_partial("other").is_none());
        assert!(NoPartials.resolve_partial("shared").is_none());
    }
}
