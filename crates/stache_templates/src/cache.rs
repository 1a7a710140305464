//! Compiled template cache.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use stache_core::{CompileResult, CompiledTemplate};
use tracing::debug;

/// Read-through cache of compiled templates keyed by source text.
///
/// Compilation happens outside the lock. When two threads race on the same
/// source, the first insert wins and the other result is dropped.
#[derive(Debug, Default)]
pub struct TemplateCache {
    templates: RwLock<HashMap<String, Arc<CompiledTemplate>>>,
}

impl TemplateCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the compiled form of `source`, compiling it on first use.
    ///
    /// Sources that fail to compile are not cached.
    pub fn get_or_compile(&self, source: &str) -> CompileResult<Arc<CompiledTemplate>> {
        if let Some(template) = self.templates.read().get(source) {
            return Ok(Arc::clone(template));
        }

        let compiled = Arc::new(CompiledTemplate::compile(source)?);
        debug!("Compiled template ({} bytes)", source.len());

        let mut templates = self.templates.write();
        let entry = templates
            .entry(source.to_string())
            .or_insert_with(|| compiled);
        Ok(Arc::clone(entry))
    }

    /// Check whether `source` has been compiled already.
    pub fn contains(&self, source: &str) -> bool {
        self.templates.read().contains_key(source)
    }

    pub fn len(&self) -> usize {
        self.templates.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.read().is_empty()
    }

    /// Drop every cached template.
    pub fn clear(&self) {
        self.templates.write().clear();
    }
}
