//! Template objects with a default template and data context.

use std::fmt;
use std::sync::Arc;

use stache_core::{NoPartials, PartialResolver, RenderOptions, Renderer, Value};
use tracing::error;

use crate::cache::TemplateCache;
use crate::error::TemplateResult;

/// Output used when stringifying a template fails.
pub const RENDER_FALLBACK: &str = "";

/// A template string plus default data, rendered on demand.
///
/// Both the template and the data can be overridden per call. Compiled trees are
/// shared through a [`TemplateCache`], so repeated renders of the same source only
/// parse it once.
#[derive(Clone)]
pub struct Mustache {
    template: Option<String>,
    data: Value,
    partials: Arc<dyn PartialResolver + Send + Sync>,
    options: RenderOptions,
    cache: Arc<TemplateCache>,
}

impl Default for Mustache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Mustache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mustache")
            .field("template", &self.template)
            .field("data", &self.data)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Mustache {
    /// Create a template object with no template and empty data.
    pub fn new() -> Self {
        Self {
            template: None,
            data: Value::mapping(),
            partials: Arc::new(NoPartials),
            options: RenderOptions::default(),
            cache: Arc::new(TemplateCache::new()),
        }
    }

    /// Set the default template.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Set the default data context.
    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = data.into();
        self
    }

    /// Set the partial resolver used by every render.
    pub fn with_partials(mut self, partials: Arc<dyn PartialResolver + Send + Sync>) -> Self {
        self.partials = partials;
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Share a compiled template cache with other template objects.
    pub fn with_cache(mut self, cache: Arc<TemplateCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn cache(&self) -> &Arc<TemplateCache> {
        &self.cache
    }

    /// Render a template.
    ///
    /// `template` and `data` override the defaults when given. With no template at
    /// all the output is empty.
    pub fn render(&self, template: Option<&str>, data: Option<&Value>) -> TemplateResult<String> {
        let Some(source) = template.or(self.template.as_deref()) else {
            return Ok(String::new());
        };
        let data = data.unwrap_or(&self.data);

        let compiled = self.cache.get_or_compile(source)?;
        let renderer = Renderer::new()
            .with_partials(self.partials.as_ref())
            .with_options(self.options);
        Ok(renderer.render(&compiled, data))
    }
}

/// Renders the default template with the default data.
///
/// Never fails: a template that does not compile is logged and replaced by
/// [`RENDER_FALLBACK`].
impl fmt::Display for Mustache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render(None, None) {
            Ok(output) => f.write_str(&output),
            Err(e) => {
                error!("Failed to render template: {}", e);
                f.write_str(RENDER_FALLBACK)
            }
        }
    }
}
