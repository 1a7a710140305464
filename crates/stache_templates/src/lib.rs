//! # stache_templates
//!
//! Template objects and example fixtures for stache.
//!
//! This crate sits on top of `stache_core` and handles the parts that deal with
//! callers and the filesystem:
//!
//! - [`Mustache`], a template string plus default data with per-call overrides
//! - [`TemplateCache`], compiled templates shared by source text
//! - [`DirectoryPartials`], partials read from a directory of `*.mustache` files
//! - [`ExampleLoader`] and [`ExampleSuite`], template/data/output fixtures on disk
//!
//! ## Example
//!
//! ```rust
//! use stache_core::Value;
//! use stache_templates::Mustache;
//!
//! let m = Mustache::new()
//!     .with_template("{{first_name}} {{last_name}}")
//!     .with_data(Value::mapping().with("first_name", "Karl").with("last_name", "Marx"));
//!
//! assert_eq!(m.to_string(), "Karl Marx");
//! ```

pub mod cache;
pub mod error;
pub mod loader;
pub mod mustache;
pub mod partials;
pub mod suite;

pub use cache::TemplateCache;
pub use error::{TemplateError, TemplateResult};
pub use loader::{load_data, Example, ExampleLoader, PARTIALS_DIR};
pub use mustache::{Mustache, RENDER_FALLBACK};
pub use partials::{DirectoryPartials, TEMPLATE_EXTENSION};
pub use suite::{ExampleOutcome, ExampleSuite, SuiteReport};
