//! # stache_core
//!
//! Compiler and renderer for logic-less templates.
//!
//! A template is text with `{{…}}` tags:
//!
//! - `{{name}}` inserts an HTML-escaped value, `{{{name}}}` and `{{&name}}` insert it raw
//! - `{{#name}}…{{/name}}` repeats or shows a block depending on the value
//! - `{{^name}}…{{/name}}` shows a block only when the value is falsy or missing
//! - `{{> name}}` includes a partial, `{{! text}}` is a comment
//!
//! Compiling reports structural problems (unterminated tags, unbalanced sections).
//! Rendering never fails.
//!
//! ## Example
//!
//! ```rust
//! use stache_core::{compile, render, Value};
//!
//! let template = compile("{{#people}}{{name}} {{/people}}").unwrap();
//! let data = Value::mapping().with(
//!     "people",
//!     vec![Value::mapping().with("name", "Karl"), Value::mapping().with("name", "Groucho")],
//! );
//!
//! assert_eq!(render(&template, &data), "Karl Groucho ");
//! ```

pub mod context;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod partials;
pub mod renderer;
pub mod template;
pub mod value;

pub use context::ContextStack;
pub use error::{CompileError, CompileResult, LexError, ParseError, ParseErrorKind};
pub use lexer::{tokenize, TagKind, Token};
pub use parser::{parse, Node};
pub use partials::{NoPartials, PartialMap, PartialResolver};
pub use renderer::{escape_html, render, RenderOptions, Renderer};
pub use template::{compile, CompiledTemplate};
pub use value::Value;
