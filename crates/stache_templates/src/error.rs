//! Error types for templates.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur during template operations.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Invalid example in {path}: {message}")]
    InvalidExample { path: PathBuf, message: String },

    #[error("Template compilation failed: {0}")]
    Compile(#[from] stache_core::CompileError),

    #[error("Partial '{name}' failed to compile: {source}")]
    Partial {
        name: String,
        #[source]
        source: stache_core::CompileError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
