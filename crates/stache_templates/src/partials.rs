//! Partials loaded from a directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use stache_core::{CompiledTemplate, PartialMap, PartialResolver};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{TemplateError, TemplateResult};

/// File extension of template and partial files.
pub const TEMPLATE_EXTENSION: &str = "mustache";

/// Partials read from `*.mustache` files in one directory, named by file stem.
///
/// Everything is read and compiled up front, so a broken partial is reported when
/// the directory is loaded rather than when it is first used.
#[derive(Debug, Clone, Default)]
pub struct DirectoryPartials {
    dir: PathBuf,
    partials: PartialMap,
}

impl DirectoryPartials {
    /// Load every partial in `dir`. A missing directory yields no partials.
    pub fn load(dir: impl Into<PathBuf>) -> TemplateResult<Self> {
        let dir = dir.into();
        let mut partials = PartialMap::new();

        if !dir.is_dir() {
            return Ok(Self { dir, partials });
        }

        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !is_template_file(path) {
                continue;
            }
            let Some(name) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
                continue;
            };

            let source = fs::read_to_string(path)?;
            let template = CompiledTemplate::compile(source).map_err(|source| {
                TemplateError::Partial {
                    name: name.clone(),
                    source,
                }
            })?;
            debug!("Loaded partial '{}' from {:?}", name, path);
            partials.insert(name, Arc::new(template));
        }

        Ok(Self { dir, partials })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn len(&self) -> usize {
        self.partials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partials.is_empty()
    }

    /// Names of the loaded partials, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.partials.names()
    }
}

impl PartialResolver for DirectoryPartials {
    fn resolve_partial(&self, name: &str) -> Option<Arc<CompiledTemplate>> {
        self.partials.resolve_partial(name)
    }
}

/// Check whether `path` is a template file.
pub(crate) fn is_template_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext == TEMPLATE_EXTENSION)
}
