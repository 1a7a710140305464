//! Example fixture loading.
//!
//! An example is a directory holding one template, the output it should render
//! to, and optionally some data and partials:
//!
//! ```text
//! examples/
//!     simple/
//!         simple.mustache     template
//!         simple.yaml         data (.json, .yaml or .yml; optional)
//!         simple.txt          expected output
//!         partials/           optional, one partial per *.mustache file
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use stache_core::Value;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{TemplateError, TemplateResult};
use crate::partials::{is_template_file, DirectoryPartials};

/// Name of the per-example partials directory.
pub const PARTIALS_DIR: &str = "partials";

/// A template fixture paired with its expected output.
#[derive(Debug, Clone)]
pub struct Example {
    /// Directory name of the example.
    pub name: String,
    /// Example directory.
    pub path: PathBuf,
    /// Template source.
    pub template: String,
    /// Data context; an empty mapping when the example has no data file.
    pub data: Value,
    /// Expected output.
    pub expected: String,
    /// Partials available to the template.
    pub partials: DirectoryPartials,
}

/// Example loader.
pub struct ExampleLoader {
    examples_path: PathBuf,
}

impl ExampleLoader {
    /// Create a new example loader.
    pub fn new(examples_path: impl Into<PathBuf>) -> Self {
        Self {
            examples_path: examples_path.into(),
        }
    }

    pub fn examples_path(&self) -> &Path {
        &self.examples_path
    }

    /// Load all examples, sorted by name.
    ///
    /// Directories without a template, or that fail to load, are skipped with a
    /// warning.
    pub fn load_all(&self) -> TemplateResult<Vec<Example>> {
        let mut examples = Vec::new();

        if !self.examples_path.exists() {
            warn!("Examples directory does not exist: {:?}", self.examples_path);
            return Ok(examples);
        }

        for entry in WalkDir::new(&self.examples_path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            match self.load_example(path) {
                Ok(example) => {
                    info!("Loaded example: {}", example.name);
                    examples.push(example);
                }
                Err(e) => {
                    warn!("Failed to load example from {:?}: {}", path, e);
                }
            }
        }

        Ok(examples)
    }

    /// Load the example called `name`.
    pub fn load(&self, name: &str) -> TemplateResult<Example> {
        let path = self.examples_path.join(name);
        if !path.is_dir() {
            return Err(TemplateError::NotFound(format!(
                "No example '{}' in {:?}",
                name, self.examples_path
            )));
        }
        self.load_example(&path)
    }

    /// Load a single example from a directory.
    pub fn load_example(&self, path: &Path) -> TemplateResult<Example> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut templates = Vec::new();
        let mut outputs = Vec::new();
        let mut data_files = Vec::new();

        for entry in WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let file = entry.path();
            if is_template_file(file) {
                templates.push(file.to_path_buf());
                continue;
            }
            if !file.is_file() {
                continue;
            }
            match file.extension().and_then(|e| e.to_str()) {
                Some("txt") => outputs.push(file.to_path_buf()),
                Some("json" | "yaml" | "yml") => data_files.push(file.to_path_buf()),
                _ => {}
            }
        }

        let template_path = single(path, templates, "template (.mustache)")?;
        let output_path = single(path, outputs, "expected output (.txt)")?;
        if data_files.len() > 1 {
            return Err(invalid(path, "more than one data file"));
        }

        let data = match data_files.first() {
            Some(data_path) => load_data(data_path)?,
            None => Value::mapping(),
        };

        debug!("Loading example template from {:?}", template_path);
        Ok(Example {
            name,
            path: path.to_path_buf(),
            template: fs::read_to_string(&template_path)?,
            data,
            expected: fs::read_to_string(&output_path)?,
            partials: DirectoryPartials::load(path.join(PARTIALS_DIR))?,
        })
    }
}

/// Read a data file as JSON or YAML depending on its extension.
pub fn load_data(path: &Path) -> TemplateResult<Value> {
    let content = fs::read_to_string(path)?;
    let value: Value = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str::<serde_json::Value>(&content)?.into(),
        _ => serde_yaml::from_str::<serde_yaml::Value>(&content)?.into(),
    };
    Ok(value)
}

fn single(dir: &Path, mut files: Vec<PathBuf>, what: &str) -> TemplateResult<PathBuf> {
    match files.len() {
        1 => Ok(files.remove(0)),
        0 => Err(invalid(dir, format!("missing {}", what))),
        n => Err(invalid(dir, format!("found {} files for {}", n, what))),
    }
}

fn invalid(dir: &Path, message: impl Into<String>) -> TemplateError {
    TemplateError::InvalidExample {
        path: dir.to_path_buf(),
        message: message.into(),
    }
}
