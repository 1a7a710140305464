//! Render command - Render a template file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use stache_core::{CompiledTemplate, RenderOptions, Renderer, Value};
use stache_templates::{load_data, DirectoryPartials};

#[derive(Args)]
pub struct RenderArgs {
    /// Template file to render
    template: PathBuf,

    /// Data file (.json, .yaml or .yml)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Directory of *.mustache partials
    #[arg(short, long)]
    partials: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum partial nesting depth
    #[arg(long, default_value_t = stache_core::renderer::DEFAULT_MAX_PARTIAL_DEPTH)]
    max_partial_depth: usize,
}

pub fn execute(args: RenderArgs) -> Result<()> {
    info!("Rendering template {:?}", args.template);

    let source = fs::read_to_string(&args.template)
        .with_context(|| format!("Template not found: {:?}", args.template))?;
    let template = CompiledTemplate::compile(source)
        .with_context(|| format!("Failed to compile {:?}", args.template))?;

    let data = match &args.data {
        Some(path) => load_data(path).with_context(|| format!("Failed to load data {:?}", path))?,
        None => Value::mapping(),
    };

    let partials = match &args.partials {
        Some(dir) => DirectoryPartials::load(dir)
            .with_context(|| format!("Failed to load partials from {:?}", dir))?,
        None => DirectoryPartials::default(),
    };
    debug!("Loaded {} partial(s)", partials.len());

    let output = Renderer::new()
        .with_partials(&partials)
        .with_options(RenderOptions::new().max_partial_depth(args.max_partial_depth))
        .render(&template, &data);

    match &args.output {
        Some(path) => {
            fs::write(path, &output).with_context(|| format!("Failed to write {:?}", path))?;
            info!("Wrote {} bytes to {:?}", output.len(), path);
        }
        None => print!("{}", output),
    }

    Ok(())
}
