//! Check command - Compile templates without rendering them.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use stache_core::CompiledTemplate;

#[derive(Args)]
pub struct CheckArgs {
    /// Template files to check
    #[arg(required = true)]
    templates: Vec<PathBuf>,
}

pub fn execute(args: CheckArgs) -> Result<()> {
    info!("Checking {} template(s)", args.templates.len());

    let mut first_error = None;

    for path in &args.templates {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Template not found: {:?}", path))?;

        match CompiledTemplate::compile(source) {
            Ok(_) => println!("✅ {}", path.display()),
            Err(e) => {
                println!("❌ {}: {}", path.display(), e);
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e).context("One or more templates failed to compile"),
        None => Ok(()),
    }
}
