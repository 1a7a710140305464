//! Smoke-examples command - Render all example fixtures.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use stache_templates::{ExampleLoader, ExampleSuite};

#[derive(Args)]
pub struct SmokeExamplesArgs {
    /// Specific example to run (runs all if not specified)
    #[arg(short, long)]
    example: Option<String>,

    /// Examples directory
    #[arg(long, env = "STACHE_EXAMPLES_DIR")]
    examples_dir: Option<PathBuf>,
}

pub fn execute(args: SmokeExamplesArgs) -> Result<()> {
    info!("Running example smoke tests");

    let current_dir = std::env::current_dir()?;
    let examples_path = args
        .examples_dir
        .unwrap_or_else(|| current_dir.join("fixtures"));

    if !examples_path.exists() {
        anyhow::bail!("Examples directory not found: {:?}", examples_path);
    }

    let loader = ExampleLoader::new(&examples_path);
    let examples = match &args.example {
        Some(name) => vec![loader.load(name).context("Failed to load example")?],
        None => loader.load_all().context("Failed to load examples")?,
    };

    if examples.is_empty() {
        println!("⚠️  No examples found to run");
        return Ok(());
    }

    println!("🧪 Running {} example(s)...\n", examples.len());

    let report = ExampleSuite::new(examples).run();

    for outcome in &report.outcomes {
        if outcome.passed {
            println!("{}... ✅", outcome.name);
            continue;
        }
        println!("{}... ❌", outcome.name);
        match (&outcome.error, &outcome.actual) {
            (Some(error), _) => println!("   - {}", error),
            (None, Some(actual)) => {
                println!("   - expected: {:?}", outcome.expected);
                println!("   - actual:   {:?}", actual);
            }
            (None, None) => {}
        }
    }

    println!();
    println!(
        "Results: {} passed, {} failed",
        report.passed(),
        report.failed()
    );

    if !report.all_passed() {
        anyhow::bail!("{} example(s) failed", report.failed());
    }

    Ok(())
}
