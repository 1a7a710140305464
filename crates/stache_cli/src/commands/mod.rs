//! CLI command definitions.

use clap::{Parser, Subcommand};

pub mod check;
pub mod render;
pub mod smoke_examples;

/// stache - logic-less template renderer
#[derive(Parser)]
#[command(name = "stache")]
#[command(version, about = "stache - logic-less template renderer")]
#[command(long_about = r#"
stache compiles and renders logic-less templates with {{tags}}.

COMMANDS:
  render          → Render a template file with JSON or YAML data
  check           → Compile templates and report structural errors
  smoke-examples  → Render every example fixture and compare with its output

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Example failures
  4 - Template error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template
    Render(render::RenderArgs),

    /// Check that templates compile
    Check(check::CheckArgs),

    /// Run all example fixtures
    #[command(name = "smoke-examples")]
    SmokeExamples(smoke_examples::SmokeExamplesArgs),
}
