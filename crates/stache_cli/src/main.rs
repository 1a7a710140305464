//! stache CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Example failures
//! - 4: Template error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const EXAMPLE_FAILURE: u8 = 3;
    pub const TEMPLATE_ERROR: u8 = 4;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "stache=debug"
    } else if cli.quiet {
        "stache=warn"
    } else {
        "stache=info"
    };

    // Logging goes to stderr so rendered output on stdout stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,{}", default_level)));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let result = match cli.command {
        Commands::Render(args) => commands::render::execute(args),
        Commands::Check(args) => commands::check::execute(args),
        Commands::SmokeExamples(args) => commands::smoke_examples::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    use stache_templates::TemplateError;

    for cause in e.chain() {
        if cause.is::<stache_core::CompileError>() {
            return ExitCodes::TEMPLATE_ERROR;
        }
        match cause.downcast_ref::<TemplateError>() {
            Some(TemplateError::Compile(_)) | Some(TemplateError::Partial { .. }) => {
                return ExitCodes::TEMPLATE_ERROR;
            }
            Some(TemplateError::NotFound(_)) => return ExitCodes::INVALID_ARGS,
            _ => {}
        }
    }

    let msg = e.to_string().to_lowercase();
    if msg.contains("argument") || msg.contains("not found") {
        ExitCodes::INVALID_ARGS
    } else if msg.contains("example") {
        ExitCodes::EXAMPLE_FAILURE
    } else {
        ExitCodes::GENERAL_ERROR
    }
}
