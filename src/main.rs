//! flametext CLI
//!
//! Renders collapsed stack samples ("a;b;c 100", one per line) as a
//! text-mode flame graph on stdout.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use flametext::commands::{execute_render, validate_args, RenderArgs};
use flametext::utils::config::DEFAULT_LOG_FILTER;

/// flametext - text flame graphs from collapsed stacks
#[derive(Parser, Debug)]
#[command(name = "flametext")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input file with one `<stack> <value>` sample per line
    input: PathBuf,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging (diagnostics go to stderr, the diagram to stdout)
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();

    let args = RenderArgs {
        input: cli.input,
        render_config: None,
    };

    // Validate args first
    validate_args(&args)?;

    // Execute render
    execute_render(args)?;

    Ok(())
}
