//! Render command implementation.
//!
//! The render command:
//! 1. Reads the collapsed stack input file
//! 2. Builds the weighted call tree
//! 3. Renders the text flame graph
//! 4. Prints the diagram to stdout
//!
//! Diagnostics go to stderr through the logger, so they never mix with
//! the diagram.

use crate::flamegraph::{render_flamegraph, RenderConfig};
use crate::tree::StackTree;
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the render command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct RenderArgs {
    /// Path to the collapsed stack input file
    pub input: PathBuf,

    /// Renderer configuration (None = default 200-column canvas)
    pub render_config: Option<RenderConfig>,
}

/// Execute the render command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Render command arguments
///
/// # Returns
/// Ok if the diagram was rendered and printed, Err with context if any
/// step fails
///
/// # Errors
/// * Input file read errors
/// * Rendering invariant violations (corrupt layout state)
pub fn execute_render(args: RenderArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Rendering flame graph for: {}", args.input.display());

    // Step 1/3: Read input
    info!("Step 1/3: Reading stack samples...");
    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input file {}", args.input.display()))?;

    // Step 2/3: Build the call tree
    info!("Step 2/3: Building call tree...");
    let tree = StackTree::build(content.lines());

    debug!("Call tree:\n{}", tree);

    // Step 3/3: Render
    info!("Step 3/3: Rendering text canvas...");
    let flame = render_flamegraph(&tree, args.render_config.as_ref())
        .context("Failed to render flame graph")?;

    print!("{}", flame);

    let elapsed = start_time.elapsed();
    info!("Render completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate render arguments
///
/// **Public** - can be called before execute_render for early validation
///
/// # Arguments
/// * `args` - Arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &RenderArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.input.is_dir() {
        anyhow::bail!("Input path is a directory: {}", args.input.display());
    }

    Ok(())
}
