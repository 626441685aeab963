//! Board show command
//!
//! Implements `nuclei-boards show <board>`.

use anyhow::{Context as _, Result};

use crate::cli::output::{format_debug_tools, print_json};
use crate::cli::Context;
use crate::core::debug::DebugConfigDeriver;

/// Execute the show command
///
/// Derives the debug tools for a single board and prints them.
pub fn execute(ctx: &Context, board_id: &str) -> Result<()> {
    let catalog = ctx.catalog()?;
    let board = catalog.board(board_id)?.clone();

    let deriver = DebugConfigDeriver::new(&ctx.packages, &ctx.host);
    let board = deriver
        .derive(board)
        .with_context(|| format!("Failed to derive debug tools for '{board_id}'"))?;

    if ctx.output.json {
        return print_json(&board.manifest);
    }

    ctx.output.line(format_debug_tools(&board));
    Ok(())
}
