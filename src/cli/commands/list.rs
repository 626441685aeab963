//! Board list command
//!
//! Implements `nuclei-boards list`.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::print_json;
use crate::cli::Context;

#[derive(Serialize)]
struct BoardSummary<'a> {
    id: &'a str,
    name: Option<&'a str>,
    soc: Option<&'a str>,
    protocols: &'a [String],
}

/// Execute the list command
///
/// Lists boards as declared on disk, before any derivation.
pub fn execute(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    if ctx.output.json {
        let summaries: Vec<BoardSummary<'_>> = catalog
            .boards()
            .map(|board| BoardSummary {
                id: &board.id,
                name: board.manifest.name.as_deref(),
                soc: board.manifest.build.soc.as_deref(),
                protocols: &board.manifest.upload.protocols,
            })
            .collect();
        return print_json(&summaries);
    }

    if catalog.is_empty() {
        ctx.output
            .line(format!("No boards found in {}.", catalog.dir().display()));
        return Ok(());
    }

    ctx.output.line("Available boards:");
    ctx.output.line("");
    for board in catalog.boards() {
        let name = board.manifest.name.as_deref().unwrap_or("-");
        let soc = board.manifest.build.soc.as_deref().unwrap_or("-");
        ctx.output.line(format!("  {} - {name} [{soc}]", board.id));
        if !board.manifest.upload.protocols.is_empty() {
            ctx.output.line(format!(
                "    Protocols: {}",
                board.manifest.upload.protocols.join(", ")
            ));
        }
    }
    ctx.output.line("");
    ctx.output.line(format!("{} board(s) available.", catalog.len()));

    Ok(())
}
