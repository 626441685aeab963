//! Derive command
//!
//! Implements `nuclei-boards derive`: completes the debug configuration of
//! one or all boards and writes the resulting manifests.

use anyhow::{bail, Result};
use serde_json::{json, Map, Value};
use std::path::PathBuf;

use crate::cli::output::{print_json, status};
use crate::cli::Context;
use crate::core::board::Board;
use crate::core::debug::DebugConfigDeriver;
use crate::infra::filesystem;

/// Derive options from CLI
#[derive(Debug, Clone, Default)]
pub struct DeriveOptions {
    /// Only this board
    pub board: Option<String>,
    /// Output directory (stdout when absent)
    pub output: Option<PathBuf>,
    /// Continue past failing boards
    pub keep_going: bool,
}

/// Execute the derive command
pub fn execute(ctx: &Context, options: &DeriveOptions) -> Result<()> {
    let catalog = ctx.catalog()?;
    let deriver = DebugConfigDeriver::new(&ctx.packages, &ctx.host);

    let mut derived: Vec<Board> = Vec::new();
    let mut failed: Vec<Value> = Vec::new();

    for (id, result) in catalog.get_boards(&deriver, options.board.as_deref())? {
        match result {
            Ok(board) => derived.push(board),
            Err(e) if options.keep_going => {
                eprintln!("{} {id}: {e}", status::WARNING);
                failed.push(json!({"board": id, "error": e.to_string()}));
            }
            Err(e) => return Err(e.into()),
        }
    }

    match &options.output {
        Some(dir) => {
            filesystem::create_dir_all(dir)?;
            for board in &derived {
                let path = dir.join(format!("{}.json", board.id));
                filesystem::write_file(&path, &board.manifest.to_json()?)?;
                tracing::info!("Wrote {}", path.display());
            }
            if ctx.output.json {
                let ids: Vec<&str> = derived.iter().map(|b| b.id.as_str()).collect();
                print_json(&json!({
                    "output": dir,
                    "derived": ids,
                    "failed": &failed,
                }))?;
            } else {
                ctx.output.line(format!(
                    "{} Derived {} board(s) into {}",
                    status::SUCCESS,
                    derived.len(),
                    dir.display()
                ));
            }
        }
        None => {
            let mut all = Map::new();
            for board in derived {
                all.insert(board.id, serde_json::to_value(board.manifest)?);
            }
            print_json(&Value::Object(all))?;
        }
    }

    if !failed.is_empty() {
        bail!("{} board(s) failed debug tool derivation", failed.len());
    }
    Ok(())
}
