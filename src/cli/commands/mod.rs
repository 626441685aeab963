//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod derive;
pub mod list;
pub mod show;

use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

use super::Context;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List boards in the catalog
    List,

    /// Show the debug tools derived for a board
    Show {
        /// Board id
        board: String,
    },

    /// Derive debug tools and emit the completed manifests
    Derive {
        /// Derive only this board
        #[arg(short, long)]
        board: Option<String>,

        /// Write <board>.json files into this directory instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Continue with the remaining boards when one fails
        #[arg(short, long)]
        keep_going: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn run(&self, ctx: &Context) -> Result<()> {
        match self {
            Self::List => list::execute(ctx),
            Self::Show { board } => show::execute(ctx, board),
            Self::Derive {
                board,
                output,
                keep_going,
            } => {
                let options = derive::DeriveOptions {
                    board: board.clone(),
                    output: output.clone(),
                    keep_going: *keep_going || ctx.keep_going,
                };
                derive::execute(ctx, &options)
            }
        }
    }
}
