//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::config::defaults::SDK_PACKAGE;
use crate::core::catalog::BoardCatalog;
use crate::core::global_config::GlobalConfig;
use crate::infra::dirs::NucleiDirs;
use crate::infra::host::CurrentHost;
use crate::infra::packages::InstalledPackages;
use commands::Commands;
use output::OutputConfig;

/// nuclei-boards - Debug tool derivation for Nuclei RISC-V boards
///
/// Attaches OpenOCD, J-Link and Nuclei debugger configuration to board
/// manifests based on their upload protocols.
#[derive(Parser, Debug)]
#[command(name = "nuclei-boards")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory containing <board>.json manifests
    #[arg(long, global = true, env = "NUCLEI_BOARDS_DIR")]
    pub boards_dir: Option<PathBuf>,

    /// Root directory of installed packages
    #[arg(long, global = true, env = "NUCLEI_BOARDS_PACKAGES_DIR")]
    pub packages_dir: Option<PathBuf>,

    /// Nuclei SDK directory (overrides package lookup)
    #[arg(long, global = true, env = "NUCLEI_SDK_DIR")]
    pub sdk_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Everything a command needs, resolved from flags, config file and defaults
#[derive(Debug)]
pub struct Context {
    /// Directory the board catalog is loaded from
    pub boards_dir: PathBuf,
    /// Package lookup used for the Nuclei SDK
    pub packages: InstalledPackages,
    /// Host the debug tools are derived for
    pub host: CurrentHost,
    /// Output preferences
    pub output: OutputConfig,
    /// Configured default for `derive --keep-going`
    pub keep_going: bool,
}

impl Context {
    /// Load the board catalog
    pub fn catalog(&self) -> Result<BoardCatalog> {
        BoardCatalog::from_dir(&self.boards_dir)
            .with_context(|| format!("Failed to load boards from {}", self.boards_dir.display()))
    }
}

impl Cli {
    /// Output preferences selected on the command line
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new(self.quiet, self.json, self.verbose)
    }

    /// Resolve the command context
    pub fn context(&self) -> Result<Context> {
        let dirs = NucleiDirs::new();
        let config = GlobalConfig::load(&dirs).context("Failed to load global configuration")?;

        let boards_dir = self.boards_dir.clone().unwrap_or_else(|| config.boards_dir());
        let packages_dir = self
            .packages_dir
            .clone()
            .unwrap_or_else(|| config.packages_dir(&dirs));

        let mut packages = InstalledPackages::new(packages_dir);
        if let Some(sdk_dir) = self.sdk_dir.clone().or_else(|| config.paths.sdk_dir.clone()) {
            packages = packages.with_override(SDK_PACKAGE, sdk_dir);
        }

        tracing::debug!(
            "Boards: {}, packages: {}",
            boards_dir.display(),
            packages.root().display()
        );

        Ok(Context {
            boards_dir,
            packages,
            host: CurrentHost,
            output: self.output_config(),
            keep_going: config.keep_going(),
        })
    }

    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let Some(cmd) = self.command.as_ref() else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            return Ok(());
        };

        let ctx = self.context()?;
        cmd.run(&ctx)
    }
}
