//! nuclei-boards - Debug tool derivation for Nuclei RISC-V boards
//!
//! Board manifests declare the upload protocols a board supports. This
//! crate turns them into complete debugger configuration: which GDB server
//! to launch (OpenOCD, J-Link, or the Nuclei debugger), with which
//! arguments, and which GDB commands to run after connecting.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Board manifests, catalog and debug tool derivation
//! - [`infra`] - Infrastructure layer (filesystem, packages, host OS)
//! - [`config`] - Constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
