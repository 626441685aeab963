//! Output formatting
//!
//! Human readable and JSON rendering of derived boards, plus the log level
//! selected by `--verbose`/`--quiet`.

use serde::Serialize;

use crate::core::board::{Board, DebugTool};

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";
}

/// Output preferences from global flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Suppress everything but errors
    pub quiet: bool,
    /// Emit JSON instead of text
    pub json: bool,
    /// Verbosity count
    pub verbose: u8,
}

impl OutputConfig {
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Default tracing directive for this configuration
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }

    /// Print a text line unless quiet
    pub fn line(&self, text: impl AsRef<str>) {
        if !self.quiet {
            println!("{}", text.as_ref());
        }
    }
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print an error and its causes on stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} Error: {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}

/// Render the debug tools of a derived board
pub fn format_debug_tools(board: &Board) -> String {
    let mut out = format!("Board: {}\n", board.id);
    if let Some(name) = &board.manifest.name {
        out.push_str(&format!("  Name: {name}\n"));
    }
    if let Some(soc) = &board.manifest.build.soc {
        out.push_str(&format!("  SoC: {soc}\n"));
    }
    out.push_str(&format!(
        "  Upload protocols: {}\n",
        board.manifest.upload.protocols.join(", ")
    ));

    out.push_str("\nDebug tools:\n");
    for (name, tool) in &board.manifest.debug.tools {
        out.push_str(&format!("  {name}{}\n", tool_flags(tool)));
        if let Some(server) = &tool.server {
            match &server.package {
                Some(package) => {
                    out.push_str(&format!("    Server: {package}/{}\n", server.executable));
                }
                None => out.push_str(&format!("    Server: {}\n", server.executable)),
            }
            if !server.arguments.is_empty() {
                out.push_str(&format!("    Arguments: {}\n", server.arguments.join(" ")));
            }
        }
        if let Some(hwids) = &tool.hwids {
            let ids: Vec<String> = hwids.iter().map(|[vid, pid]| format!("{vid}:{pid}")).collect();
            out.push_str(&format!("    Hardware ids: {}\n", ids.join(", ")));
        }
    }
    out
}

fn tool_flags(tool: &DebugTool) -> String {
    let mut flags = Vec::new();
    if tool.onboard == Some(true) {
        flags.push("onboard");
    }
    if tool.default == Some(true) {
        flags.push("default");
    }
    if tool.require_debug_port == Some(true) {
        flags.push("needs port");
    }

    if flags.is_empty() {
        String::new()
    } else {
        format!(" ({})", flags.join(", "))
    }
}
