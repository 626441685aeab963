//! Debug tool derivation
//!
//! Attaches debugger configuration to board manifests. Each upload protocol a
//! board declares (plus the debuggers every Nuclei board is offered) becomes
//! an entry in `debug.tools` describing the GDB server to launch and the GDB
//! commands to run after connecting.
//!
//! Host state is injected: package directories come from a
//! [`PackageResolver`] and the operating system from a [`HostSystem`].
//! The only side effect is an existence check on the board-specific OpenOCD
//! script inside the Nuclei SDK.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::board::{Board, DebugConfig, DebugServer, DebugTool, UploadConfig};
use crate::config::defaults::{
    DEFAULT_ADAPTER_KHZ, FAST_ADAPTER_KHZ, JLINK, JLINK_EXECUTABLE, JLINK_EXECUTABLE_WINDOWS,
    JLINK_GDB_PORT, JLINK_PACKAGE, NON_DEBUG_PROTOCOLS, NON_FTDI_TOOLS, NUCLEI_RV_DEBUGGER,
    OPENOCD_EXECUTABLE, OPENOCD_PACKAGE, OPENOCD_SCRIPTS_DIR, RV_LINK, RV_LINK_HWID, SDK_PACKAGE,
    SUPPORTED_DEBUG_TOOLS, UM232H,
};
use crate::error::DebugError;

/// GDB commands for J-Link, placeholders are substituted at launch time
const JLINK_INIT_CMDS: &[&str] = &[
    "define pio_reset_halt_target",
    "    monitor halt",
    "end",
    "",
    "define pio_reset_run_target",
    "    monitor clrbp",
    "    monitor reset",
    "    monitor go",
    "end",
    "",
    "target extended-remote $DEBUG_PORT",
    "monitor clrbp",
    "monitor speed auto",
    "pio_reset_halt_target",
    "$LOAD_CMDS",
    "$INIT_BREAK",
];

/// GDB commands for OpenOCD based tools
const OPENOCD_INIT_CMDS: &[&str] = &[
    "define pio_reset_halt_target",
    "   monitor halt",
    "end",
    "define pio_reset_run_target",
    "   monitor reset",
    "end",
    "target extended-remote $DEBUG_PORT",
    "$LOAD_CMDS",
    "pio_reset_halt_target",
    "$INIT_BREAK",
];

/// Resolves installed package directories
pub trait PackageResolver {
    /// Installation directory of `name`, if installed
    fn package_dir(&self, name: &str) -> Option<PathBuf>;
}

/// Describes the machine the debugger will run on
pub trait HostSystem {
    /// Operating system name (`Windows`, `Linux`, `Darwin`, ...)
    fn os_name(&self) -> &str;

    /// Whether executables need Windows names
    fn is_windows(&self) -> bool {
        self.os_name() == "Windows"
    }
}

/// Derives `debug.tools` for board manifests
pub struct DebugConfigDeriver<'a> {
    packages: &'a dyn PackageResolver,
    host: &'a dyn HostSystem,
}

impl<'a> DebugConfigDeriver<'a> {
    /// Create a deriver backed by the given host capabilities
    pub fn new(packages: &'a dyn PackageResolver, host: &'a dyn HostSystem) -> Self {
        Self { packages, host }
    }

    /// Populate `debug.tools` and extend `upload.protocols` for one board
    ///
    /// Tools already present in the manifest are never replaced, so running
    /// this twice leaves the first result untouched.
    pub fn derive(&self, mut board: Board) -> Result<Board, DebugError> {
        let protocols = working_protocols(&board.manifest.upload);
        board.manifest.upload.protocols.clone_from(&protocols);

        let soc = board.soc();
        let debug = &mut board.manifest.debug;

        for link in &protocols {
            if NON_DEBUG_PROTOCOLS.contains(&link.as_str()) || debug.tools.contains_key(link) {
                continue;
            }

            let tool = match link.as_str() {
                // The vendor debugger only differs from a generic OpenOCD
                // probe in its arguments: it runs the SDK's board script.
                NUCLEI_RV_DEBUGGER => {
                    let sdk_dir = self.packages.package_dir(SDK_PACKAGE).ok_or_else(|| {
                        DebugError::PackageNotInstalled {
                            board: board.id.clone(),
                            package: SDK_PACKAGE.to_string(),
                        }
                    })?;
                    let board_cfg = board_openocd_config(&sdk_dir, &soc, &board.id);
                    let server_args =
                        vec!["-f".to_string(), board_cfg.to_string_lossy().into_owned()];
                    openocd_tool(link, server_args, debug)
                }
                JLINK => self.jlink_tool(&board.id, debug)?,
                RV_LINK => rv_link_tool(),
                _ => openocd_tool(link, generic_openocd_args(link, &soc), debug),
            };

            tracing::debug!("Board '{}': added debug tool '{}'", board.id, link);
            debug.tools.insert(link.clone(), tool);
        }

        Ok(board)
    }

    /// Derive every board, stopping at the first failure
    pub fn derive_all(
        &self,
        boards: BTreeMap<String, Board>,
    ) -> Result<BTreeMap<String, Board>, DebugError> {
        boards
            .into_iter()
            .map(|(id, board)| Ok((id, self.derive(board)?)))
            .collect()
    }

    /// Derive every board, keeping each board's outcome separate
    pub fn derive_each(
        &self,
        boards: BTreeMap<String, Board>,
    ) -> Vec<(String, Result<Board, DebugError>)> {
        boards
            .into_iter()
            .map(|(id, board)| {
                let result = self.derive(board);
                if let Err(e) = &result {
                    tracing::debug!("Board '{}' failed derivation: {}", id, e);
                }
                (id, result)
            })
            .collect()
    }

    fn jlink_tool(&self, board_id: &str, debug: &DebugConfig) -> Result<DebugTool, DebugError> {
        let device = debug
            .jlink_device
            .as_deref()
            .filter(|d| !d.is_empty())
            .ok_or_else(|| DebugError::MissingBoardAttribute {
                board: board_id.to_string(),
                field: "debug.jlink_device".to_string(),
            })?;

        let executable = if self.host.is_windows() {
            JLINK_EXECUTABLE_WINDOWS
        } else {
            JLINK_EXECUTABLE
        };

        Ok(DebugTool {
            server: Some(DebugServer {
                package: Some(JLINK_PACKAGE.to_string()),
                executable: executable.to_string(),
                arguments: to_strings(&[
                    "-singlerun",
                    "-if",
                    "JTAG",
                    "-select",
                    "USB",
                    "-jtagconf",
                    "-1,-1",
                    "-device",
                    device,
                    "-port",
                    JLINK_GDB_PORT,
                ]),
                ..DebugServer::default()
            }),
            init_cmds: Some(to_strings(JLINK_INIT_CMDS)),
            onboard: Some(debug.onboard_tools.iter().any(|t| t == JLINK)),
            ..DebugTool::default()
        })
    }
}

/// Upload protocols extended with the supported debug tools
///
/// Duplicates are kept; the board's own `protocol` is appended only when
/// missing.
pub fn working_protocols(upload: &UploadConfig) -> Vec<String> {
    let mut protocols = upload.protocols.clone();
    protocols.extend(SUPPORTED_DEBUG_TOOLS.iter().map(ToString::to_string));

    if let Some(protocol) = &upload.protocol {
        if !protocols.contains(protocol) {
            protocols.push(protocol.clone());
        }
    }

    protocols
}

/// Board-specific OpenOCD script shipped with the Nuclei SDK
///
/// Prefers `openocd_<soc>.cfg` and falls back to `openocd.cfg`, which is
/// returned even when it does not exist either.
pub fn board_openocd_config(sdk_dir: &Path, soc: &str, board_id: &str) -> PathBuf {
    let board_dir = sdk_dir.join("SoC").join(soc).join("Board").join(board_id);

    let soc_cfg = board_dir.join(format!("openocd_{soc}.cfg"));
    if soc_cfg.is_file() {
        return soc_cfg;
    }

    let fallback = board_dir.join("openocd.cfg");
    if !fallback.is_file() {
        tracing::debug!(
            "No OpenOCD script for board '{}' in {}",
            board_id,
            board_dir.display()
        );
    }
    fallback
}

/// OpenOCD interface script name for a probe
pub fn openocd_interface(link: &str) -> String {
    if NON_FTDI_TOOLS.contains(&link) {
        link.to_string()
    } else {
        format!("ftdi/{link}")
    }
}

/// Adapter clock for a probe in kHz
pub fn adapter_khz(link: &str) -> u32 {
    if link == UM232H {
        FAST_ADAPTER_KHZ
    } else {
        DEFAULT_ADAPTER_KHZ
    }
}

/// OpenOCD arguments for a probe driven through a generic interface script
pub fn generic_openocd_args(link: &str, soc: &str) -> Vec<String> {
    vec![
        "-s".to_string(),
        OPENOCD_SCRIPTS_DIR.to_string(),
        "-f".to_string(),
        format!("interface/{}.cfg", openocd_interface(link)),
        "-c".to_string(),
        "transport select jtag".to_string(),
        "-f".to_string(),
        format!("target/{soc}.cfg"),
        "-c".to_string(),
        format!("adapter_khz {}", adapter_khz(link)),
    ]
}

fn openocd_tool(link: &str, server_args: Vec<String>, debug: &DebugConfig) -> DebugTool {
    DebugTool {
        server: Some(DebugServer {
            package: Some(OPENOCD_PACKAGE.to_string()),
            executable: OPENOCD_EXECUTABLE.to_string(),
            arguments: server_args,
            ..DebugServer::default()
        }),
        init_cmds: Some(to_strings(OPENOCD_INIT_CMDS)),
        onboard: Some(debug.onboard_tools.iter().any(|t| t == link)),
        default: Some(debug.default_tools.iter().any(|t| t == link)),
        ..DebugTool::default()
    }
}

fn rv_link_tool() -> DebugTool {
    DebugTool {
        hwids: Some(vec![RV_LINK_HWID.map(String::from)]),
        require_debug_port: Some(true),
        ..DebugTool::default()
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}
