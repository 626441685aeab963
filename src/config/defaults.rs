//! Default configuration values

/// Package holding the Nuclei SDK (board-specific OpenOCD scripts live here)
pub const SDK_PACKAGE: &str = "framework-nuclei-sdk";

/// Package providing the Nuclei OpenOCD build
pub const OPENOCD_PACKAGE: &str = "tool-openocd-nuclei";

/// OpenOCD executable, relative to its package directory
pub const OPENOCD_EXECUTABLE: &str = "bin/openocd";

/// Package providing the SEGGER J-Link GDB server
pub const JLINK_PACKAGE: &str = "tool-jlink";

/// J-Link GDB server executable on Windows hosts
pub const JLINK_EXECUTABLE_WINDOWS: &str = "JLinkGDBServerCL.exe";

/// J-Link GDB server executable everywhere else
pub const JLINK_EXECUTABLE: &str = "JLinkGDBServer";

/// Port the J-Link GDB server listens on
pub const JLINK_GDB_PORT: &str = "2331";

/// Vendor debugger backed by a board-specific OpenOCD script
pub const NUCLEI_RV_DEBUGGER: &str = "nuclei-rv-debugger";

/// SEGGER J-Link probe
pub const JLINK: &str = "jlink";

/// RV-Link probe (GDB server runs on the probe itself)
pub const RV_LINK: &str = "rv-link";

/// FTDI probe that can run at a higher adapter clock
pub const UM232H: &str = "um232h";

/// Upload protocols that never get a debug tool
pub const NON_DEBUG_PROTOCOLS: &[&str] = &["serial"];

/// Debug tools every board is offered, in this order
pub const SUPPORTED_DEBUG_TOOLS: &[&str] = &[NUCLEI_RV_DEBUGGER, JLINK];

/// Probes that have their own OpenOCD interface script (everything else is FTDI)
pub const NON_FTDI_TOOLS: &[&str] = &["jlink", "gd-link", "altera-usb-blaster"];

/// Adapter clock for [`UM232H`] in kHz
pub const FAST_ADAPTER_KHZ: u32 = 8000;

/// Adapter clock for all other OpenOCD probes in kHz
pub const DEFAULT_ADAPTER_KHZ: u32 = 1000;

/// USB vendor/product id pair of the RV-Link probe
pub const RV_LINK_HWID: [&str; 2] = ["0x28e9", "0x018a"];

/// OpenOCD scripts directory, resolved by the consumer at launch time
pub const OPENOCD_SCRIPTS_DIR: &str = "$PACKAGE_DIR/share/openocd/scripts";

/// Default directory holding `<board>.json` manifests
pub const DEFAULT_BOARDS_DIR: &str = "boards";
