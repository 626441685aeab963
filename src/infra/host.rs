//! Host operating system detection

use crate::core::debug::HostSystem;

/// The machine this process runs on
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentHost;

impl CurrentHost {
    /// Map a Rust target OS name to the name platforms report
    pub fn platform_name(os: &str) -> &str {
        match os {
            "windows" => "Windows",
            "linux" => "Linux",
            "macos" => "Darwin",
            "freebsd" => "FreeBSD",
            other => other,
        }
    }
}

impl HostSystem for CurrentHost {
    fn os_name(&self) -> &str {
        Self::platform_name(std::env::consts::OS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_names() {
        assert_eq!(CurrentHost::platform_name("windows"), "Windows");
        assert_eq!(CurrentHost::platform_name("linux"), "Linux");
        assert_eq!(CurrentHost::platform_name("macos"), "Darwin");
        assert_eq!(CurrentHost::platform_name("haiku"), "haiku");
    }

    #[test]
    fn test_current_host_matches_target() {
        assert_eq!(CurrentHost.is_windows(), cfg!(windows));
    }
}
