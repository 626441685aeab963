//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a board id (lowercase alphanumeric with underscores)
    pub fn board_id() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,24}"
    }

    /// Generate a SoC name as it may appear in a manifest
    pub fn soc() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("gd32vf103".to_string()),
            Just("evalsoc".to_string()),
            Just("hbird".to_string()),
            Just(" EvalSoC ".to_string()),
            "[a-z][a-z0-9]{1,10}",
        ]
    }

    /// Generate a probe name that takes the generic OpenOCD path
    pub fn generic_probe() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("gd-link".to_string()),
            Just("altera-usb-blaster".to_string()),
            Just("um232h".to_string()),
            Just("ftdi".to_string()),
            "[a-z][a-z0-9-]{1,12}".prop_filter("Name must not be special-cased", |s| {
                !["nuclei-rv-debugger", "jlink", "rv-link", "serial"].contains(&s.as_str())
            }),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_board_id_generator(id in board_id()) {
            prop_assert!(!id.is_empty());
            prop_assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
        }

        #[test]
        fn test_generic_probe_generator(probe in generic_probe()) {
            prop_assert!(!probe.is_empty());
            prop_assert_ne!(probe.as_str(), "jlink");
            prop_assert_ne!(probe.as_str(), "rv-link");
        }
    }
}
