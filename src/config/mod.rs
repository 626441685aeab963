//! Configuration and constants
//!
//! - [`defaults`] - Fixed package names, protocol sets and debugger settings

pub mod defaults;
