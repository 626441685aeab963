//! Infrastructure layer
//!
//! Host-facing pieces: filesystem access, platform directories, installed
//! packages and operating system detection.

pub mod dirs;
pub mod filesystem;
pub mod host;
pub mod packages;
