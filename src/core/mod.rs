//! Core business logic module
//!
//! # Submodules
//!
//! - [`board`] - Board manifest (`<board>.json`) parsing
//! - [`debug`] - Debug tool derivation
//! - [`catalog`] - Board catalog loading and lookup
//! - [`global_config`] - Global configuration management

pub mod board;
pub mod catalog;
pub mod debug;
pub mod global_config;
