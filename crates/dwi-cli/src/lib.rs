//! dwi-cli library root.
//!
//! Exposes argument parsing, command execution and the config layer so
//! integration tests can drive them without spawning the binary.

pub mod commands;
pub mod config;
