//! Build utilities for Live Simulator: 2
//!
//! - [`version`]: extracts the version record from main.lua
//! - [`output`]: resource script generation and gradle.properties patching
//! - [`ci`]: GitHub Actions revision output
//! - [`commands`]: subcommand handlers used by the binary

pub mod ci;
pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
pub mod version;
