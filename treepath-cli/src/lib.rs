//! Library exports for treepath-cli.
//!
//! The binary in `main.rs` is a thin wrapper over these modules; exporting
//! them keeps the command definitions testable in-process.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
