//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Print the absolute path of a key path
//! - `relative`: Print the relative path between two key paths
//! - `keypaths`: List key paths with their requirements
//! - `validate`: Validate a layout file

pub mod keypaths;
pub mod relative;
pub mod resolve;
pub mod validate;

pub use keypaths::{KeypathsCommand, OutputFormat};
pub use relative::RelativeCommand;
pub use resolve::ResolveCommand;
pub use validate::ValidateCommand;
