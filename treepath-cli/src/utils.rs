//! Utility functions for CLI operations.
//!
//! This module provides helpers shared by the commands: loading the layout
//! selected by the global options and turning `NAME=VALUE` arguments into a
//! parameter bag.

use std::env;
use std::path::PathBuf;

use treepath::{Layout, LayoutLoader, Params};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Layout file to use instead of discovery.
    pub layout: Option<PathBuf>,
}

/// Load the layout named by `--layout`, or discover one from the current
/// directory.
pub fn load_layout(global: &GlobalOptions) -> Result<Layout, CliError> {
    let cwd = env::current_dir()?;
    Ok(LayoutLoader::load(global.layout.as_deref(), &cwd)?)
}

/// Build a parameter bag from `NAME=VALUE` arguments. Later values win.
pub fn parse_params<'a, I>(assignments: I) -> Result<Params, CliError>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut params = Params::new();
    for assignment in assignments {
        let (name, value) = Params::parse_assignment(assignment)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
        params.insert(name, value);
    }
    Ok(params)
}
