//! Resolve command implementation.
//!
//! Prints the absolute path of one key path in the layout.

use clap::Args;

use crate::error::CliError;
use crate::utils::{load_layout, parse_params, GlobalOptions};

/// Resolve the absolute path of a key path.
#[derive(Args)]
pub struct ResolveCommand {
    /// Dot-separated key path (empty string for the root)
    #[arg(value_name = "KEYPATH")]
    pub keypath: String,

    /// Parameter as NAME=VALUE (repeatable)
    #[arg(short = 'p', long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<String>,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let params = parse_params(&self.params)?;
        let layout = load_layout(global)?;
        let path = layout.path(&self.keypath, &params)?;
        println!("{path}");
        Ok(())
    }
}
