//! Relative command implementation.
//!
//! Resolves two key paths and prints the relative path from the first to
//! the second.

use clap::Args;
use treepath::RelativePathMode;

use crate::error::CliError;
use crate::utils::{load_layout, parse_params, GlobalOptions};

/// Print the relative path between two key paths.
#[derive(Args)]
pub struct RelativeCommand {
    /// Key path to start from
    #[arg(value_name = "FROM")]
    pub from: String,

    /// Key path to reach
    #[arg(value_name = "TO")]
    pub to: String,

    /// Parameter for both sides as NAME=VALUE (repeatable)
    #[arg(short = 'p', long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<String>,

    /// Parameter for FROM only as NAME=VALUE (repeatable)
    #[arg(long = "from-param", value_name = "NAME=VALUE")]
    pub from_params: Vec<String>,

    /// Parameter for TO only as NAME=VALUE (repeatable)
    #[arg(long = "to-param", value_name = "NAME=VALUE")]
    pub to_params: Vec<String>,

    /// Relative path semantics: fs or url (defaults to the layout's mode)
    #[arg(long, value_name = "MODE")]
    pub mode: Option<RelativePathMode>,
}

impl RelativeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let shared = parse_params(&self.params)?;
        let mut from_params = shared.clone();
        from_params.merge(&parse_params(&self.from_params)?);
        let mut to_params = shared;
        to_params.merge(&parse_params(&self.to_params)?);

        let layout = load_layout(global)?;
        let mode = self.mode.unwrap_or_else(|| layout.mode());
        let rel = layout.relative_path(
            (self.from.as_str(), &from_params),
            (self.to.as_str(), &to_params),
            mode,
        )?;
        println!("{rel}");
        Ok(())
    }
}
