//! Command to validate a treepath layout file.

use std::path::PathBuf;

use clap::Args;
use treepath::LayoutLoader;

use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Validate a layout file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Layout file to validate
    #[arg(value_name = "LAYOUT_PATH")]
    pub layout_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if !self.layout_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.layout_path.display()
            )));
        }

        let config = match LayoutLoader::load_file(&self.layout_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Layout file is invalid".to_string(),
                ));
            }
        };

        match config.into_layout() {
            Ok(layout) => {
                println!("Layout is valid ({} key paths)", layout.schema().len());
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Layout validation failed".to_string(),
                ))
            }
        }
    }
}
