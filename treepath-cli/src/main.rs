//! Main entry point for the treepath CLI.
//!
//! It provides commands for working with a layout file:
//! - `resolve`: Print the absolute path of a key path
//! - `relative`: Print the relative path between two key paths
//! - `keypaths`: List key paths with their requirements
//! - `validate`: Validate a layout file

use clap::Parser;
use treepath_cli::cli::{Cli, Command};
use treepath_cli::utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Route library diagnostics through the same logger
    let logger = treepath::init_logger(cli.verbose, cli.quiet);
    logger.install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        layout: cli.layout,
    };

    let result = match cli.command {
        Command::Resolve(cmd) => cmd.execute(&global),
        Command::Relative(cmd) => cmd.execute(&global),
        Command::Keypaths(cmd) => cmd.execute(&global),
        Command::Validate(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
