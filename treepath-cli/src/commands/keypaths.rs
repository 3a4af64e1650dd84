//! Keypaths command implementation.
//!
//! Lists every key path of the layout with its node kind and the parameters
//! it needs, as text or JSON.

use std::io::{self, Write};

use clap::{Args, ValueEnum};
use serde::Serialize;
use treepath::{Layout, Requirement};

use crate::error::CliError;
use crate::utils::{load_layout, GlobalOptions};

/// Output format for the key path listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One tab-separated line per key path
    Text,
    /// A JSON array
    Json,
}

/// List the key paths of the layout.
#[derive(Args)]
pub struct KeypathsCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct Entry<'a> {
    keypath: &'a str,
    #[serde(flatten)]
    requirement: &'a Requirement,
}

impl KeypathsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let layout = load_layout(global)?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        match self.format {
            OutputFormat::Text => write_text(&mut out, &layout)?,
            OutputFormat::Json => write_json(&mut out, &layout)?,
        }
        Ok(())
    }
}

fn write_text(out: &mut impl Write, layout: &Layout) -> Result<(), CliError> {
    for (keypath, requirement) in layout.schema().iter() {
        let keypath = if keypath.is_empty() { "<root>" } else { keypath };
        writeln!(
            out,
            "{keypath}\t{}\t{}",
            requirement.kind(),
            requirement.dependencies().join(",")
        )?;
    }
    Ok(())
}

fn write_json(out: &mut impl Write, layout: &Layout) -> Result<(), CliError> {
    let entries: Vec<Entry<'_>> = layout
        .schema()
        .iter()
        .map(|(keypath, requirement)| Entry {
            keypath,
            requirement,
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &entries)
        .map_err(|e| CliError::Io(io::Error::other(e)))?;
    writeln!(out)?;
    Ok(())
}
