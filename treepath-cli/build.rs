//! Build script for treepath-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    let param = |long: &'static str, help: &'static str| {
        Arg::new(long)
            .long(long)
            .value_name("NAME=VALUE")
            .help(help)
            .action(ArgAction::Append)
    };

    Command::new("treepath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve paths in declarative artifact layouts")
        .long_about(
            "Resolve absolute and relative paths of key paths in a treepath.yaml layout file",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("layout")
                .long("layout")
                .help("Layout file (default: treepath.yaml found from the current directory)")
                .value_name("PATH")
                .global(true)
                .env("TREEPATH_LAYOUT"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Print the absolute path of a key path")
                .arg(Arg::new("keypath").value_name("KEYPATH").required(true))
                .arg(param("param", "Parameter as NAME=VALUE (repeatable)").short('p')),
            Command::new("relative")
                .about("Print the relative path between two key paths")
                .arg(Arg::new("from").value_name("FROM").required(true))
                .arg(Arg::new("to").value_name("TO").required(true))
                .arg(param("param", "Parameter for both sides").short('p'))
                .arg(param("from-param", "Parameter for FROM only"))
                .arg(param("to-param", "Parameter for TO only"))
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .value_name("MODE")
                        .help("Relative path semantics: fs or url"),
                ),
            Command::new("keypaths")
                .about("List key paths with their kind and required parameters")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
            Command::new("validate")
                .about("Validate a layout file")
                .arg(
                    Arg::new("layout_path")
                        .value_name("LAYOUT_PATH")
                        .required(true),
                ),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("treepath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
