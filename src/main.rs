//! hashdoc — generate AsciiDoc documentation from hash-comment headers.
//!
//! Scans a source directory for supported files (yaml, Dockerfile,
//! Vagrantfile, Makefile, bash), extracts the leading `##` comment block from
//! each, and writes one `.adoc` document per file into an output directory
//! that mirrors the source tree.

mod codefile;
mod discover;
mod document;
mod extract;
mod lang;
mod output;

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hashdoc",
    about = "Generate AsciiDoc documentation from hash-comment headers in source files"
)]
struct Cli {
    /// Directory containing the source code files
    #[arg(short = 's', long = "source-dir")]
    source_dir: PathBuf,

    /// Directory to write the generated documentation to
    #[arg(short = 'o', long = "output-dir")]
    output_dir: PathBuf,

    /// Exclude files and/or folders when generating documentation.
    /// Glob patterns supported; can be specified multiple times.
    #[arg(short = 'x', long = "exclude")]
    exclude: Vec<String>,
}

fn main() -> Result<()> {
    let command = Cli::command().after_help(format!(
        "Supported filename patterns: {}",
        lang::supported_patterns().join(", ")
    ));
    let cli = Cli::from_arg_matches(&command.get_matches())?;

    run(&cli)
}

/// Sequential pipeline: discover → read → parse → write, one file at a time.
/// Stops on the first failure; unsupported files never reach this loop.
fn run(cli: &Cli) -> Result<()> {
    let excludes = discover::compile_excludes(&cli.exclude)?;
    let files = discover::find_code_files(&cli.source_dir, &excludes)?;

    for file in files {
        let source = file.full_path();
        let parsed = file.read()?.parse();
        let out_path = parsed.write(&cli.output_dir)?;
        println!("{}    ==>    {}", source, out_path.display());
    }

    Ok(())
}
