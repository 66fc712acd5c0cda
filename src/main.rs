//! # cssmerge CLI
//!
//! Binary entry point for the `cssmerge` command-line tool. It parses the
//! command line with `clap` and hands off to the subcommand implementations,
//! which are thin wrappers around the `cssmerge` library.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
