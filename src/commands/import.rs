//! # Import Command Implementation
//!
//! `cssmerge import <STYLESHEET> <PATH>` adds `@import "<PATH>";` to a
//! stylesheet, after the existing imports or, when there are none, after the
//! highest-priority directive. Running it again is a no-op.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use cssmerge::merge::{add_import, MergeStatus};
use cssmerge::output::{OutputConfig, Status};

use super::{read_stylesheet, write_stylesheet};

/// Add an @import statement to a stylesheet
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Stylesheet to modify.
    #[arg(value_name = "STYLESHEET")]
    pub stylesheet: PathBuf,

    /// Path to import, written as `@import "<PATH>";`.
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Print the merged stylesheet instead of writing it.
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

/// Execute the `import` command.
pub fn execute(args: ImportArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let css = read_stylesheet(&args.stylesheet)?;
    let outcome = add_import(&css, &args.path)?;

    write_stylesheet(&args.stylesheet, &css, &outcome.text, args.dry_run)?;
    if args.dry_run {
        return Ok(());
    }

    let message = match outcome.status {
        MergeStatus::Added => out.line(
            Status::Changed,
            &format!("Added import \"{}\" to {}", args.path, args.stylesheet.display()),
        ),
        MergeStatus::Exists => out.line(
            Status::Ok,
            &format!(
                "Import \"{}\" already present in {}",
                args.path,
                args.stylesheet.display()
            ),
        ),
    };
    println!("{}", message);
    Ok(())
}
