//! # Theme Command Implementation
//!
//! `cssmerge theme <STYLESHEET> <THEME_FILE>` replaces the stylesheet's
//! `@theme` block with the one from `THEME_FILE`, or appends it when the
//! stylesheet has none. With `--import`, the import is merged first.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use cssmerge::merge::{add_import_and_theme, ensure_theme_exists, read_theme_content};
use cssmerge::output::{OutputConfig, Status};

use super::{read_stylesheet, write_stylesheet};

/// Merge an @theme block into a stylesheet
#[derive(Args, Debug)]
pub struct ThemeArgs {
    /// Stylesheet to modify.
    #[arg(value_name = "STYLESHEET")]
    pub stylesheet: PathBuf,

    /// File containing the @theme block.
    #[arg(value_name = "THEME_FILE")]
    pub theme_file: PathBuf,

    /// Also add `@import "<PATH>";` before merging the theme.
    #[arg(long, value_name = "PATH")]
    pub import: Option<String>,

    /// Print the merged stylesheet instead of writing it.
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

/// Execute the `theme` command.
pub fn execute(args: ThemeArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let css = read_stylesheet(&args.stylesheet)?;
    let theme = read_theme_content(&args.theme_file)
        .with_context(|| format!("Failed to read theme {}", args.theme_file.display()))?;

    let merged = match &args.import {
        Some(import) => add_import_and_theme(&css, import, &theme)?,
        None => ensure_theme_exists(&css, &theme),
    };

    let changed = write_stylesheet(&args.stylesheet, &css, &merged, args.dry_run)?;
    if args.dry_run {
        return Ok(());
    }

    let message = if changed {
        out.line(
            Status::Changed,
            &format!("Merged theme into {}", args.stylesheet.display()),
        )
    } else {
        out.line(
            Status::Ok,
            &format!("Theme already up to date in {}", args.stylesheet.display()),
        )
    };
    println!("{}", message);
    Ok(())
}
