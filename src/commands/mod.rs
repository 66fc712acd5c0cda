//! # CLI Command Implementations
//!
//! One module per `cssmerge` subcommand. Each module defines an `Args` struct
//! derived with `clap` and an `execute` function that calls into the
//! `cssmerge` library and reports the result.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub mod apply;
pub mod check;
pub mod completions;
pub mod directives;
pub mod import;
pub mod theme;

/// Read a stylesheet, naming it in the error.
pub(crate) fn read_stylesheet(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read stylesheet {}", path.display()))
}

/// Write merged text back, or print it on a dry run.
///
/// Returns whether the file was (or would have been) modified.
pub(crate) fn write_stylesheet(
    path: &Path,
    original: &str,
    merged: &str,
    dry_run: bool,
) -> Result<bool> {
    if dry_run {
        print!("{}", merged);
        return Ok(merged != original);
    }
    if merged == original {
        return Ok(false);
    }
    fs::write(path, merged)
        .with_context(|| format!("Failed to write stylesheet {}", path.display()))?;
    Ok(true)
}
