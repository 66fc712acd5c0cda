//! # Apply Command Implementation
//!
//! `cssmerge apply` runs the operations listed in `.cssmerge.yaml` (or the
//! file given with `--config`) against the stylesheets they select. Paths in
//! the configuration are relative to the directory containing it.

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use cssmerge::apply::apply_schema;
use cssmerge::config::{self, DEFAULT_CONFIG_FILE};
use cssmerge::output::{OutputConfig, Status};

/// Apply the operations of a .cssmerge.yaml configuration
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Path to config file
    #[arg(short, long, value_name = "PATH", env = "CSSMERGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show what would be done without making changes
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the `apply` command.
pub fn execute(args: ApplyArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let config_path = args
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    if !config_path.exists() {
        anyhow::bail!("Configuration file not found: {}", config_path.display());
    }

    let schema = config::from_file(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    let base_dir = config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let report = apply_schema(&schema, base_dir, args.dry_run)?;

    if args.quiet {
        return Ok(());
    }

    for modified in &report.modified {
        let verb = if args.dry_run { "Would update" } else { "Updated" };
        println!(
            "{}",
            out.line(
                Status::Changed,
                &format!("{} {}", verb, modified.path.display())
            )
        );
        if args.dry_run {
            println!("{}", modified.content);
        }
    }

    if report.modified.is_empty() {
        println!(
            "{}",
            out.line(Status::Ok, "All stylesheets are up to date")
        );
    }
    Ok(())
}
