//! # Check Command Implementation
//!
//! `cssmerge check <STYLESHEET>...` verifies that the `tailwindcss` import
//! comes before every other import. It never modifies files and exits with
//! an error if any stylesheet fails.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use cssmerge::output::{OutputConfig, Status};
use cssmerge::validate::validate_tailwind_order;

use super::read_stylesheet;

/// Check that the tailwindcss import comes before other imports
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Stylesheets to check.
    #[arg(value_name = "STYLESHEET", required = true)]
    pub stylesheets: Vec<PathBuf>,
}

/// Execute the `check` command.
pub fn execute(args: CheckArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let mut failures = 0;

    for path in &args.stylesheets {
        let css = read_stylesheet(path)?;
        match validate_tailwind_order(&css) {
            Ok(()) => println!(
                "{}",
                out.line(Status::Ok, &format!("{}: import order is valid", path.display()))
            ),
            Err(messages) => {
                failures += 1;
                for message in messages {
                    println!(
                        "{}",
                        out.line(Status::Error, &format!("{}: {}", path.display(), message))
                    );
                }
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("Import order check failed for {} stylesheet(s)", failures);
    }
    Ok(())
}
