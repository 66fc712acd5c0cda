//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// cssmerge - Merge @import statements and @theme blocks into stylesheets
#[derive(Parser, Debug)]
#[command(name = "cssmerge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add an @import statement to a stylesheet
    Import(commands::import::ImportArgs),

    /// Merge an @theme block into a stylesheet
    Theme(commands::theme::ThemeArgs),

    /// Check that the tailwindcss import comes before other imports
    Check(commands::check::CheckArgs),

    /// List the directives found in a stylesheet
    Directives(commands::directives::DirectivesArgs),

    /// Apply the operations of a .cssmerge.yaml configuration
    Apply(commands::apply::ApplyArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level.as_str()),
        )
        .format_timestamp(None)
        .init();

        let color = self.color.as_str();
        match self.command {
            Commands::Import(args) => commands::import::execute(args, color),
            Commands::Theme(args) => commands::theme::execute(args, color),
            Commands::Check(args) => commands::check::execute(args, color),
            Commands::Directives(args) => commands::directives::execute(args),
            Commands::Apply(args) => commands::apply::execute(args, color),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
