//! # Directives Command Implementation
//!
//! `cssmerge directives <STYLESHEET>` lists the directives the parser
//! recognizes, with their byte spans and priority. Useful to see where an
//! import would be inserted and why.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

use cssmerge::directive::{DirectiveKind, Document};

use super::read_stylesheet;

/// Output format for the directive listing
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Format {
    /// One directive per line
    #[default]
    Text,
    /// JSON document
    Json,
}

/// List the directives found in a stylesheet
#[derive(Args, Debug)]
pub struct DirectivesArgs {
    /// Stylesheet to inspect.
    #[arg(value_name = "STYLESHEET")]
    pub stylesheet: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Serialize)]
struct DirectiveEntry<'a> {
    kind: DirectiveKind,
    priority: u8,
    start: usize,
    end: usize,
    text: &'a str,
}

#[derive(Serialize)]
struct Listing<'a> {
    directives: Vec<DirectiveEntry<'a>>,
    import_insertion_point: usize,
}

/// Execute the `directives` command.
pub fn execute(args: DirectivesArgs) -> Result<()> {
    let css = read_stylesheet(&args.stylesheet)?;
    let document = Document::parse(&css);

    let listing = Listing {
        directives: document
            .directives()
            .iter()
            .map(|d| DirectiveEntry {
                kind: d.kind,
                priority: d.kind.priority(),
                start: d.span.start,
                end: d.span.end,
                text: d.span.slice(document.text()),
            })
            .collect(),
        import_insertion_point: document.import_insertion_point(),
    };

    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&listing)?),
        Format::Text => {
            for entry in &listing.directives {
                let first_line = entry.text.lines().next().unwrap_or_default();
                println!(
                    "{:>6}..{:<6} {:<15} {}",
                    entry.start,
                    entry.end,
                    entry.kind.to_string(),
                    first_line
                );
            }
            println!("import insertion point: {}", listing.import_insertion_point);
        }
    }
    Ok(())
}
