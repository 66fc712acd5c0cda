//! `@theme` block merge operations
//!
//! A project stylesheet carries at most one generated `@theme { … }` block.
//! [`ensure_theme_exists`] replaces the first block it finds or appends a new
//! one at the end of the stylesheet.
//!
//! Detection here is deliberately looser than the directive parser: any
//! occurrence of `@theme` triggers replacement, and the replaced block may
//! carry modifiers (`@theme inline { … }`).

use std::path::Path;
use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;

use super::import::add_import;
use crate::error::Result;

/// First `@theme … { … }` block together with the blank lines around it.
static THEME_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n*[ \t]*@theme(?:[ \t]+[\w-]+)*\s*\{[^}]*\}[ \t]*\n*")
        .expect("theme block pattern is valid")
});

/// Normalize theme text before it is merged.
///
/// Trailing whitespace is stripped from every line and the whole block is
/// trimmed.
///
/// ```
/// use cssmerge::merge::normalize_theme;
///
/// assert_eq!(
///     normalize_theme("\n@theme {   \n  --x: 1;\t\n}\n\n"),
///     "@theme {\n  --x: 1;\n}"
/// );
/// ```
pub fn normalize_theme(theme: &str) -> String {
    theme
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Make sure `css` carries `theme`, replacing an existing `@theme` block.
///
/// - When `css` mentions `@theme`, the first theme block (and the blank lines
///   around it) is replaced by a blank line, the theme, and a newline. Later
///   blocks are left alone. If no block can be located, the text is returned
///   unchanged.
/// - Otherwise the theme is appended: separated by a blank line, or by a
///   single newline when `css` already ends with one.
pub fn ensure_theme_exists(css: &str, theme: &str) -> String {
    let theme = normalize_theme(theme);

    if css.contains("@theme") {
        return match THEME_BLOCK.find(css) {
            Some(block) => {
                debug!("Replacing @theme block at {}..{}", block.start(), block.end());
                format!("{}\n\n{}\n{}", &css[..block.start()], theme, &css[block.end()..])
            }
            None => {
                warn!("Stylesheet mentions @theme but no theme block could be located");
                css.to_string()
            }
        };
    }

    let trimmed = css.trim_end();
    if trimmed.is_empty() {
        return format!("{}\n", theme);
    }

    let separator = if css.ends_with('\n') { "\n" } else { "\n\n" };
    debug!("Appending @theme block");
    format!("{}{}{}\n", trimmed, separator, theme)
}

/// Add an import and then make sure the theme block exists.
///
/// An import that is already present is not an error.
///
/// # Errors
///
/// Returns `Error::Parse` if the import merge fails. The theme merge itself
/// cannot fail.
pub fn add_import_and_theme(css: &str, import_path: &str, theme: &str) -> Result<String> {
    let outcome = add_import(css, import_path)?;
    debug!("Import '{}': {}", import_path, outcome.status);
    Ok(ensure_theme_exists(&outcome.text, theme))
}

/// Read theme content from disk.
///
/// # Errors
///
/// Returns `Error::Io` with the underlying error if the file cannot be read.
pub fn read_theme_content<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}
