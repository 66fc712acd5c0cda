//! `@import` merge operations
//!
//! New imports are placed according to the directives already in the
//! stylesheet (see [`Document::import_insertion_point`]) and written as
//! `@import "<path>";`, whatever quoting style the existing imports use.
//!
//! ## Existence check
//!
//! An import counts as present when the path, either as given or normalized
//! (see [`normalize_import_path`]), appears in a quoted `@import "…"` or an
//! `@import url(…)` statement of the stylesheet or of its normalized form.

use log::debug;
use log::warn;
use regex::Regex;

use super::{MergeOutcome, MergeStatus};
use crate::directive::Document;
use crate::error::{Error, Result};
use crate::path::normalize_import_path;

/// Compile one of the import matching patterns.
fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::Parse {
        message: format!("Failed to build import pattern: {}", e),
    })
}

/// Build the quoted-literal and `url(…)` patterns for one path candidate.
fn import_patterns(candidate: &str) -> Result<[Regex; 2]> {
    let escaped = regex::escape(candidate);
    let quoted = compile(&format!(r#"(?i:@import)\s+["']{}["']"#, escaped))?;
    let url = compile(&format!(
        r#"(?i:@import)\s+(?i:url)\(\s*["']?{}["']?\s*\)"#,
        escaped
    ))?;
    Ok([quoted, url])
}

/// Check whether `import_path` is already imported by `css`.
///
/// # Errors
///
/// Returns `Error::Parse` if a matching pattern cannot be compiled.
pub fn try_import_exists(css: &str, import_path: &str) -> Result<bool> {
    let normalized_path = normalize_import_path(import_path);
    let normalized_css = normalize_import_path(css);

    let mut candidates = vec![import_path];
    if normalized_path != import_path {
        candidates.push(&normalized_path);
    }

    for candidate in candidates {
        for pattern in import_patterns(candidate)? {
            if pattern.is_match(css) || pattern.is_match(&normalized_css) {
                return Ok(true);
            }
        }
    }

    Ok(false)
}

/// Check whether `import_path` is already imported by `css`.
///
/// A path whose patterns cannot be built is logged and reported as absent.
///
/// ```
/// use cssmerge::merge::import_exists;
///
/// assert!(import_exists("@import url('a/b.css');", r"a\b.css"));
/// assert!(!import_exists("@import \"a/b.css\";", "b.css"));
/// ```
pub fn import_exists(css: &str, import_path: &str) -> bool {
    try_import_exists(css, import_path).unwrap_or_else(|e| {
        warn!("Could not check import '{}': {}", import_path, e);
        false
    })
}

/// Splice `statement` into `text` at `position`, on a line of its own.
///
/// Whitespace around the split point is collapsed so that repeated merges
/// never accumulate blank lines. The result always ends with a newline when
/// the statement is the last thing in the text. When the statement lands at
/// the very start of the text, a blank line separates it from what follows.
///
/// `position` is clamped to the text and moved back to a `char` boundary.
pub fn insert_at(text: &str, statement: &str, position: usize) -> String {
    let mut position = position.min(text.len());
    while !text.is_char_boundary(position) {
        position -= 1;
    }

    let (before, after) = text.split_at(position);
    let before = before.trim_end();
    let after = after.trim_start();

    let mut merged = String::with_capacity(before.len() + statement.len() + after.len() + 3);
    if before.is_empty() {
        merged.push_str(statement);
        merged.push('\n');
        if !after.is_empty() {
            merged.push('\n');
            merged.push_str(after);
        }
    } else {
        merged.push_str(before);
        merged.push('\n');
        merged.push_str(statement);
        merged.push('\n');
        merged.push_str(after);
    }
    merged
}

/// Unconditionally insert `@import "<import_path>";` into `css`.
///
/// The text is trimmed first; no existence check is made.
pub fn insert_import(css: &str, import_path: &str) -> String {
    let css = css.trim();
    let document = Document::parse(css);
    let position = document.import_insertion_point();
    debug!(
        "Inserting import '{}' at offset {} ({} directives)",
        import_path,
        position,
        document.directives().len()
    );
    insert_at(css, &format!("@import \"{}\";", import_path), position)
}

/// Add `@import "<import_path>";` to `css` unless it is already imported.
///
/// When the import already exists the input is returned as-is with
/// [`MergeStatus::Exists`], so applying the same import twice is a no-op.
///
/// # Errors
///
/// Returns `Error::Parse` if the existence check fails internally.
pub fn add_import(css: &str, import_path: &str) -> Result<MergeOutcome> {
    if try_import_exists(css.trim(), import_path)? {
        debug!("Import '{}' already present", import_path);
        return Ok(MergeOutcome {
            status: MergeStatus::Exists,
            text: css.to_string(),
        });
    }

    Ok(MergeOutcome {
        status: MergeStatus::Added,
        text: insert_import(css, import_path),
    })
}
