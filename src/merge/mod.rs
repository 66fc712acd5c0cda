//! Stylesheet merge operations
//!
//! This module holds the text surgery performed on a stylesheet entry point
//! when a component is scaffolded into a project:
//!
//! - [`import`] adds `@import` statements at the position their priority
//!   demands, and recognizes imports that are already present.
//! - [`theme`] replaces or appends the `@theme { … }` block.
//!
//! Every function takes text in and returns new text out. Nothing is cached
//! between calls and the input is never modified in place.
//!
//! ## Example
//!
//! ```
//! use cssmerge::merge::{add_import, MergeStatus};
//!
//! let first = add_import("@import \"tailwindcss\";\n", "../deps/ui.css").unwrap();
//! assert_eq!(first.status, MergeStatus::Added);
//! assert_eq!(first.text, "@import \"tailwindcss\";\n@import \"../deps/ui.css\";\n");
//!
//! let second = add_import(&first.text, "../deps/ui.css").unwrap();
//! assert_eq!(second.status, MergeStatus::Exists);
//! assert_eq!(second.text, first.text);
//! ```

use std::fmt;

use serde::Serialize;

pub mod import;
pub mod theme;

pub use import::{add_import, import_exists, insert_at, insert_import, try_import_exists};
pub use theme::{add_import_and_theme, ensure_theme_exists, normalize_theme, read_theme_content};

/// Whether a merge changed the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStatus {
    /// The import was spliced into the text.
    Added,
    /// The import was already present; the text is returned untouched.
    Exists,
}

impl fmt::Display for MergeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeStatus::Added => f.write_str("added"),
            MergeStatus::Exists => f.write_str("exists"),
        }
    }
}

/// Result of [`add_import`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeOutcome {
    pub status: MergeStatus,
    pub text: String,
}

impl MergeOutcome {
    pub fn is_added(&self) -> bool {
        self.status == MergeStatus::Added
    }
}
