//! Import path normalization
//!
//! Import paths are written by hand and by generators, so the same file may
//! show up as `a\b.css`, `a//b.css` or ` a/b.css `. The normalized form is used
//! only to compare paths; merged output always keeps the path as given.

/// Normalize an import path (or a whole stylesheet) for comparison.
///
/// Backslashes become forward slashes, runs of slashes collapse to one and
/// surrounding whitespace is trimmed.
///
/// ```
/// use cssmerge::path::normalize_import_path;
///
/// assert_eq!(normalize_import_path(r" ..\\deps//ui.css "), "../deps/ui.css");
/// ```
pub fn normalize_import_path(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len());
    let mut previous_was_slash = false;

    for ch in path.trim().chars() {
        let ch = if ch == '\\' { '/' } else { ch };
        if ch == '/' {
            if previous_was_slash {
                continue;
            }
            previous_was_slash = true;
        } else {
            previous_was_slash = false;
        }
        normalized.push(ch);
    }

    normalized
}
