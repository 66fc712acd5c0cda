//! Import order validation
//!
//! Tailwind must be imported before any other stylesheet so that the
//! imported files can use its layers and utilities. The check works line by
//! line on the raw text rather than on parsed directives, so it also flags
//! imports the parser would not recognize (for example unterminated ones).

/// Substring identifying the Tailwind import.
pub const TAILWIND_IMPORT_MARKER: &str = "tailwindcss";

/// Message reported when another import precedes Tailwind.
pub const TAILWIND_ORDER_MESSAGE: &str =
    "@import \"tailwindcss\" must come before other @import statements";

/// Check that the Tailwind import precedes every other import.
///
/// Returns the list of violations on failure. A stylesheet without a
/// Tailwind import, or without other imports, is always valid.
///
/// ```
/// use cssmerge::validate::validate_tailwind_order;
///
/// assert!(validate_tailwind_order("@import \"tailwindcss\";\n@import \"./ui.css\";").is_ok());
/// assert!(validate_tailwind_order("@import \"./ui.css\";\n@import \"tailwindcss\";").is_err());
/// ```
pub fn validate_tailwind_order(css: &str) -> Result<(), Vec<String>> {
    let lines: Vec<&str> = css.lines().collect();

    let tailwind_line = lines
        .iter()
        .position(|line| line.contains("@import") && line.contains(TAILWIND_IMPORT_MARKER));

    let other_import_lines: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.contains("@import") && !line.contains(TAILWIND_IMPORT_MARKER))
        .map(|(idx, _)| idx)
        .collect();

    match tailwind_line {
        Some(tailwind) if other_import_lines.iter().any(|&idx| idx < tailwind) => {
            Err(vec![TAILWIND_ORDER_MESSAGE.to_string()])
        }
        _ => Ok(()),
    }
}
