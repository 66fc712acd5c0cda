//! # cssmerge
//!
//! Directive-aware merging for the stylesheet entry point of a utility-first
//! CSS project. When a component library is scaffolded into an application,
//! its stylesheet has to be imported and its design tokens merged into the
//! application's `@theme` block. This crate performs that text surgery
//! without disturbing anything else in the file.
//!
//! ## Quick Example
//!
//! ```
//! use cssmerge::merge::add_import_and_theme;
//! use cssmerge::validate::validate_tailwind_order;
//!
//! let css = "@import \"tailwindcss\";\n";
//! let theme = "@theme {\n  --color-brand: #0af;\n}";
//!
//! let merged = add_import_and_theme(css, "../deps/ui/components.css", theme).unwrap();
//! assert_eq!(
//!     merged,
//!     "@import \"tailwindcss\";\n\
//!      @import \"../deps/ui/components.css\";\n\
//!      @theme {\n  --color-brand: #0af;\n}\n"
//! );
//! assert!(validate_tailwind_order(&merged).is_ok());
//! ```
//!
//! ## Core Concepts
//!
//! - **Directives (`directive`)**: `@import`, `@source`, `@plugin`,
//!   `@tailwind`, `@custom-variant` and `@theme` occurrences, located by byte
//!   span and ranked by priority.
//! - **Merging (`merge`)**: idempotent insertion of `@import` statements at
//!   the position their priority demands, and replacement or insertion of the
//!   `@theme` block.
//! - **Validation (`validate`)**: the Tailwind import must precede every other
//!   import.
//! - **Configuration (`config`, `apply`)**: a `.cssmerge.yaml` file listing
//!   operations to run against a project's stylesheets.
//!
//! Every merge function is pure: text in, new text out, no state kept between
//! calls.

pub mod apply;
pub mod config;
pub mod directive;
pub mod error;
pub mod merge;
pub mod output;
pub mod path;
pub mod validate;

#[cfg(test)]
mod merge_proptest;
