//! # Error Handling
//!
//! This module defines the centralized error type for `cssmerge`. It uses
//! `thiserror` to derive a single `Error` enum covering every failure mode of
//! the library, and a `Result<T>` alias used throughout the crate.
//!
//! The merge functions themselves are pure text surgery, so very little can
//! fail inside them: the only internal failure is building the import
//! matching patterns, which is reported as `Error::Parse`. Everything else
//! comes from the edges of the crate:
//!
//! - reading theme files and stylesheets (`Error::Io`, surfaced verbatim),
//! - parsing `.cssmerge.yaml` (`Error::Yaml`, `Error::ConfigParse`),
//! - expanding stylesheet globs (`Error::Glob`),
//! - import-order violations found by a `validate` operation
//!   (`Error::Validation`).
//!
//! Validation results returned by
//! [`validate_tailwind_order`](crate::validate::validate_tailwind_order) are
//! plain data and never go through this type.

use thiserror::Error;

/// Main error type for cssmerge operations
#[derive(Error, Debug)]
pub enum Error {
    /// Text manipulation failed unexpectedly while merging.
    ///
    /// In practice this means a pattern built from an import path could not
    /// be compiled (for example because the path is absurdly long).
    #[error("CSS parse error: {message}")]
    Parse { message: String },

    /// The `.cssmerge.yaml` file is well-formed YAML but describes an invalid
    /// operation.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// One or more stylesheets failed the import-order check.
    #[error("Import order validation failed for {path}: {}", messages.join("; "))]
    Validation {
        path: String,
        messages: Vec<String>,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
