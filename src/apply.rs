//! # Configuration Pipeline
//!
//! Runs the operations of a `.cssmerge.yaml` schema against the stylesheets
//! of a project.
//!
//! Stylesheets are staged in memory: each one is read from disk the first
//! time an operation selects it, every later operation works on the staged
//! text, and only stylesheets whose final text differs from what was read are
//! written back. A failing `validate` operation aborts the run before
//! anything is written.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::Serialize;

use crate::config::{Operation, Schema};
use crate::error::{Error, Result};
use crate::merge::{add_import, add_import_and_theme, ensure_theme_exists, read_theme_content};
use crate::validate::validate_tailwind_order;

/// What a single operation did to a single stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileChange {
    pub path: PathBuf,
    pub operation: &'static str,
    pub changed: bool,
}

/// A stylesheet whose final text differs from the one on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModifiedStylesheet {
    pub path: PathBuf,
    pub content: String,
}

/// Summary of an [`apply_schema`] run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApplyReport {
    pub changes: Vec<FileChange>,
    /// Written to disk, or that would have been on a dry run.
    pub modified: Vec<ModifiedStylesheet>,
}

#[derive(Debug)]
struct StagedStylesheet {
    original: String,
    current: String,
}

/// Apply every operation of `schema`, resolving paths against `base_dir`.
///
/// With `dry_run` set nothing is written; the report still lists the
/// stylesheets that would change and their new content.
///
/// # Errors
///
/// - `Error::Glob` for an invalid stylesheet pattern.
/// - `Error::Io` when a stylesheet or theme file cannot be read or written.
/// - `Error::Parse` when an import cannot be merged.
/// - `Error::Validation` when a `validate` operation finds a violation.
pub fn apply_schema(schema: &Schema, base_dir: &Path, dry_run: bool) -> Result<ApplyReport> {
    let mut staged: BTreeMap<PathBuf, StagedStylesheet> = BTreeMap::new();
    let mut report = ApplyReport::default();

    for operation in schema {
        let paths = expand_stylesheets(base_dir, operation.stylesheets())?;
        if paths.is_empty() {
            warn!(
                "{} operation matched no stylesheets: {}",
                operation.name(),
                operation.stylesheets().join(", ")
            );
            continue;
        }

        let theme = match operation {
            Operation::Theme { theme } => Some(read_theme_content(base_dir.join(&theme.file))?),
            _ => None,
        };

        for path in paths {
            let sheet = stage(&mut staged, &path)?;
            let merged = match operation {
                Operation::Import { import } => add_import(&sheet.current, &import.path)?.text,
                Operation::Theme { theme: op } => {
                    let theme = theme.as_deref().unwrap_or_default();
                    match &op.import {
                        Some(import) => add_import_and_theme(&sheet.current, import, theme)?,
                        None => ensure_theme_exists(&sheet.current, theme),
                    }
                }
                Operation::Validate { .. } => {
                    if let Err(messages) = validate_tailwind_order(&sheet.current) {
                        return Err(Error::Validation {
                            path: path.display().to_string(),
                            messages,
                        });
                    }
                    sheet.current.clone()
                }
            };

            let changed = merged != sheet.current;
            debug!(
                "{} {}: {}",
                operation.name(),
                path.display(),
                if changed { "changed" } else { "unchanged" }
            );
            sheet.current = merged;
            report.changes.push(FileChange {
                path,
                operation: operation.name(),
                changed,
            });
        }
    }

    for (path, sheet) in staged {
        if sheet.current == sheet.original {
            continue;
        }
        if dry_run {
            info!("Would write {}", path.display());
        } else {
            fs::write(&path, &sheet.current)?;
            info!("Wrote {}", path.display());
        }
        report.modified.push(ModifiedStylesheet {
            path,
            content: sheet.current,
        });
    }

    Ok(report)
}

/// Read a stylesheet into the staging area on first use.
fn stage<'a>(
    staged: &'a mut BTreeMap<PathBuf, StagedStylesheet>,
    path: &Path,
) -> Result<&'a mut StagedStylesheet> {
    match staged.entry(path.to_path_buf()) {
        Entry::Occupied(entry) => Ok(entry.into_mut()),
        Entry::Vacant(entry) => {
            let original = fs::read_to_string(path)?;
            Ok(entry.insert(StagedStylesheet {
                current: original.clone(),
                original,
            }))
        }
    }
}

/// Expand stylesheet glob patterns into a sorted, de-duplicated file list.
fn expand_stylesheets(base_dir: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        let full_pattern = base_dir.join(pattern);
        for entry in glob::glob(&full_pattern.to_string_lossy())? {
            let path = entry.map_err(|e| Error::Io(e.into()))?;
            if path.is_file() {
                paths.push(path);
            }
        }
    }

    paths.sort();
    paths.dedup();
    Ok(paths)
}
