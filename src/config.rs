//! # Configuration Schema and Parsing
//!
//! This module defines the data structures that represent the `.cssmerge.yaml`
//! configuration file, and the logic for parsing it. A configuration is a list
//! of operations applied in order to one or more stylesheets:
//!
//! ```yaml
//! - import:
//!     stylesheets: ["assets/css/app.css"]
//!     path: "../deps/ui/components.css"
//! - theme:
//!     stylesheets: ["assets/css/app.css"]
//!     file: "assets/css/theme.css"
//! - validate:
//!     stylesheets: ["assets/css/*.css"]
//! ```
//!
//! Stylesheet entries are glob patterns and, like `file`, are resolved
//! relative to the directory containing the configuration file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = ".cssmerge.yaml";

/// Import operator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportOp {
    /// Glob patterns selecting the stylesheets to modify.
    pub stylesheets: Vec<String>,
    /// The import path, written verbatim into `@import "<path>";`.
    pub path: String,
}

/// Theme operator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeOp {
    /// Glob patterns selecting the stylesheets to modify.
    pub stylesheets: Vec<String>,
    /// File holding the `@theme { … }` block to merge.
    pub file: String,
    /// An import to add before the theme is merged.
    #[serde(default)]
    pub import: Option<String>,
}

/// Validate operator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOp {
    /// Glob patterns selecting the stylesheets to check.
    pub stylesheets: Vec<String>,
}

/// All possible operation types in the configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operation {
    /// Add an `@import` statement.
    Import { import: ImportOp },
    /// Replace or append the `@theme` block.
    Theme { theme: ThemeOp },
    /// Check that the Tailwind import comes first.
    Validate { validate: ValidateOp },
}

impl Operation {
    /// Short name used in logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Import { .. } => "import",
            Operation::Theme { .. } => "theme",
            Operation::Validate { .. } => "validate",
        }
    }

    /// The stylesheet patterns the operation applies to.
    pub fn stylesheets(&self) -> &[String] {
        match self {
            Operation::Import { import } => &import.stylesheets,
            Operation::Theme { theme } => &theme.stylesheets,
            Operation::Validate { validate } => &validate.stylesheets,
        }
    }

    /// Check the operation for values serde cannot reject on its own.
    pub fn validate(&self) -> Result<()> {
        if self.stylesheets().iter().all(|p| p.trim().is_empty()) {
            return Err(Error::ConfigParse {
                message: format!("{} operation has no stylesheets", self.name()),
                hint: Some("Add 'stylesheets:' with at least one path or glob pattern".to_string()),
            });
        }

        match self {
            Operation::Import { import } if import.path.trim().is_empty() => {
                Err(Error::ConfigParse {
                    message: "import operation has an empty path".to_string(),
                    hint: Some("Set 'path:' to the stylesheet to import".to_string()),
                })
            }
            Operation::Theme { theme } if theme.file.trim().is_empty() => {
                Err(Error::ConfigParse {
                    message: "theme operation has an empty file".to_string(),
                    hint: Some("Set 'file:' to a file containing an @theme block".to_string()),
                })
            }
            Operation::Theme {
                theme:
                    ThemeOp {
                        import: Some(path), ..
                    },
            } if path.trim().is_empty() => Err(Error::ConfigParse {
                message: "theme operation has an empty import".to_string(),
                hint: Some("Remove 'import:' or set it to a stylesheet path".to_string()),
            }),
            _ => Ok(()),
        }
    }
}

/// The complete configuration schema, represented as a list of operations.
///
/// The operations are executed in the order they are defined in the file.
pub type Schema = Vec<Operation>;

/// Parses a YAML string into a `Schema` and validates every operation.
pub fn parse(yaml_content: &str) -> Result<Schema> {
    if yaml_content
        .lines()
        .all(|line| line.trim().is_empty() || line.trim_start().starts_with('#'))
    {
        return Ok(Vec::new());
    }

    let schema: Schema = serde_yaml::from_str(yaml_content)?;
    for operation in &schema {
        operation.validate()?;
    }
    Ok(schema)
}

/// Reads and parses a configuration file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Schema> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_config() {
        let yaml = r#"
- import:
    stylesheets: ["assets/css/app.css"]
    path: "../deps/ui.css"
- theme:
    stylesheets: ["assets/css/app.css"]
    file: theme.css
    import: "./tokens.css"
- validate:
    stylesheets: ["assets/css/*.css"]
"#;

        let schema = parse(yaml).unwrap();
        assert_eq!(schema.len(), 3);

        match &schema[0] {
            Operation::Import { import } => {
                assert_eq!(import.stylesheets, vec!["assets/css/app.css"]);
                assert_eq!(import.path, "../deps/ui.css");
            }
            _ => panic!("Expected Import operation"),
        }

        match &schema[1] {
            Operation::Theme { theme } => {
                assert_eq!(theme.file, "theme.css");
                assert_eq!(theme.import.as_deref(), Some("./tokens.css"));
            }
            _ => panic!("Expected Theme operation"),
        }

        assert_eq!(schema[2].name(), "validate");
        assert_eq!(schema[2].stylesheets(), &["assets/css/*.css".to_string()]);
    }

    #[test]
    fn test_parse_theme_without_import() {
        let yaml = r#"
- theme:
    stylesheets: ["app.css"]
    file: theme.css
"#;
        let schema = parse(yaml).unwrap();
        match &schema[0] {
            Operation::Theme { theme } => assert!(theme.import.is_none()),
            _ => panic!("Expected Theme operation"),
        }
    }

    #[test]
    fn test_parse_empty_config() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("# nothing yet\n").unwrap().is_empty());
        assert!(parse("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_operation() {
        let yaml = r#"
- rename:
    from: a
    to: b
"#;
        assert!(matches!(parse(yaml), Err(Error::Yaml(_))));
    }

    #[test]
    fn test_parse_rejects_missing_stylesheets() {
        let yaml = r#"
- import:
    stylesheets: []
    path: ui.css
"#;
        match parse(yaml) {
            Err(Error::ConfigParse { message, hint }) => {
                assert!(message.contains("no stylesheets"));
                assert!(hint.is_some());
            }
            other => panic!("Expected ConfigParse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_empty_import_path() {
        let yaml = r#"
- import:
    stylesheets: [app.css]
    path: "  "
"#;
        assert!(matches!(parse(yaml), Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_parse_rejects_empty_theme_import() {
        let yaml = r#"
- theme:
    stylesheets: [app.css]
    file: theme.css
    import: ""
"#;
        assert!(matches!(parse(yaml), Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = from_file(dir.path().join(DEFAULT_CONFIG_FILE));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
