//! Stylesheet fixture tests using datatest-stable for test data discovery
//!
//! Every `.css` file under `tests/testdata/stylesheets` is parsed and merged
//! with `@import "./components.css";`. When a sibling `.expected` file exists
//! the merged text must match it exactly. Every fixture must also:
//!
//! 1. parse into sorted, non-overlapping directives,
//! 2. report the import as present on a second merge, without changes,
//! 3. keep the tailwindcss import first.

use cssmerge::directive::parse_directives;
use cssmerge::merge::{add_import, MergeStatus};
use cssmerge::validate::validate_tailwind_order;
use std::path::Path;

const IMPORT_PATH: &str = "./components.css";

fn test_stylesheet_fixture(path: &Path) -> datatest_stable::Result<()> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read fixture {}: {}", path.display(), e))?;

    let directives = parse_directives(&content);
    for pair in directives.windows(2) {
        assert!(
            pair[0].span.end <= pair[1].span.start,
            "Overlapping directives in {}",
            path.display()
        );
    }

    let outcome = add_import(&content, IMPORT_PATH)
        .map_err(|e| format!("Failed to merge {}: {}", path.display(), e))?;

    let expected_path = path.with_extension("expected");
    if expected_path.exists() {
        let expected = std::fs::read_to_string(&expected_path)?;
        assert_eq!(
            outcome.text,
            expected,
            "Merged output of {} does not match {}",
            path.display(),
            expected_path.display()
        );
    }

    let second = add_import(&outcome.text, IMPORT_PATH)?;
    assert_eq!(second.status, MergeStatus::Exists, "{}", path.display());
    assert_eq!(second.text, outcome.text, "{}", path.display());

    assert!(
        validate_tailwind_order(&outcome.text).is_ok(),
        "Import order broken in {}",
        path.display()
    );

    Ok(())
}

// Register datatest harness to discover and run tests on all stylesheets in testdata
datatest_stable::harness!(
    test_stylesheet_fixture,
    "tests/testdata/stylesheets",
    r".*\.css$"
);
