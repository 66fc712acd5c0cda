//! Shared test utilities for the CLI end-to-end tests.
//!
//! Add `mod common;` to a test file, then use the prelude:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_stylesheet(stylesheets::TAILWIND_ONLY);
//!     fixture.command().args(["check", "app.css"]).assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::stylesheets;
    pub use super::TestFixture;
}

/// Common stylesheet and theme snippets for testing.
#[allow(dead_code)]
pub mod stylesheets {
    /// Entry point importing only Tailwind.
    pub const TAILWIND_ONLY: &str = "@import \"tailwindcss\";\n";

    /// Entry point with sources, a plugin and a theme block.
    pub const FULL: &str = r#"@import "tailwindcss";
@source "../lib";
@plugin "@tailwindcss/forms";

@theme {
  --color-brand: #123456;
}

.btn {
  color: var(--color-brand);
}
"#;

    /// Entry point with an import ahead of Tailwind.
    pub const WRONG_ORDER: &str = "@import \"./ui.css\";\n@import \"tailwindcss\";\n";

    /// Theme block used by the theme tests.
    pub const THEME: &str = "@theme {\n  --color-brand: #0af;\n}\n";
}

/// A temporary project directory holding stylesheets and configuration.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add `app.css` with the given content.
    pub fn with_stylesheet(self, content: &str) -> Self {
        self.with_file("app.css", content)
    }

    /// Add a `.cssmerge.yaml` configuration file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.with_file(".cssmerge.yaml", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Read a file from the temp directory.
    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.path().join(path)).expect("Failed to read file")
    }

    /// A `cssmerge` command running inside the fixture with colors disabled.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cssmerge");
        cmd.current_dir(self.path()).arg("--color").arg("never");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
