//! Property-based tests for directive parsing and merging.
//!
//! These tests use proptest to generate stylesheets and import paths and
//! verify that the merge invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::directive::parse_directives;
    use crate::merge::{add_import, ensure_theme_exists, MergeStatus};
    use crate::path::normalize_import_path;
    use proptest::prelude::*;

    /// A stylesheet built from directive lines, rules and blank lines.
    fn stylesheet() -> impl Strategy<Value = String> {
        let line = prop_oneof![
            "@import \"[a-z]{1,6}\\.css\";",
            "@import url\\([a-z]{1,6}\\.css\\);",
            "@source \"\\.\\./[a-z]{1,6}\";",
            "@plugin \"[a-z]{1,6}\";",
            "@custom-variant [a-z]{1,6} \\(&:hover\\);",
            "@theme \\{ --[a-z]{1,4}: 1; \\}",
            "\\.[a-z]{1,6} \\{ color: red; \\}",
            "[ \t]{0,3}",
        ];
        prop::collection::vec(line, 0..12).prop_map(|lines| lines.join("\n"))
    }

    fn import_path() -> impl Strategy<Value = String> {
        "(\\.\\./)?[a-z]{1,8}(/[a-z]{1,8}){0,2}\\.css"
    }

    // ============================================================================
    // parser property tests
    // ============================================================================

    proptest! {
        /// Property: spans are sorted, non-overlapping and start at an at-keyword
        #[test]
        fn spans_are_sorted_and_disjoint(css in "[@a-z;{}\"' ()\n-]{0,160}") {
            let directives = parse_directives(&css);
            for pair in directives.windows(2) {
                prop_assert!(pair[0].span.end <= pair[1].span.start);
            }
            for directive in &directives {
                prop_assert!(!directive.span.is_empty());
                prop_assert!(directive.span.slice(&css).starts_with('@'));
            }
        }

        /// Property: parsing never panics on arbitrary text
        #[test]
        fn parse_never_panics(css in "\\PC{0,200}") {
            let _ = parse_directives(&css);
        }
    }

    // ============================================================================
    // add_import property tests
    // ============================================================================

    proptest! {
        /// Property: adding the same import twice is a no-op the second time
        #[test]
        fn add_import_is_idempotent(css in stylesheet(), path in import_path()) {
            let first = add_import(&css, &path).unwrap();
            let second = add_import(&first.text, &path).unwrap();
            prop_assert_eq!(second.status, MergeStatus::Exists);
            prop_assert_eq!(second.text, first.text);
        }

        /// Property: an added import is recognized by the parser
        #[test]
        fn added_import_is_parsed(css in stylesheet(), path in import_path()) {
            let outcome = add_import(&css, &path).unwrap();
            if outcome.status == MergeStatus::Added {
                let statement = format!("@import \"{}\";", path);
                let directives = parse_directives(&outcome.text);
                prop_assert!(directives
                    .iter()
                    .any(|d| d.span.slice(&outcome.text) == statement));
            }
        }

        /// Property: directive-free text is kept intact after the new import
        #[test]
        fn plain_css_is_prepended(css in "[a-z .{}:;\n]{1,120}", path in import_path()) {
            let outcome = add_import(&css, &path).unwrap();
            let statement = format!("@import \"{}\";\n", path);
            let trimmed = css.trim();
            let expected = if trimmed.is_empty() {
                statement
            } else {
                format!("{}\n{}", statement, trimmed)
            };
            prop_assert_eq!(outcome.text, expected);
        }
    }

    // ============================================================================
    // theme and path property tests
    // ============================================================================

    proptest! {
        /// Property: a theme appended after a rule is already in its replaced
        /// form, so re-merging is stable
        #[test]
        fn theme_merge_reaches_fixed_point(
            rules in prop::collection::vec("\\.[a-z]{1,6} \\{ color: red; \\}", 1..6),
            token in "[a-z]{1,6}",
        ) {
            let css = rules.join("\n");
            let theme = format!("@theme {{\n  --{}: 1;\n}}", token);
            let once = ensure_theme_exists(&css, &theme);
            let twice = ensure_theme_exists(&once, &theme);
            prop_assert_eq!(&twice, &once);
            prop_assert_eq!(ensure_theme_exists(&twice, &theme), twice);
        }

        /// Property: normalization is idempotent and leaves no backslashes
        #[test]
        fn normalize_is_idempotent(path in "[a-z/\\\\ .]{0,40}") {
            let once = normalize_import_path(&path);
            prop_assert!(!once.contains('\\'));
            prop_assert!(!once.contains("//"));
            prop_assert_eq!(normalize_import_path(&once), once);
        }
    }
}
