//! # Directive Parsing
//!
//! This module recognizes the at-rules of a utility-first CSS entry point and
//! locates them in the raw text. Six directive kinds are recognized:
//!
//! | Kind             | Grammar                                              |
//! |------------------|------------------------------------------------------|
//! | `import`         | `@import` ws+ (`"…"` \| `'…'` \| `url(…)`) `[^;]*` `;` |
//! | `source`         | `@source` `[^;]*` `;`                                |
//! | `plugin`         | `@plugin` `[^;]*` `;`                                |
//! | `tailwind-entry` | `@tailwind` `[^;]*` `;`                              |
//! | `custom-variant` | `@custom-variant` `[^;]*` `;`                        |
//! | `theme`          | `@theme` ws* `{` `[^}]*` `}`                         |
//!
//! Keywords are matched case-insensitively. Each kind is scanned on its own,
//! then the results are merged and sorted by start offset. A directive that
//! is never terminated (no `;`, no closing `}`) is simply not reported.
//! Theme blocks are single-level: the first `}` closes the block.
//!
//! Spans are byte offsets. Every character the scanner stops on is ASCII, so
//! span boundaries always fall on `char` boundaries and can be used to slice
//! the original `&str`.

use std::fmt;

use log::debug;
use serde::Serialize;

/// The closed set of recognized directive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectiveKind {
    /// `@import "…";` or `@import url(…);`
    Import,
    /// `@source …;`
    Source,
    /// `@plugin …;`
    Plugin,
    /// `@tailwind …;`
    TailwindEntry,
    /// `@custom-variant …;`
    CustomVariant,
    /// `@theme { … }`
    Theme,
}

impl DirectiveKind {
    /// Every kind, in priority order.
    pub const ALL: [DirectiveKind; 6] = [
        DirectiveKind::Import,
        DirectiveKind::Source,
        DirectiveKind::Plugin,
        DirectiveKind::TailwindEntry,
        DirectiveKind::CustomVariant,
        DirectiveKind::Theme,
    ];

    /// Priority rank of the kind; lower values belong earlier in a stylesheet.
    ///
    /// ```
    /// use cssmerge::directive::DirectiveKind;
    ///
    /// assert!(DirectiveKind::Import.priority() < DirectiveKind::Theme.priority());
    /// ```
    pub const fn priority(self) -> u8 {
        match self {
            DirectiveKind::Import => 1,
            DirectiveKind::Source => 2,
            DirectiveKind::Plugin => 3,
            DirectiveKind::TailwindEntry => 4,
            DirectiveKind::CustomVariant => 5,
            DirectiveKind::Theme => 6,
        }
    }

    /// The at-keyword that introduces the directive.
    pub const fn keyword(self) -> &'static str {
        match self {
            DirectiveKind::Import => "@import",
            DirectiveKind::Source => "@source",
            DirectiveKind::Plugin => "@plugin",
            DirectiveKind::TailwindEntry => "@tailwind",
            DirectiveKind::CustomVariant => "@custom-variant",
            DirectiveKind::Theme => "@theme",
        }
    }

    /// Stable, human readable name.
    pub const fn name(self) -> &'static str {
        match self {
            DirectiveKind::Import => "import",
            DirectiveKind::Source => "source",
            DirectiveKind::Plugin => "plugin",
            DirectiveKind::TailwindEntry => "tailwind-entry",
            DirectiveKind::CustomVariant => "custom-variant",
            DirectiveKind::Theme => "theme",
        }
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Half-open `[start, end)` byte range into the parsed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The text covered by this span.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// A recognized directive occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub span: Span,
}

/// Parse `text` into the sorted list of directives it contains.
///
/// Spans never overlap. If two scans claim overlapping ranges (for example a
/// `@source …;` written inside a theme block), the directive that starts first
/// wins and the other is dropped.
///
/// ```
/// use cssmerge::directive::{parse_directives, DirectiveKind};
///
/// let directives = parse_directives("@import \"tailwindcss\";\n@plugin \"x\";\n");
/// let kinds: Vec<_> = directives.iter().map(|d| d.kind).collect();
/// assert_eq!(kinds, vec![DirectiveKind::Import, DirectiveKind::Plugin]);
/// ```
pub fn parse_directives(text: &str) -> Vec<Directive> {
    let mut found: Vec<Directive> = DirectiveKind::ALL
        .iter()
        .flat_map(|&kind| scan_kind(text, kind))
        .collect();
    found.sort_by_key(|directive| directive.span.start);

    let mut directives: Vec<Directive> = Vec::with_capacity(found.len());
    for directive in found {
        match directives.last() {
            Some(previous) if directive.span.start < previous.span.end => {
                debug!(
                    "Dropping {} at {} overlapping {} at {}..{}",
                    directive.kind,
                    directive.span.start,
                    previous.kind,
                    previous.span.start,
                    previous.span.end
                );
            }
            _ => directives.push(directive),
        }
    }
    directives
}

/// Find every occurrence of a single directive kind.
fn scan_kind(text: &str, kind: DirectiveKind) -> Vec<Directive> {
    let bytes = text.as_bytes();
    let keyword = kind.keyword().as_bytes();
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(start) = find_keyword(bytes, keyword, pos) {
        match match_body(bytes, start + keyword.len(), kind) {
            Some(end) => {
                found.push(Directive {
                    kind,
                    span: Span { start, end },
                });
                pos = end;
            }
            None => pos = start + 1,
        }
    }

    found
}

fn find_keyword(haystack: &[u8], keyword: &[u8], from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .windows(keyword.len())
        .position(|window| window.eq_ignore_ascii_case(keyword))
        .map(|offset| from + offset)
}

/// Match the part of a directive after its keyword, returning the end offset.
fn match_body(bytes: &[u8], mut i: usize, kind: DirectiveKind) -> Option<usize> {
    match kind {
        DirectiveKind::Import => {
            let after_keyword = i;
            i = skip_whitespace(bytes, i);
            if i == after_keyword {
                return None;
            }
            let after_target = match_import_target(bytes, i)?;
            find_after(bytes, after_target, b';')
        }
        DirectiveKind::Theme => {
            i = skip_whitespace(bytes, i);
            if bytes.get(i) != Some(&b'{') {
                return None;
            }
            find_after(bytes, i + 1, b'}')
        }
        DirectiveKind::Source
        | DirectiveKind::Plugin
        | DirectiveKind::TailwindEntry
        | DirectiveKind::CustomVariant => find_after(bytes, i, b';'),
    }
}

/// Quoted literal or `url(…)` following `@import`.
fn match_import_target(bytes: &[u8], i: usize) -> Option<usize> {
    match *bytes.get(i)? {
        quote @ (b'"' | b'\'') => find_after(bytes, i + 1, quote),
        _ => {
            let prefix = bytes.get(i..i + 4)?;
            if prefix.eq_ignore_ascii_case(b"url(") {
                find_after(bytes, i + 4, b')')
            } else {
                None
            }
        }
    }
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).is_some_and(|b| b.is_ascii_whitespace()) {
        i += 1;
    }
    i
}

/// Offset just past the first `needle` at or after `from`.
fn find_after(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|&b| b == needle)
        .map(|offset| from + offset + 1)
}

/// A stylesheet together with its parsed directives.
///
/// Built fresh for every merge; it borrows the text and never mutates it.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    text: &'a str,
    directives: Vec<Directive>,
}

impl<'a> Document<'a> {
    pub fn parse(text: &'a str) -> Self {
        Self {
            text,
            directives: parse_directives(text),
        }
    }

    /// The stylesheet the directive spans point into.
    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Directives of a single kind, in document order.
    pub fn directives_of(&self, kind: DirectiveKind) -> impl Iterator<Item = &Directive> + '_ {
        self.directives.iter().filter(move |d| d.kind == kind)
    }

    /// Offset at which a new `@import` statement belongs.
    ///
    /// After the last existing import; failing that, after the
    /// highest-priority directive (the leftmost one on ties); failing that,
    /// at the start of the document.
    pub fn import_insertion_point(&self) -> usize {
        if let Some(end) = self
            .directives_of(DirectiveKind::Import)
            .map(|d| d.span.end)
            .max()
        {
            return end;
        }

        self.directives
            .iter()
            .min_by_key(|d| d.kind.priority())
            .map(|d| d.span.end)
            .unwrap_or(0)
    }
}
