//! Colour-palette file parsing.
//!
//! A palette is plain text with one `@keyword = value` pair per line:
//!
//! ```text
//! @theme-name = Solarized Dark
//! @bg = #002b36
//! @fg=#839496
//! ```
//!
//! Blank lines are ignored.  Each remaining line is split on the *first* `=`
//! and both halves are trimmed, so values may themselves contain `=`.

use tracing::warn;

/// Keyword whose value is the human-readable theme label.
pub const THEME_NAME_KEYWORD: &str = "@theme-name";

/// Label used for palettes without a `@theme-name` entry.
pub const UNKNOWN_THEME_LABEL: &str = "Unknown";

/// Ordered `(keyword, value)` pairs from a palette file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<(String, String)>,
}

impl Palette {
    /// Parses palette text.
    ///
    /// Lines without `=` and lines whose keyword does not start with `@` are
    /// skipped with a warning; they cannot be substituted into a template.
    pub fn parse(text: &str) -> Self {
        let mut entries = Vec::new();
        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Some((keyword, value)) = line.split_once('=') else {
                warn!("palette line {}: no `=` in `{line}`; skipped", index + 1);
                continue;
            };
            let keyword = keyword.trim();
            if !keyword.starts_with('@') || keyword.len() == 1 {
                warn!(
                    "palette line {}: keyword `{keyword}` must start with `@`; skipped",
                    index + 1
                );
                continue;
            }
            entries.push((keyword.to_string(), value.trim().to_string()));
        }
        Self { entries }
    }

    /// Pairs in file order, duplicates included.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Value of the first entry for `keyword`.
    pub fn get(&self, keyword: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == keyword)
            .map(|(_, v)| v.as_str())
    }

    /// The `@theme-name` value, if present.
    pub fn theme_name(&self) -> Option<&str> {
        self.get(THEME_NAME_KEYWORD)
    }

    /// The `@theme-name` value, or `"Unknown"`.
    pub fn label(&self) -> &str {
        self.theme_name().unwrap_or(UNKNOWN_THEME_LABEL)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
