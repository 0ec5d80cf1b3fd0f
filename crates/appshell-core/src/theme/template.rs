//! Keyword substitution for style templates.
//!
//! A style template is plain text containing literal `@keyword` tokens.
//! [`StyleTemplate::render`] replaces each token with its binding wherever it
//! occurs: inside a declaration, mid-line, or spanning nothing but itself.
//!
//! # Matching rules
//!
//! - **Single pass.**  The template is scanned once from left to right and
//!   substituted values are copied to the output without being scanned again,
//!   so a value that happens to contain `@` is never substituted itself.
//! - **Longest keyword wins.**  At each `@`, bindings are tried longest first,
//!   so `@bg-alt` is replaced as a whole even when `@bg` is also bound.
//! - **Unbound tokens stay.**  A token with no binding is copied verbatim and
//!   reported in [`RenderedStyle::unresolved`].  Keywords that are bound but
//!   never used are harmless.

use indexmap::IndexMap;

use super::palette::Palette;

/// Keyword → replacement text.
///
/// The first binding for a keyword wins; later duplicates passed to
/// [`Bindings::bind`] are ignored.  [`Bindings::rebind`] overrides explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: IndexMap<String, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds every palette keyword to its raw value.
    pub fn from_palette(palette: &Palette) -> Self {
        let mut bindings = Self::new();
        for (keyword, value) in palette.entries() {
            bindings.bind(keyword, value);
        }
        bindings
    }

    /// Binds `keyword` unless it is already bound.
    pub fn bind(&mut self, keyword: &str, value: &str) {
        self.values
            .entry(keyword.to_string())
            .or_insert_with(|| value.to_string());
    }

    /// Binds `keyword`, replacing any existing binding.
    pub fn rebind(&mut self, keyword: &str, value: impl Into<String>) {
        self.values.insert(keyword.to_string(), value.into());
    }

    pub fn get(&self, keyword: &str) -> Option<&str> {
        self.values.get(keyword).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bindings sorted by keyword length, longest first.
    fn longest_first(&self) -> Vec<(&str, &str)> {
        let mut ordered: Vec<_> = self
            .values
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        ordered.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        ordered
    }
}

/// Result of rendering a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedStyle {
    /// The substituted stylesheet text.
    pub css: String,
    /// Tokens left in `css` because nothing was bound to them, in order of
    /// first appearance, without duplicates.
    pub unresolved: Vec<String>,
}

/// A keyword-tagged stylesheet template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTemplate {
    text: String,
}

impl StyleTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Substitutes every bound keyword token.
    pub fn render(&self, bindings: &Bindings) -> RenderedStyle {
        let keywords = bindings.longest_first();
        let mut css = String::with_capacity(self.text.len());
        let mut unresolved: Vec<String> = Vec::new();
        let mut rest = self.text.as_str();

        while let Some(at) = rest.find('@') {
            css.push_str(&rest[..at]);
            rest = &rest[at..];

            if let Some((keyword, value)) = keywords.iter().find(|(k, _)| rest.starts_with(k)) {
                css.push_str(value);
                rest = &rest[keyword.len()..];
                continue;
            }

            let token_len = 1 + rest[1..]
                .find(|c: char| !is_token_char(c))
                .unwrap_or(rest.len() - 1);
            let token = &rest[..token_len];
            if token_len > 1 && !unresolved.iter().any(|u| u == token) {
                unresolved.push(token.to_string());
            }
            css.push_str(token);
            rest = &rest[token_len..];
        }
        css.push_str(rest);

        RenderedStyle { css, unresolved }
    }
}

/// Characters that may follow `@` in a keyword token.
fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

// ── Tests ─────────────────────────────────────────────────────────────────────
