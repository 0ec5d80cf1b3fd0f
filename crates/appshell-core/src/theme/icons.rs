//! Keyword-coloured SVG icons.
//!
//! Some palette keywords colour an icon rather than a plain property.  For
//! those, the stylesheet needs `image: url(...)` pointing at an SVG whose fill
//! is the palette colour.  The SVG asset is itself a template containing the
//! keyword token; it is recoloured per theme and written to a scratch file.
//!
//! [`IconTemplates`] is the keyword → asset table.  Paths are relative to the
//! resource directory and the table can be overridden from configuration:
//!
//! ```toml
//! [icons]
//! "@button-plus-icon" = "icons/plus-symbol-template.svg"
//! ```

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Keyword → SVG template asset path, relative to the resource directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconTemplates {
    assets: IndexMap<String, PathBuf>,
}

impl Default for IconTemplates {
    /// The icons shipped with the application.
    fn default() -> Self {
        [
            ("@button-plus-icon", "icons/plus-symbol-template.svg"),
            ("@button-minus-icon", "icons/minus-symbol-template.svg"),
            ("@combobox-down-arrow", "icons/down-arrow-template.svg"),
        ]
        .into_iter()
        .collect()
    }
}

impl<K: Into<String>, P: Into<PathBuf>> FromIterator<(K, P)> for IconTemplates {
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        Self {
            assets: iter
                .into_iter()
                .map(|(k, p)| (k.into(), p.into()))
                .collect(),
        }
    }
}

impl IconTemplates {
    /// A table with no icon keywords.
    pub fn empty() -> Self {
        Self {
            assets: IndexMap::new(),
        }
    }

    pub fn get(&self, keyword: &str) -> Option<&Path> {
        self.assets.get(keyword).map(PathBuf::as_path)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.assets.contains_key(keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.assets.iter().map(|(k, p)| (k.as_str(), p.as_path()))
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// Replaces every occurrence of `keyword` in the SVG text with `colour`.
pub fn recolor(svg: &str, keyword: &str, colour: &str) -> String {
    svg.replace(keyword, colour)
}

/// File name of the recoloured icon for `keyword`, e.g.
/// `@button-plus-icon` → `button-plus-icon-in-use.svg`.
pub fn scratch_file_name(keyword: &str) -> String {
    format!("{}-in-use.svg", keyword.trim_start_matches('@'))
}

/// Stylesheet reference to an icon file.
///
/// Backslashes become forward slashes; the stylesheet parser only accepts the
/// latter.
pub fn css_url(path: &Path) -> String {
    format!("url({})", path.to_string_lossy().replace('\\', "/"))
}
