//! [`ThemeLibrary`]: stylesheet resolution against the resource tree.
//!
//! # Resolving a theme
//!
//! 1. Read the style template and the palette file `styles_dir/<theme>`.
//! 2. Parse the palette into ordered `(keyword, value)` pairs.
//! 3. For each palette keyword backed by an icon template, recolour the SVG,
//!    write it to the scratch directory as `<keyword>-in-use.svg` and bind the
//!    keyword to `url(<that file>)` instead of the raw colour.
//! 4. Substitute every bound keyword in the template.
//!
//! Template keywords the palette does not bind are left as they are and
//! logged at `warn` level.

use std::fs;
use std::path::{Path, PathBuf};

use appshell_core::theme::icons::{css_url, recolor, scratch_file_name};
use appshell_core::{Bindings, Palette, RenderedStyle, StyleTemplate};
use tracing::{debug, warn};

use super::{ResourceLayout, ThemeError};

/// Prefix shared by all palette file names.
const PALETTE_PREFIX: &str = "colors_";
/// Extension shared by the template and palette files.
const STYLE_EXTENSION: &str = "qss";
/// Suffix of every generated icon file.
const SCRATCH_SUFFIX: &str = "-in-use.svg";

/// A selectable theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeEntry {
    /// The palette's `@theme-name`, or `"Unknown"`.
    pub label: String,
    /// Palette file name, e.g. `colors_dark.qss`.
    pub filename: String,
}

/// Theme files under one resource root.
#[derive(Debug, Clone)]
pub struct ThemeLibrary {
    root: PathBuf,
    layout: ResourceLayout,
}

impl ThemeLibrary {
    /// Opens the resource root, reading `resources.toml` if present.
    ///
    /// # Errors
    ///
    /// See [`ResourceLayout::load`].
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, ThemeError> {
        let root = root.into();
        let layout = ResourceLayout::load(&root)?;
        Ok(Self::with_layout(root, layout))
    }

    pub fn with_layout(root: impl Into<PathBuf>, layout: ResourceLayout) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> &ResourceLayout {
        &self.layout
    }

    pub fn template_path(&self) -> PathBuf {
        self.root.join(&self.layout.template)
    }

    pub fn styles_dir(&self) -> PathBuf {
        self.root.join(&self.layout.styles_dir)
    }

    pub fn palette_path(&self, theme_filename: &str) -> PathBuf {
        self.styles_dir().join(theme_filename)
    }

    pub fn scratch_dir(&self) -> PathBuf {
        self.root.join(&self.layout.scratch_dir)
    }

    /// Builds the stylesheet for `theme_filename`.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::ThemeResource`] if the template, the palette, or an
    ///   icon template the palette colours is missing or unreadable.
    /// - [`ThemeError::Scratch`] if a recoloured icon cannot be written.
    pub fn resolve(&self, theme_filename: &str) -> Result<String, ThemeError> {
        let rendered = self.render(theme_filename)?;
        if !rendered.unresolved.is_empty() {
            warn!(
                "theme {theme_filename} leaves keywords unresolved: {}",
                rendered.unresolved.join(", ")
            );
        }
        Ok(rendered.css)
    }

    /// Like [`ThemeLibrary::resolve`] but also returns the unresolved keywords.
    ///
    /// # Errors
    ///
    /// Same as [`ThemeLibrary::resolve`].
    pub fn render(&self, theme_filename: &str) -> Result<RenderedStyle, ThemeError> {
        let template = StyleTemplate::new(read_resource(&self.template_path())?);
        let palette = Palette::parse(&read_resource(&self.palette_path(theme_filename))?);
        debug!(
            "resolving theme {theme_filename}: {} palette entries",
            palette.len()
        );

        let mut bindings = Bindings::from_palette(&palette);
        for (keyword, asset) in self.layout.icons.iter() {
            let Some(colour) = palette.get(keyword) else {
                continue;
            };
            let icon = self.write_icon(keyword, &self.root.join(asset), colour)?;
            bindings.rebind(keyword, css_url(&icon));
        }

        Ok(template.render(&bindings))
    }

    /// Lists the palettes in the styles directory, sorted by file name.
    ///
    /// # Errors
    ///
    /// [`ThemeError::ThemeResource`] if the styles directory or a palette
    /// cannot be read.
    pub fn list_themes(&self) -> Result<Vec<ThemeEntry>, ThemeError> {
        let dir = self.styles_dir();
        let entries = fs::read_dir(&dir).map_err(|source| ThemeError::ThemeResource {
            path: dir.clone(),
            source,
        })?;

        let mut themes = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ThemeError::ThemeResource {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();
            let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !is_palette_file(&path, filename) {
                continue;
            }
            let palette = Palette::parse(&read_resource(&path)?);
            themes.push(ThemeEntry {
                label: palette.label().to_string(),
                filename: filename.to_string(),
            });
        }
        themes.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(themes)
    }

    /// Deletes the generated icons.
    ///
    /// The scratch directory itself is removed when nothing else is left in
    /// it.  A missing directory is not an error.
    ///
    /// # Errors
    ///
    /// [`ThemeError::Scratch`] if a generated icon cannot be removed.
    pub fn clear_scratch(&self) -> Result<usize, ThemeError> {
        let dir = self.scratch_dir();
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(source) => return Err(ThemeError::Scratch { path: dir, source }),
        };

        let mut removed = 0;
        for entry in entries {
            let entry = entry.map_err(|source| ThemeError::Scratch {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();
            let generated = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(SCRATCH_SUFFIX));
            if !generated {
                continue;
            }
            fs::remove_file(&path).map_err(|source| ThemeError::Scratch {
                path: path.clone(),
                source,
            })?;
            removed += 1;
        }
        debug!("removed {removed} generated icon(s) from {}", dir.display());
        remove_if_empty(&dir);
        Ok(removed)
    }

    /// Writes the recoloured icon for `keyword` and returns its path.
    fn write_icon(&self, keyword: &str, asset: &Path, colour: &str) -> Result<PathBuf, ThemeError> {
        let svg = read_resource(asset)?;
        let dir = self.scratch_dir();
        fs::create_dir_all(&dir).map_err(|source| ThemeError::Scratch {
            path: dir.clone(),
            source,
        })?;
        let path = dir.join(scratch_file_name(keyword));
        fs::write(&path, recolor(&svg, keyword, colour)).map_err(|source| {
            ThemeError::Scratch {
                path: path.clone(),
                source,
            }
        })?;
        debug!("icon for {keyword} written to {}", path.display());
        Ok(path)
    }
}

/// Removes `dir` unless something other than generated icons is left in it.
fn remove_if_empty(dir: &Path) {
    let occupied = match fs::read_dir(dir) {
        Ok(mut entries) => entries.next().is_some(),
        Err(e) => {
            debug!("cannot list {}: {e}", dir.display());
            return;
        }
    };
    if occupied {
        debug!("keeping {}: other files remain", dir.display());
        return;
    }
    if let Err(e) = fs::remove_dir(dir) {
        debug!("cannot remove {}: {e}", dir.display());
    }
}

fn read_resource(path: &Path) -> Result<String, ThemeError> {
    fs::read_to_string(path).map_err(|source| ThemeError::ThemeResource {
        path: path.to_path_buf(),
        source,
    })
}

fn is_palette_file(path: &Path, filename: &str) -> bool {
    filename.starts_with(PALETTE_PREFIX)
        && path.extension().and_then(|e| e.to_str()) == Some(STYLE_EXTENSION)
        && path.is_file()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
