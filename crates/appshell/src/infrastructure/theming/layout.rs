//! Resource layout: where theme files live.
//!
//! Every path is relative to the resource root unless it is absolute.  A
//! `resources.toml` in the root may override any of them:
//!
//! ```toml
//! template = "qss/main_template.qss"
//! styles_dir = "qss"
//! scratch_dir = "/tmp/my-shell-icons"
//!
//! [icons]
//! "@button-plus-icon" = "icons/plus-symbol-template.svg"
//! "@close-icon" = "icons/close-template.svg"
//! ```
//!
//! Fields left out keep their defaults.  An `[icons]` table replaces the
//! default icon table as a whole.

use std::path::{Path, PathBuf};

use appshell_core::IconTemplates;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ThemeError;

/// Name of the optional layout file in the resource root.
pub const RESOURCES_FILE_NAME: &str = "resources.toml";

/// Locations of the theme resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceLayout {
    /// The `@keyword`-tagged style template.
    pub template: PathBuf,
    /// Directory holding the `colors_*.qss` palette files.
    pub styles_dir: PathBuf,
    /// Directory for recoloured icons.  Scoped to this process by default.
    pub scratch_dir: PathBuf,
    /// Icon keyword → SVG template.
    pub icons: IconTemplates,
}

impl Default for ResourceLayout {
    fn default() -> Self {
        Self {
            template: PathBuf::from("styles").join("style_template.qss"),
            styles_dir: PathBuf::from("styles"),
            scratch_dir: default_scratch_dir(),
            icons: IconTemplates::default(),
        }
    }
}

impl ResourceLayout {
    /// Loads the layout for the resource root `root`.
    ///
    /// Returns the default layout when `root/resources.toml` does not exist.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::ThemeResource`] if the file exists but cannot be read.
    /// - [`ThemeError::Layout`] if the TOML is malformed.
    pub fn load(root: &Path) -> Result<Self, ThemeError> {
        let path = root.join(RESOURCES_FILE_NAME);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let layout: ResourceLayout = toml::from_str(&content)
                    .map_err(|source| ThemeError::Layout {
                        path: path.clone(),
                        source,
                    })?;
                debug!("resource layout loaded from {}", path.display());
                Ok(layout)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ThemeError::ThemeResource { path, source }),
        }
    }
}

/// `<system temp>/appshell-<pid>`.
fn default_scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("appshell-{}", std::process::id()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
