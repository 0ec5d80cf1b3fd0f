//! Theme resources on disk.
//!
//! The pure templating rules live in `appshell_core::theme`.  This module is
//! the file-system side:
//!
//! - **`layout`** – where the style template, palette files, and icon
//!   templates live under the resource root, optionally overridden by a
//!   `resources.toml` file.
//! - **`library`** – [`ThemeLibrary`]: reads the files, writes recoloured
//!   icons to the scratch directory, lists available themes, and cleans up
//!   generated icons at shutdown.
//!
//! # Resource tree (for beginners)
//!
//! ```text
//! resources/
//!   resources.toml                 optional, see ResourceLayout
//!   styles/
//!     style_template.qss           @keyword-tagged stylesheet
//!     colors_light.qss             one palette per theme
//!     colors_dark.qss
//!   icons/
//!     plus-symbol-template.svg     SVGs tagged with the same @keywords
//!     minus-symbol-template.svg
//!     down-arrow-template.svg
//! ```

use std::path::PathBuf;

use thiserror::Error;

pub mod layout;
pub mod library;

pub use layout::ResourceLayout;
pub use library::{ThemeEntry, ThemeLibrary};

/// Error type for theme resource operations.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A template, palette, icon, or styles directory could not be read.
    #[error("cannot read theme resource {path}: {source}")]
    ThemeResource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A generated icon could not be written to or removed from the scratch
    /// directory.
    #[error("cannot update scratch file {path}: {source}")]
    Scratch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `resources.toml` exists but is not a valid layout.
    #[error("invalid resource layout in {path}: {source}")]
    Layout {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
