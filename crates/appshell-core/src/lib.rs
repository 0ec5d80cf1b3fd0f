//! # appshell-core
//!
//! Shared library for AppShell containing the per-user settings model, the
//! recent-files policy, and the stylesheet templating engine.
//!
//! It has zero dependencies on the file system, OS identity APIs, or a GUI
//! toolkit.  Everything here is plain data plus the rules that govern it, so
//! it can be unit-tested on any platform without setup.
//!
//! # Architecture overview (for beginners)
//!
//! AppShell is the skeleton of a desktop application: a main window, a
//! preferences dialog, and a theme picker.  The GUI itself is presentation
//! glue; what is worth getting right is the data underneath it:
//!
//! - **`domain`** – The configuration document.  One [`UserSettings`] record
//!   per user, a bounded most-recently-used [`RecentFiles`] list, and the rule
//!   for where the main window opens.
//!
//! - **`theme`** – How a stylesheet is built.  A style template contains
//!   `@keyword` tokens; a palette file binds each keyword to a colour; icon
//!   templates are SVGs using the same tokens.  This module parses palettes
//!   and renders templates.  Reading and writing the actual files is the job
//!   of the `appshell` crate.

pub mod domain;
pub mod theme;

// Re-export the most-used types at the crate root so callers can write
// `appshell_core::UserSettings` instead of `appshell_core::domain::settings::UserSettings`.
pub use domain::document::{ConfigDocument, DocumentError};
pub use domain::geometry::{ScreenSize, WindowGeometry};
pub use domain::recent_files::RecentFiles;
pub use domain::settings::{FieldName, FieldValue, SettingsError, UserSettings};
pub use domain::user::UserId;
pub use theme::icons::IconTemplates;
pub use theme::palette::Palette;
pub use theme::template::{Bindings, RenderedStyle, StyleTemplate};
