//! Domain entities for AppShell.
//!
//! This module contains pure business logic with no infrastructure dependencies.
//!
//! # What lives here (for beginners)
//!
//! - **`user`** – the identifier that selects a section of the configuration
//!   document, including the `"DEFAULT"` sentinel used when the real login
//!   name cannot be determined.
//! - **`settings`** – the [`settings::UserSettings`] record, its starter
//!   defaults, and name-based field access for preference dialogs.
//! - **`recent_files`** – the bounded most-recently-used list.
//! - **`document`** – the whole YAML document: an ordered map of user
//!   identifier to settings record.
//! - **`geometry`** – where the main window opens on launch.
//!
//! Code in outer layers (storage, theming, the CLI) depends on the domain,
//! but the domain never depends on them.

pub mod document;
pub mod geometry;
pub mod recent_files;
pub mod settings;
pub mod user;
