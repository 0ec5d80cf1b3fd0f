//! Application layer use cases for the shell.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure rules in `appshell_core`) and the infrastructure (files, OS).
//!
//! Use cases in this layer:
//!
//! - **Orchestrate** domain objects to fulfil a user goal (e.g., "open the
//!   main window where the user left it").
//! - **Depend on abstractions** such as [`SettingsStore`] rather than on the
//!   YAML file, so they can be tested against [`mock::MemoryStore`].
//! - **Contain no OS calls and no file system access**.
//!
//! # Sub-modules
//!
//! - **`window_geometry`** – Where the main window opens, and remembering
//!   where it was when it closes.
//! - **`preferences`**     – Pending edits from the preferences dialog and
//!   applying them in one step.
//! - **`recent_menu`**     – The "Open Recent" menu model.
//! - **`about`**           – Application metadata for the About dialog.

use appshell_core::UserSettings;

pub mod about;
pub mod mock;
pub mod preferences;
pub mod recent_menu;
pub mod window_geometry;

/// Persistent storage for the active user's settings.
///
/// Implemented by `infrastructure::storage::config_store::ConfigStore`.
pub trait SettingsStore {
    /// Error returned by [`SettingsStore::save`].
    type Error: std::error::Error + 'static;

    /// The active user's settings.
    fn settings(&self) -> &UserSettings;

    /// Mutable access to the active user's settings.  Changes stay in memory
    /// until [`SettingsStore::save`].
    fn settings_mut(&mut self) -> &mut UserSettings;

    /// Persists the settings.
    ///
    /// # Errors
    ///
    /// Implementation-specific storage failure.
    fn save(&mut self) -> Result<(), Self::Error>;
}
