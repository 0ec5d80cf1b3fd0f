//! Preferences dialog use case.
//!
//! The dialog collects edits as the user makes them and applies them only
//! when the user presses Save.  Cancelling simply drops the
//! [`PreferenceChanges`].
//!
//! The theme is special: the dialog previews a newly picked theme on itself,
//! and on Save the main window must restyle only if the theme actually
//! differs from the one stored before the dialog opened.

use appshell_core::{SettingsError, UserSettings};
use thiserror::Error;
use tracing::info;

use super::SettingsStore;

/// Error type for applying preferences.
#[derive(Debug, Error)]
pub enum PreferencesError<E: std::error::Error + 'static> {
    /// A pending value was rejected; nothing was applied.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// The values were applied in memory but could not be saved.
    #[error("failed to save preferences: {0}")]
    Save(#[source] E),
}

/// Pending edits from the preferences dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceChanges {
    theme_filename: Option<String>,
    window_restore: Option<bool>,
    num_recents_to_show: Option<u32>,
}

impl PreferenceChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_theme_filename(&mut self, filename: impl Into<String>) -> &mut Self {
        self.theme_filename = Some(filename.into());
        self
    }

    pub fn set_window_restore(&mut self, restore: bool) -> &mut Self {
        self.window_restore = Some(restore);
        self
    }

    pub fn set_num_recents_to_show(&mut self, count: u32) -> &mut Self {
        self.num_recents_to_show = Some(count);
        self
    }

    /// The theme to preview, if one was picked.
    pub fn theme_filename(&self) -> Option<&str> {
        self.theme_filename.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Returns `true` if applying would change the theme stored in `current`.
    pub fn changes_theme(&self, current: &UserSettings) -> bool {
        self.theme_filename
            .as_deref()
            .is_some_and(|theme| theme != current.theme_filename())
    }

    /// Writes the pending edits to `store` and saves.
    ///
    /// Returns `true` when the theme changed, meaning the caller must restyle.
    /// Edits are validated together: if any is rejected, none is applied.
    ///
    /// # Errors
    ///
    /// - [`PreferencesError::Settings`] if a value is invalid.
    /// - [`PreferencesError::Save`] if the store cannot save.
    pub fn apply<S: SettingsStore>(self, store: &mut S) -> Result<bool, PreferencesError<S::Error>> {
        if self.is_empty() {
            return Ok(false);
        }
        let theme_changed = self.changes_theme(store.settings());

        let mut staged = store.settings().clone();
        if let Some(theme) = self.theme_filename {
            staged.set_theme_filename(theme);
        }
        if let Some(restore) = self.window_restore {
            staged.set_window_restore(restore);
        }
        if let Some(count) = self.num_recents_to_show {
            staged.set_num_recents_to_show(count)?;
        }
        *store.settings_mut() = staged;
        store.save().map_err(PreferencesError::Save)?;

        if theme_changed {
            info!("theme changed to {}", store.settings().theme_filename());
        }
        Ok(theme_changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::mock::MemoryStore;

    #[test]
    fn test_apply_reports_theme_change() {
        // Arrange
        let mut store = MemoryStore::new();
        let mut changes = PreferenceChanges::new();
        changes.set_theme_filename("colors_dark.qss");

        // Act
        let changed = changes.apply(&mut store).unwrap();

        // Assert
        assert!(changed);
        assert_eq!(store.settings().theme_filename(), "colors_dark.qss");
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn test_apply_same_theme_is_not_a_change() {
        let mut store = MemoryStore::new();
        let mut changes = PreferenceChanges::new();
        changes
            .set_theme_filename("colors_light.qss")
            .set_window_restore(true);

        let changed = changes.apply(&mut store).unwrap();

        assert!(!changed);
        assert!(store.settings().window_restore());
    }

    #[test]
    fn test_apply_lowering_recents_truncates() {
        // Arrange
        let mut store = MemoryStore::new();
        for path in ["/a.txt", "/b.txt", "/c.txt"] {
            store.settings_mut().add_recent_file(path);
        }
        let mut changes = PreferenceChanges::new();
        changes.set_num_recents_to_show(1);

        // Act
        changes.apply(&mut store).unwrap();

        // Assert
        assert_eq!(store.settings().recent_files().len(), 1);
        assert_eq!(store.settings().recent_files().get("c.txt"), Some("/c.txt"));
    }

    #[test]
    fn test_apply_invalid_value_changes_nothing() {
        // Arrange
        let mut store = MemoryStore::new();
        let mut changes = PreferenceChanges::new();
        changes
            .set_theme_filename("colors_dark.qss")
            .set_num_recents_to_show(31);

        // Act
        let result = changes.apply(&mut store);

        // Assert
        assert!(matches!(result, Err(PreferencesError::Settings(_))));
        assert_eq!(store.settings().theme_filename(), "colors_light.qss");
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn test_apply_nothing_does_not_save() {
        let mut store = MemoryStore::new();
        assert!(!PreferenceChanges::new().apply(&mut store).unwrap());
        assert_eq!(store.saves(), 0);
    }
}
