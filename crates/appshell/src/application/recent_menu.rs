//! "Open Recent" menu model.
//!
//! One entry per recent file, newest first, labelled with the file name and
//! showing the full path as its tooltip.  The whole submenu is hidden while
//! the list is empty.  The trailing "Clear List..." action maps to
//! [`clear_recent_files`].

use appshell_core::RecentFiles;

use super::SettingsStore;

/// Label of the action that empties the list.
pub const CLEAR_ACTION_LABEL: &str = "Clear List...";

/// One "Open Recent" entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentMenuEntry {
    pub label: String,
    pub tooltip: String,
}

/// Snapshot of the "Open Recent" submenu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentMenu {
    entries: Vec<RecentMenuEntry>,
}

impl RecentMenu {
    pub fn from_recent_files(files: &RecentFiles) -> Self {
        Self {
            entries: files
                .iter()
                .map(|(name, path)| RecentMenuEntry {
                    label: name.to_string(),
                    tooltip: path.to_string(),
                })
                .collect(),
        }
    }

    /// Builds the menu for the store's active user.
    pub fn for_store<S: SettingsStore>(store: &S) -> Self {
        Self::from_recent_files(store.settings().recent_files())
    }

    pub fn entries(&self) -> &[RecentMenuEntry] {
        &self.entries
    }

    /// Whether the submenu should be shown at all.
    pub fn is_visible(&self) -> bool {
        !self.entries.is_empty()
    }
}

/// Records that `path` was opened.  Not saved until the store saves.
pub fn open_file<S: SettingsStore>(store: &mut S, path: &str) {
    store.settings_mut().add_recent_file(path);
}

/// Handles "Clear List...".  Not saved until the store saves.
pub fn clear_recent_files<S: SettingsStore>(store: &mut S) {
    store.settings_mut().clear_recent_files();
}
