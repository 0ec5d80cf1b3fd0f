//! In-memory settings store for unit testing.
//!
//! Lets use cases be exercised without a configuration file on disk.

use std::convert::Infallible;

use appshell_core::UserSettings;

use super::SettingsStore;

/// A [`SettingsStore`] that keeps settings in memory and counts saves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    settings: UserSettings,
    saves: usize,
}

impl MemoryStore {
    /// Creates a store holding the starter config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `settings`.
    pub fn with_settings(settings: UserSettings) -> Self {
        Self { settings, saves: 0 }
    }

    /// Returns the number of times [`SettingsStore::save`] was called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl SettingsStore for MemoryStore {
    type Error = Infallible;

    fn settings(&self) -> &UserSettings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut UserSettings {
        &mut self.settings
    }

    fn save(&mut self) -> Result<(), Infallible> {
        self.saves += 1;
        Ok(())
    }
}
