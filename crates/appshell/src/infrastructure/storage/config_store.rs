//! YAML-backed per-user configuration store.
//!
//! [`ConfigStore`] owns the configuration document on disk and exposes the
//! active user's section.  The default location is the platform config
//! directory:
//! - Windows:  `%APPDATA%\appshell\app_config.yaml`
//! - Linux:    `~/.config/appshell/app_config.yaml`
//! - macOS:    `~/Library/Application Support/appshell/app_config.yaml`
//!
//! # Lifecycle (for beginners)
//!
//! ```text
//! ConfigStore::open(path, user)
//!  ├─ file missing        → starter document with a "DEFAULT" section
//!  ├─ no section for user → starter section appended for the user
//!  └─ either of the above → one write to disk
//!                            (an existing file is left alone for "DEFAULT")
//!
//! set_field / add_recent_file / ...   in memory only
//! save()                              whole document, atomically
//! ```
//!
//! A store whose user is `"DEFAULT"` never saves: that section is shared by
//! every login whose name could not be determined, so none of them may claim
//! it.
//!
//! # Atomic writes
//!
//! `save()` writes the YAML to a temporary file in the target's directory and
//! renames it over the target.  A crash or a full disk mid-write leaves the
//! previous file intact.

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use appshell_core::{
    ConfigDocument, DocumentError, FieldName, FieldValue, RecentFiles, SettingsError, UserId,
    UserSettings,
};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

use crate::application::SettingsStore;
use crate::infrastructure::theming::{ThemeError, ThemeLibrary};

/// Directory under the platform config directory.
pub const APP_DIR_NAME: &str = "appshell";
/// File name of the configuration document.
pub const CONFIG_FILE_NAME: &str = "app_config.yaml";

/// Error type for configuration store operations.
#[derive(Debug, Error)]
pub enum ConfigStoreError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// The configuration file exists but is not a valid document.
    #[error("cannot load configuration from {path}: {source}")]
    DocumentLoad {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be rendered as YAML.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[source] DocumentError),

    /// A field access was rejected.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Stylesheet resolution failed.
    #[error(transparent)]
    Theme(#[from] ThemeError),
}

/// Path of the configuration file in the platform config directory.
///
/// # Errors
///
/// Returns [`ConfigStoreError::NoPlatformConfigDir`] when the platform config
/// directory cannot be determined from the environment.
pub fn default_config_path() -> Result<PathBuf, ConfigStoreError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or(ConfigStoreError::NoPlatformConfigDir)
}

/// The configuration document plus the active user's section.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    user: UserId,
    /// Every section as loaded; the active one may be stale until synced.
    document: ConfigDocument,
    /// Working copy of the active user's section.
    settings: UserSettings,
}

impl ConfigStore {
    /// Loads the document at `path` for `user`, creating what is missing.
    ///
    /// # Errors
    ///
    /// - [`ConfigStoreError::DocumentLoad`] if the file exists but cannot be
    ///   parsed.
    /// - [`ConfigStoreError::Io`] if the file cannot be read, or if the first
    ///   run write fails.
    pub fn open(path: impl Into<PathBuf>, user: UserId) -> Result<Self, ConfigStoreError> {
        let path = path.into();

        let (mut document, created) = match std::fs::read_to_string(&path) {
            Ok(content) => {
                let document = ConfigDocument::from_yaml(&content).map_err(|source| {
                    ConfigStoreError::DocumentLoad {
                        path: path.clone(),
                        source,
                    }
                })?;
                (document, false)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("no configuration at {}; creating it", path.display());
                (ConfigDocument::starter(), true)
            }
            Err(source) => return Err(ConfigStoreError::Io { path, source }),
        };

        let added = document.ensure_section(&user);
        if added {
            info!("adding starter settings for user {user}");
        }
        let settings = document.section(&user).cloned().unwrap_or_default();

        let store = Self {
            path,
            user,
            document,
            settings,
        };
        // An existing file is never rewritten on behalf of "DEFAULT".
        if created || (added && !store.user.is_sentinel()) {
            write_document(&store.path, &store.document)?;
        }
        debug!(
            "configuration loaded from {} for user {}",
            store.path.display(),
            store.user
        );
        Ok(store)
    }

    /// Loads the document at the platform default path.
    ///
    /// # Errors
    ///
    /// [`ConfigStoreError::NoPlatformConfigDir`] plus everything
    /// [`ConfigStore::open`] returns.
    pub fn open_default(user: UserId) -> Result<Self, ConfigStoreError> {
        Self::open(default_config_path()?, user)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn user(&self) -> &UserId {
        &self.user
    }

    /// The active user's section.
    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    /// Snapshot of the whole document including unsaved changes.
    pub fn document(&self) -> ConfigDocument {
        let mut document = self.document.clone();
        document.put_section(&self.user, self.settings.clone());
        document
    }

    // ── Name-based access ─────────────────────────────────────────────────────

    /// Returns the named field of the active section.
    ///
    /// # Errors
    ///
    /// [`SettingsError::FieldNotFound`] for a name that is not a settings field.
    pub fn get_field(&self, name: &str) -> Result<FieldValue, SettingsError> {
        let field: FieldName = name.parse()?;
        Ok(self.settings.get(field))
    }

    /// Sets the named field in memory.
    ///
    /// # Errors
    ///
    /// [`SettingsError::FieldNotFound`], [`SettingsError::FieldTypeMismatch`]
    /// or [`SettingsError::InvalidValue`]; the section is unchanged on error.
    pub fn set_field(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), SettingsError> {
        let field: FieldName = name.parse()?;
        self.settings.set(field, value.into())
    }

    /// Sets `names[i]` to `values[i]` in memory, all or nothing.
    ///
    /// # Errors
    ///
    /// [`SettingsError::ArityMismatch`] when the lengths differ, otherwise the
    /// first error [`ConfigStore::set_field`] would return.
    pub fn set_fields<S: AsRef<str>>(
        &mut self,
        names: &[S],
        values: Vec<FieldValue>,
    ) -> Result<(), SettingsError> {
        self.settings.set_many(names, values)
    }

    // ── Typed access ──────────────────────────────────────────────────────────

    pub fn theme_filename(&self) -> &str {
        self.settings.theme_filename()
    }

    pub fn set_theme_filename(&mut self, filename: impl Into<String>) {
        self.settings.set_theme_filename(filename);
    }

    pub fn window_restore(&self) -> bool {
        self.settings.window_restore()
    }

    pub fn set_window_restore(&mut self, restore: bool) {
        self.settings.set_window_restore(restore);
    }

    pub fn window_position(&self) -> (i32, i32) {
        self.settings.window_position()
    }

    pub fn set_window_position(&mut self, x: i32, y: i32) {
        self.settings.set_window_position(x, y);
    }

    pub fn window_size(&self) -> (i32, i32) {
        self.settings.window_size()
    }

    pub fn set_window_size(&mut self, width: i32, height: i32) {
        self.settings.set_window_size(width, height);
    }

    pub fn num_recents_to_show(&self) -> u32 {
        self.settings.num_recents_to_show()
    }

    /// # Errors
    ///
    /// [`SettingsError::InvalidValue`] above the maximum of 30.
    pub fn set_num_recents_to_show(&mut self, count: u32) -> Result<(), SettingsError> {
        self.settings.set_num_recents_to_show(count)
    }

    // ── Recent files ──────────────────────────────────────────────────────────

    pub fn recent_files(&self) -> &RecentFiles {
        self.settings.recent_files()
    }

    /// Moves `path` to the front of the recent-files list, adding it if new.
    pub fn add_recent_file(&mut self, path: impl AsRef<str>) {
        self.settings.add_recent_file(path.as_ref());
    }

    pub fn clear_recent_files(&mut self) {
        self.settings.clear_recent_files();
    }

    // ── Persistence ───────────────────────────────────────────────────────────

    /// Writes the whole document to disk.  Does nothing for `"DEFAULT"`.
    ///
    /// # Errors
    ///
    /// [`ConfigStoreError::Io`] for file-system failures or
    /// [`ConfigStoreError::Serialize`] if serialisation fails.  The previous
    /// file content is kept on error.
    pub fn save(&mut self) -> Result<(), ConfigStoreError> {
        if self.user.is_sentinel() {
            debug!("active user is {}; not saving", self.user);
            return Ok(());
        }
        self.document.put_section(&self.user, self.settings.clone());
        write_document(&self.path, &self.document)?;
        debug!("configuration saved to {}", self.path.display());
        Ok(())
    }

    // ── Stylesheet ────────────────────────────────────────────────────────────

    /// Builds the stylesheet for `theme_filename`, or the configured theme.
    ///
    /// # Errors
    ///
    /// [`ConfigStoreError::Theme`] wrapping the failure from
    /// [`ThemeLibrary::resolve`].
    pub fn resolve_stylesheet(
        &self,
        themes: &ThemeLibrary,
        theme_filename: Option<&str>,
    ) -> Result<String, ConfigStoreError> {
        let theme = theme_filename.unwrap_or_else(|| self.theme_filename());
        Ok(themes.resolve(theme)?)
    }
}

impl fmt::Display for ConfigStore {
    /// Pretty-prints the whole document as YAML.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.document(), f)
    }
}

impl SettingsStore for ConfigStore {
    type Error = ConfigStoreError;

    fn settings(&self) -> &UserSettings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut UserSettings {
        &mut self.settings
    }

    fn save(&mut self) -> Result<(), ConfigStoreError> {
        ConfigStore::save(self)
    }
}

/// Atomically replaces `path` with the YAML rendering of `document`.
fn write_document(path: &Path, document: &ConfigDocument) -> Result<(), ConfigStoreError> {
    let content = document.to_yaml().map_err(ConfigStoreError::Serialize)?;
    replace_file(path, |file| file.write_all(content.as_bytes()))
}

/// Fills a temporary file next to `path` with `fill`, then renames it over
/// `path`.  The target keeps its permissions; on error it is untouched.
fn replace_file<F>(path: &Path, fill: F) -> Result<(), ConfigStoreError>
where
    F: FnOnce(&mut File) -> std::io::Result<()>,
{
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|source| ConfigStoreError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let io_err = |source: std::io::Error| ConfigStoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut temp = NamedTempFile::new_in(dir).map_err(io_err)?;
    fill(temp.as_file_mut()).map_err(io_err)?;
    temp.as_file().sync_all().map_err(io_err)?;
    if let Ok(existing) = std::fs::metadata(path) {
        temp.as_file()
            .set_permissions(existing.permissions())
            .map_err(io_err)?;
    }
    temp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
