//! Per-user settings record and name-based field access.
//!
//! [`UserSettings`] is one section of the configuration document.  Its
//! [`Default`] is the *starter config*: the values a brand-new user gets and
//! the values used to backfill any field an older file does not mention.
//!
//! # Backfill by overlay (for beginners)
//!
//! The struct is annotated with `#[serde(default)]`, so when a section in the
//! YAML file is missing a field, serde takes that field from
//! `UserSettings::default()` while parsing.  Backfilling therefore happens
//! exactly once, at load time, and every record in memory is complete.  On the
//! next save the backfilled fields are written out explicitly.
//!
//! # Name-based access
//!
//! Preference dialogs and the CLI address fields by name (`"theme_filename"`).
//! [`FieldName`] is the closed set of valid names and [`FieldValue`] the
//! dynamically-typed value passed through [`UserSettings::get`] and
//! [`UserSettings::set`].  Unknown names fail with
//! [`SettingsError::FieldNotFound`] instead of silently creating keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use super::recent_files::RecentFiles;

/// Upper bound for `num_recents_to_show`.
pub const MAX_RECENTS: u32 = 30;

/// Errors raised by field access on a settings record.
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    /// The name is not one of the starter-config fields.
    #[error("unknown settings field: {0}")]
    FieldNotFound(String),

    /// A batched set was given different numbers of names and values.
    #[error("cannot set {names} field(s) from {values} value(s)")]
    ArityMismatch { names: usize, values: usize },

    /// The value's type does not match the field's type.
    #[error("field `{field}` expects {expected}, got {found}")]
    FieldTypeMismatch {
        field: FieldName,
        expected: &'static str,
        found: &'static str,
    },

    /// The value has the right type but is not acceptable for the field.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: FieldName, reason: String },
}

/// Names of every field in a settings record, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    ThemeFilename,
    WindowRestore,
    WindowX,
    WindowY,
    WindowWidth,
    WindowHeight,
    RecentFiles,
    NumRecentsToShow,
}

impl FieldName {
    pub const ALL: [FieldName; 8] = [
        FieldName::ThemeFilename,
        FieldName::WindowRestore,
        FieldName::WindowX,
        FieldName::WindowY,
        FieldName::WindowWidth,
        FieldName::WindowHeight,
        FieldName::RecentFiles,
        FieldName::NumRecentsToShow,
    ];

    /// Key used in the YAML document.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::ThemeFilename => "theme_filename",
            FieldName::WindowRestore => "window_restore",
            FieldName::WindowX => "window_x",
            FieldName::WindowY => "window_y",
            FieldName::WindowWidth => "window_width",
            FieldName::WindowHeight => "window_height",
            FieldName::RecentFiles => "recent_files",
            FieldName::NumRecentsToShow => "num_recents_to_show",
        }
    }

    /// Human-readable type of the field's values.
    fn kind(self) -> &'static str {
        match self {
            FieldName::ThemeFilename => "text",
            FieldName::WindowRestore => "flag",
            FieldName::RecentFiles => "recent-files map",
            FieldName::WindowX
            | FieldName::WindowY
            | FieldName::WindowWidth
            | FieldName::WindowHeight
            | FieldName::NumRecentsToShow => "integer",
        }
    }

    /// Parses command-line text into a value of this field's type.
    ///
    /// `recent_files` accepts a YAML/flow mapping such as `{a.txt: /a.txt}`.
    pub fn parse_value(self, raw: &str) -> Result<FieldValue, SettingsError> {
        let invalid = |reason: String| SettingsError::InvalidValue {
            field: self,
            reason,
        };
        match self {
            FieldName::ThemeFilename => Ok(FieldValue::Text(raw.to_string())),
            FieldName::WindowRestore => raw
                .trim()
                .parse::<bool>()
                .map(FieldValue::Flag)
                .map_err(|e| invalid(e.to_string())),
            FieldName::RecentFiles => serde_yaml::from_str::<RecentFiles>(raw)
                .map(FieldValue::Recents)
                .map_err(|e| invalid(e.to_string())),
            _ => raw
                .trim()
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|e| invalid(e.to_string())),
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| SettingsError::FieldNotFound(s.to_string()))
    }
}

/// A settings value of any field type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Integer(i64),
    Recents(RecentFiles),
}

impl FieldValue {
    fn kind(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Flag(_) => "flag",
            FieldValue::Integer(_) => "integer",
            FieldValue::Recents(_) => "recent-files map",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Flag(b) => write!(f, "{b}"),
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Recents(list) => {
                for (i, (name, path)) in list.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{name}: {path}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Integer(n.into())
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Integer(n.into())
    }
}

impl From<RecentFiles> for FieldValue {
    fn from(list: RecentFiles) -> Self {
        FieldValue::Recents(list)
    }
}

/// One user's section of the configuration document.
///
/// Fields are private so that the recent-files cap cannot be bypassed: every
/// mutation goes through a method that re-applies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    theme_filename: String,
    window_restore: bool,
    window_x: i32,
    window_y: i32,
    window_width: i32,
    window_height: i32,
    recent_files: RecentFiles,
    num_recents_to_show: u32,
}

impl Default for UserSettings {
    /// The starter config.
    ///
    /// | Field               | Default             |
    /// |---------------------|---------------------|
    /// | theme_filename      | `colors_light.qss`  |
    /// | window_restore      | `false`             |
    /// | window_x, window_y  | `100`, `100`        |
    /// | window_width/height | `1600`, `1200`      |
    /// | recent_files        | empty               |
    /// | num_recents_to_show | `10`                |
    fn default() -> Self {
        Self {
            theme_filename: "colors_light.qss".to_string(),
            window_restore: false,
            window_x: 100,
            window_y: 100,
            window_width: 1600,
            window_height: 1200,
            recent_files: RecentFiles::new(),
            num_recents_to_show: 10,
        }
    }
}

impl UserSettings {
    pub fn theme_filename(&self) -> &str {
        &self.theme_filename
    }

    pub fn set_theme_filename(&mut self, filename: impl Into<String>) {
        self.theme_filename = filename.into();
    }

    pub fn window_restore(&self) -> bool {
        self.window_restore
    }

    pub fn set_window_restore(&mut self, restore: bool) {
        self.window_restore = restore;
    }

    /// Saved top-left corner `(x, y)`.
    pub fn window_position(&self) -> (i32, i32) {
        (self.window_x, self.window_y)
    }

    pub fn set_window_position(&mut self, x: i32, y: i32) {
        self.window_x = x;
        self.window_y = y;
    }

    /// Saved `(width, height)`.
    pub fn window_size(&self) -> (i32, i32) {
        (self.window_width, self.window_height)
    }

    pub fn set_window_size(&mut self, width: i32, height: i32) {
        self.window_width = width;
        self.window_height = height;
    }

    pub fn recent_files(&self) -> &RecentFiles {
        &self.recent_files
    }

    /// Replaces the recent-files list, truncating it to the cap.
    pub fn set_recent_files(&mut self, files: RecentFiles) {
        self.recent_files = files;
        self.recent_files.truncate(self.cap());
    }

    /// Records that `path` was opened; see [`RecentFiles::touch`].
    pub fn add_recent_file(&mut self, path: &str) {
        let cap = self.cap();
        self.recent_files.touch(path, cap);
    }

    pub fn clear_recent_files(&mut self) {
        self.recent_files.clear();
    }

    pub fn num_recents_to_show(&self) -> u32 {
        self.num_recents_to_show
    }

    /// Sets the recent-files cap and truncates the list to it.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidValue`] when `count` exceeds [`MAX_RECENTS`].
    pub fn set_num_recents_to_show(&mut self, count: u32) -> Result<(), SettingsError> {
        if count > MAX_RECENTS {
            return Err(SettingsError::InvalidValue {
                field: FieldName::NumRecentsToShow,
                reason: format!("must be between 0 and {MAX_RECENTS}, got {count}"),
            });
        }
        self.num_recents_to_show = count;
        self.recent_files.truncate(self.cap());
        Ok(())
    }

    /// Returns the value of the named field.
    pub fn get(&self, field: FieldName) -> FieldValue {
        match field {
            FieldName::ThemeFilename => FieldValue::Text(self.theme_filename.clone()),
            FieldName::WindowRestore => FieldValue::Flag(self.window_restore),
            FieldName::WindowX => FieldValue::Integer(self.window_x.into()),
            FieldName::WindowY => FieldValue::Integer(self.window_y.into()),
            FieldName::WindowWidth => FieldValue::Integer(self.window_width.into()),
            FieldName::WindowHeight => FieldValue::Integer(self.window_height.into()),
            FieldName::RecentFiles => FieldValue::Recents(self.recent_files.clone()),
            FieldName::NumRecentsToShow => FieldValue::Integer(self.num_recents_to_show.into()),
        }
    }

    /// Writes `value` into the named field.
    ///
    /// # Errors
    ///
    /// - [`SettingsError::FieldTypeMismatch`] if `value` has the wrong variant.
    /// - [`SettingsError::InvalidValue`] if an integer does not fit the field.
    pub fn set(&mut self, field: FieldName, value: FieldValue) -> Result<(), SettingsError> {
        match (field, value) {
            (FieldName::ThemeFilename, FieldValue::Text(s)) => self.theme_filename = s,
            (FieldName::WindowRestore, FieldValue::Flag(b)) => self.window_restore = b,
            (FieldName::WindowX, FieldValue::Integer(n)) => self.window_x = to_i32(field, n)?,
            (FieldName::WindowY, FieldValue::Integer(n)) => self.window_y = to_i32(field, n)?,
            (FieldName::WindowWidth, FieldValue::Integer(n)) => {
                self.window_width = to_i32(field, n)?
            }
            (FieldName::WindowHeight, FieldValue::Integer(n)) => {
                self.window_height = to_i32(field, n)?
            }
            (FieldName::RecentFiles, FieldValue::Recents(list)) => self.set_recent_files(list),
            (FieldName::NumRecentsToShow, FieldValue::Integer(n)) => {
                let count = u32::try_from(n).map_err(|_| SettingsError::InvalidValue {
                    field,
                    reason: format!("must be between 0 and {MAX_RECENTS}, got {n}"),
                })?;
                self.set_num_recents_to_show(count)?;
            }
            (field, value) => {
                return Err(SettingsError::FieldTypeMismatch {
                    field,
                    expected: field.kind(),
                    found: value.kind(),
                })
            }
        }
        Ok(())
    }

    /// Applies `names[i] = values[i]` for every pair.
    ///
    /// All pairs are validated before any is applied: on error the record is
    /// left unchanged.
    ///
    /// # Errors
    ///
    /// [`SettingsError::ArityMismatch`] when the slices differ in length, or
    /// the first error any single [`UserSettings::set`] would return.
    pub fn set_many<S: AsRef<str>>(
        &mut self,
        names: &[S],
        values: Vec<FieldValue>,
    ) -> Result<(), SettingsError> {
        if names.len() != values.len() {
            return Err(SettingsError::ArityMismatch {
                names: names.len(),
                values: values.len(),
            });
        }
        let mut staged = self.clone();
        for (name, value) in names.iter().zip(values) {
            let field: FieldName = name.as_ref().parse()?;
            staged.set(field, value)?;
        }
        *self = staged;
        Ok(())
    }

    /// Re-establishes the record's invariants after loading from disk.
    ///
    /// Clamps `num_recents_to_show` into `0..=MAX_RECENTS` and truncates the
    /// recent-files list to it.
    pub fn normalize(&mut self) {
        if self.num_recents_to_show > MAX_RECENTS {
            warn!(
                "num_recents_to_show = {} exceeds {MAX_RECENTS}; clamping",
                self.num_recents_to_show
            );
            self.num_recents_to_show = MAX_RECENTS;
        }
        self.recent_files.truncate(self.cap());
    }

    fn cap(&self) -> usize {
        self.num_recents_to_show as usize
    }
}

fn to_i32(field: FieldName, n: i64) -> Result<i32, SettingsError> {
    i32::try_from(n).map_err(|_| SettingsError::InvalidValue {
        field,
        reason: format!("{n} is out of range"),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
