//! The configuration document: one settings section per user.
//!
//! On disk the document is YAML:
//!
//! ```yaml
//! DEFAULT:
//!   theme_filename: colors_light.qss
//!   window_restore: false
//!   ...
//! alice:
//!   theme_filename: colors_dark.qss
//!   recent_files:
//!     notes.md: /home/alice/notes.md
//!   num_recents_to_show: 10
//! ```
//!
//! Sections keep their insertion order across load/save cycles; new users are
//! appended at the end.  Reading and writing the file is done by the storage
//! layer in the `appshell` crate; this type only converts between text and
//! the in-memory model.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::settings::UserSettings;
use super::user::UserId;

/// Error converting between YAML text and a [`ConfigDocument`].
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The text is not a valid configuration document.
    #[error("failed to parse configuration YAML: {0}")]
    Parse(#[source] serde_yaml::Error),

    /// The document could not be rendered as YAML.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[source] serde_yaml::Error),
}

/// Ordered map of user identifier to that user's settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConfigDocument {
    sections: IndexMap<String, UserSettings>,
}

impl ConfigDocument {
    /// An empty document with no sections.
    pub fn new() -> Self {
        Self::default()
    }

    /// The first-run document: a single starter-config section for `"DEFAULT"`.
    pub fn starter() -> Self {
        let mut doc = Self::new();
        doc.ensure_section(&UserId::sentinel());
        doc
    }

    /// Parses YAML text.
    ///
    /// Empty (or whitespace-only) text is an empty document.  A section whose
    /// value is empty (`alice:` with nothing under it) becomes a starter-config
    /// section.  Every section is normalised after parsing.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Parse`] for malformed YAML or a document whose
    /// shape is not `user → fields`.
    pub fn from_yaml(text: &str) -> Result<Self, DocumentError> {
        if text.trim().is_empty() {
            return Ok(Self::new());
        }
        let raw: Option<IndexMap<String, Option<UserSettings>>> =
            serde_yaml::from_str(text).map_err(DocumentError::Parse)?;
        let sections = raw
            .unwrap_or_default()
            .into_iter()
            .map(|(user, section)| {
                let mut settings = section.unwrap_or_default();
                settings.normalize();
                (user, settings)
            })
            .collect();
        Ok(Self { sections })
    }

    /// Renders the whole document as YAML, sections and keys in order.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Serialize`] if serialisation fails.
    pub fn to_yaml(&self) -> Result<String, DocumentError> {
        serde_yaml::to_string(self).map_err(DocumentError::Serialize)
    }

    /// Adds a starter-config section for `user` if none exists.
    ///
    /// Returns `true` if a section was added.
    pub fn ensure_section(&mut self, user: &UserId) -> bool {
        if self.sections.contains_key(user.as_str()) {
            return false;
        }
        self.sections
            .insert(user.as_str().to_string(), UserSettings::default());
        true
    }

    /// Stores `settings` as `user`'s section.
    ///
    /// An existing section keeps its position; a new one is appended.
    pub fn put_section(&mut self, user: &UserId, settings: UserSettings) {
        self.sections.insert(user.as_str().to_string(), settings);
    }

    pub fn section(&self, user: &UserId) -> Option<&UserSettings> {
        self.sections.get(user.as_str())
    }

    pub fn section_mut(&mut self, user: &UserId) -> Option<&mut UserSettings> {
        self.sections.get_mut(user.as_str())
    }

    pub fn contains(&self, user: &UserId) -> bool {
        self.sections.contains_key(user.as_str())
    }

    /// Section keys in document order.
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl fmt::Display for ConfigDocument {
    /// Pretty-prints the document as YAML.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yaml = self.to_yaml().map_err(|_| fmt::Error)?;
        f.write_str(&yaml)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
