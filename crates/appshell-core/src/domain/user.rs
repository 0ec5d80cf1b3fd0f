//! User identifier that selects a section of the configuration document.

use std::fmt;

/// Identifies whose settings section is active.
///
/// Normally the OS login name.  When the login name cannot be resolved the
/// caller falls back to [`UserId::sentinel`], whose section is read and
/// mutated in memory like any other but never written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Section key used when the real user identity is unknown.
    pub const SENTINEL: &'static str = "DEFAULT";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The `"DEFAULT"` identifier.
    pub fn sentinel() -> Self {
        Self(Self::SENTINEL.to_string())
    }

    /// Returns `true` for the `"DEFAULT"` identifier.
    pub fn is_sentinel(&self) -> bool {
        self.0 == Self::SENTINEL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
