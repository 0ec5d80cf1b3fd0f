//! Application metadata for the About dialog.
//!
//! Values come from the package manifest at compile time.  Empty manifest
//! fields fall back to placeholders so the dialog never shows a blank line.

use std::fmt;

const UNKNOWN_NAME: &str = "Unknown App";
const UNKNOWN_VERSION: &str = "0.0.0";
const NO_DESCRIPTION: &str = "No description available";
const NO_LICENSE: &str = "No license";
const UNKNOWN_AUTHOR: &str = "Unknown";

/// Name, version, and credits of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppMetadata {
    pub name: String,
    pub version: String,
    pub description: String,
    pub license: String,
    /// First listed author, without an e-mail address.
    pub author: String,
}

impl AppMetadata {
    /// Metadata of this build.
    pub fn current() -> Self {
        Self::from_manifest(
            option_env!("CARGO_PKG_NAME"),
            option_env!("CARGO_PKG_VERSION"),
            option_env!("CARGO_PKG_DESCRIPTION"),
            option_env!("CARGO_PKG_LICENSE"),
            option_env!("CARGO_PKG_AUTHORS"),
        )
    }

    /// Builds metadata from raw manifest fields.
    ///
    /// `authors` is the colon-separated list Cargo provides.
    pub fn from_manifest(
        name: Option<&str>,
        version: Option<&str>,
        description: Option<&str>,
        license: Option<&str>,
        authors: Option<&str>,
    ) -> Self {
        let author = authors
            .and_then(|list| list.split(':').map(str::trim).find(|a| !a.is_empty()))
            .map(strip_email);
        Self {
            name: or_placeholder(name, UNKNOWN_NAME),
            version: or_placeholder(version, UNKNOWN_VERSION),
            description: or_placeholder(description, NO_DESCRIPTION),
            license: or_placeholder(license, NO_LICENSE),
            author: or_placeholder(author, UNKNOWN_AUTHOR),
        }
    }
}

impl fmt::Display for AppMetadata {
    /// `name vVERSION by AUTHOR - LICENSE`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} v{} by {} - {}",
            self.name, self.version, self.author, self.license
        )
    }
}

fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => placeholder.to_string(),
    }
}

/// `"Jane Doe <jane@example.com>"` → `"Jane Doe"`.
fn strip_email(author: &str) -> &str {
    author.split('<').next().unwrap_or(author).trim()
}
