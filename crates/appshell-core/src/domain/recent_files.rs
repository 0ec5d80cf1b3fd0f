//! Bounded most-recently-used file list.
//!
//! Entries map a file's base name (shown as the menu label) to its full path
//! (shown as the tooltip and used to reopen the file).  Position carries the
//! recency: index 0 is the most recently opened file, the last entry is the
//! oldest and is the one evicted when the list is over its cap.
//!
//! # Why an `IndexMap`? (for beginners)
//!
//! A `HashMap` forgets insertion order, and a `Vec<(String, String)>` makes
//! "is this name already present?" a linear scan with manual de-duplication.
//! `IndexMap` is a hash map that also remembers order, and it has first-class
//! operations for exactly what this list needs: insert at a position
//! ([`IndexMap::shift_insert`]), move an entry ([`IndexMap::move_index`]),
//! and drop everything past a length ([`IndexMap::truncate`]).  It also
//! serialises as a mapping in order, so the YAML file lists the files
//! newest-first.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered `file name → full path` map, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentFiles {
    entries: IndexMap<String, String>,
}

impl RecentFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(file name, full path)` pairs from most to least recent.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Full paths from most to least recent.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    /// Returns the path stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Returns `true` if `path` is one of the stored paths.
    pub fn contains_path(&self, path: &str) -> bool {
        self.entries.values().any(|p| p == path)
    }

    /// Records that `path` was just opened.
    ///
    /// - If `path` is already stored, its entry moves to the front with name
    ///   and path unchanged.
    /// - Otherwise `{base name: path}` is inserted at the front.  An existing
    ///   entry with the same base name but a different path is replaced.
    ///
    /// Afterwards the list is cut down to `cap` entries, dropping the oldest.
    pub fn touch(&mut self, path: &str, cap: usize) {
        match self.entries.values().position(|p| p == path) {
            Some(index) => self.entries.move_index(index, 0),
            None => {
                let name = base_name(path).to_string();
                self.entries.shift_insert(0, name, path.to_string());
            }
        }
        self.truncate(cap);
    }

    /// Drops the oldest entries until at most `cap` remain.
    pub fn truncate(&mut self, cap: usize) {
        self.entries.truncate(cap);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<N, P> FromIterator<(N, P)> for RecentFiles
where
    N: Into<String>,
    P: Into<String>,
{
    /// Builds a list from `(name, path)` pairs given most recent first.
    fn from_iter<I: IntoIterator<Item = (N, P)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(n, p)| (n.into(), p.into()))
                .collect(),
        }
    }
}

/// Final path component, accepting both `/` and `\` separators.
///
/// Configuration files move between Windows and Unix machines, so a path
/// recorded on one must still get a sensible label on the other.  A path
/// ending in a separator has no file name; the whole path is used instead.
fn base_name(path: &str) -> &str {
    match path.rsplit(|c| c == '/' || c == '\\').next() {
        Some(name) if !name.is_empty() => name,
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &RecentFiles) -> Vec<&str> {
        list.iter().map(|(name, _)| name).collect()
    }

    #[test]
    fn test_touch_inserts_new_file_at_front() {
        // Arrange
        let mut list = RecentFiles::new();

        // Act
        list.touch("/home/alice/a.txt", 10);
        list.touch("/home/alice/b.txt", 10);

        // Assert
        assert_eq!(names(&list), vec!["b.txt", "a.txt"]);
        assert_eq!(list.get("a.txt"), Some("/home/alice/a.txt"));
    }

    #[test]
    fn test_touch_evicts_oldest_when_over_cap() {
        // Arrange
        let mut list = RecentFiles::new();

        // Act
        list.touch("/docs/A", 2);
        list.touch("/docs/B", 2);
        list.touch("/docs/C", 2);

        // Assert: A was the oldest and is gone
        assert_eq!(names(&list), vec!["C", "B"]);
        assert!(!list.contains_path("/docs/A"));
    }

    #[test]
    fn test_touch_existing_path_moves_to_front_without_duplicating() {
        // Arrange: B is most recent
        let mut list: RecentFiles = [("B", "/docs/B"), ("A", "/docs/A")].into_iter().collect();

        // Act
        list.touch("/docs/A", 10);

        // Assert
        assert_eq!(names(&list), vec!["A", "B"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_touch_existing_path_keeps_stored_name() {
        // The stored label is kept even if it differs from the base name.
        let mut list: RecentFiles =
            [("report", "/docs/r.txt"), ("other", "/docs/o.txt")].into_iter().collect();

        list.touch("/docs/r.txt", 10);

        assert_eq!(list.iter().next(), Some(("report", "/docs/r.txt")));
    }

    #[test]
    fn test_touch_same_name_different_path_replaces_entry() {
        // Arrange
        let mut list = RecentFiles::new();
        list.touch("/old/notes.md", 10);
        list.touch("/docs/x.md", 10);

        // Act
        list.touch("/new/notes.md", 10);

        // Assert: one "notes.md" entry, pointing at the newest path, at the front
        assert_eq!(names(&list), vec!["notes.md", "x.md"]);
        assert_eq!(list.get("notes.md"), Some("/new/notes.md"));
    }

    #[test]
    fn test_touch_with_zero_cap_leaves_list_empty() {
        let mut list = RecentFiles::new();
        list.touch("/docs/A", 0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_truncate_drops_from_the_end() {
        let mut list: RecentFiles =
            [("C", "/C"), ("B", "/B"), ("A", "/A")].into_iter().collect();

        list.truncate(1);

        assert_eq!(names(&list), vec!["C"]);
    }

    #[test]
    fn test_base_name_handles_both_separators() {
        assert_eq!(base_name("C:\\Users\\bob\\file.qss"), "file.qss");
        assert_eq!(base_name("/home/bob/file.qss"), "file.qss");
        assert_eq!(base_name("file.qss"), "file.qss");
        assert_eq!(base_name("/home/bob/"), "/home/bob/");
    }

    #[test]
    fn test_serializes_as_ordered_mapping() {
        // Arrange
        let list: RecentFiles = [("z.txt", "/z.txt"), ("a.txt", "/a.txt")].into_iter().collect();

        // Act
        let yaml = serde_yaml::to_string(&list).expect("serialize");
        let restored: RecentFiles = serde_yaml::from_str(&yaml).expect("deserialize");

        // Assert: newest-first order survives, not alphabetical
        assert!(yaml.find("z.txt").unwrap() < yaml.find("a.txt").unwrap());
        assert_eq!(restored, list);
    }
}
