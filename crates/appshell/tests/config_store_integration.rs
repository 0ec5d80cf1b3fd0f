//! Integration tests for the configuration store.
//!
//! These tests exercise the public API end-to-end against real files in a
//! temporary directory: `ConfigStore` + `ConfigDocument` + the application
//! use cases that sit on top of it.

use std::fs;
use std::path::{Path, PathBuf};

use appshell::application::preferences::PreferenceChanges;
use appshell::application::recent_menu::RecentMenu;
use appshell::application::window_geometry::{initial_geometry, remember_geometry};
use appshell::infrastructure::storage::config_store::{ConfigStore, ConfigStoreError};
use appshell_core::{
    ConfigDocument, FieldValue, ScreenSize, SettingsError, UserId, WindowGeometry,
};
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config_path(dir: &TempDir) -> PathBuf {
    dir.path().join("app_config.yaml")
}

fn on_disk(path: &Path) -> ConfigDocument {
    ConfigDocument::from_yaml(&fs::read_to_string(path).expect("file exists"))
        .expect("file is a valid document")
}

fn alice() -> UserId {
    UserId::new("alice")
}

// ── First run ─────────────────────────────────────────────────────────────────

#[test]
fn test_first_run_as_default_creates_file_and_never_saves() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);
    assert!(!path.exists());

    // Act
    let mut store = ConfigStore::open(&path, UserId::sentinel()).expect("first run");
    let created = fs::read_to_string(&path).unwrap();
    store.set_field("window_x", FieldValue::Integer(999)).unwrap();
    store.save().expect("save on DEFAULT must not fail");

    // Assert
    assert_eq!(on_disk(&path).users().collect::<Vec<_>>(), vec!["DEFAULT"]);
    assert_eq!(fs::read_to_string(&path).unwrap(), created);
}

#[test]
fn test_first_run_for_named_user_seeds_both_sections() {
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);

    ConfigStore::open(&path, alice()).unwrap();

    assert_eq!(on_disk(&path).users().collect::<Vec<_>>(), vec!["DEFAULT", "alice"]);
}

// ── Backfill ──────────────────────────────────────────────────────────────────

#[test]
fn test_missing_field_is_backfilled_and_written_on_save() {
    // Arrange: an older file that predates num_recents_to_show
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);
    fs::write(&path, "alice:\n  theme_filename: colors_dark.qss\n").unwrap();
    let mut store = ConfigStore::open(&path, alice()).unwrap();

    // Act
    let value = store.get_field("num_recents_to_show").unwrap();
    store.save().unwrap();

    // Assert
    assert_eq!(value, FieldValue::Integer(10));
    assert!(fs::read_to_string(&path)
        .unwrap()
        .contains("num_recents_to_show: 10"));
}

// ── Recent files ──────────────────────────────────────────────────────────────

#[test]
fn test_recent_files_are_bounded() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let mut store = ConfigStore::open(config_path(&dir), alice()).unwrap();
    store.set_field("num_recents_to_show", FieldValue::Integer(2)).unwrap();

    // Act
    for path in ["/docs/A", "/docs/B", "/docs/C"] {
        store.add_recent_file(path);
    }

    // Assert
    assert_eq!(
        store.recent_files().iter().collect::<Vec<_>>(),
        vec![("C", "/docs/C"), ("B", "/docs/B")]
    );
}

#[test]
fn test_re_adding_moves_to_front() {
    // Arrange: {B, A}, B most recent
    let dir = TempDir::new().unwrap();
    let mut store = ConfigStore::open(config_path(&dir), alice()).unwrap();
    store.add_recent_file("/docs/A");
    store.add_recent_file("/docs/B");

    // Act
    store.add_recent_file("/docs/A");

    // Assert
    assert_eq!(
        store.recent_files().iter().collect::<Vec<_>>(),
        vec![("A", "/docs/A"), ("B", "/docs/B")]
    );
}

#[test]
fn test_same_name_in_other_directory_replaces_entry() {
    let dir = TempDir::new().unwrap();
    let mut store = ConfigStore::open(config_path(&dir), alice()).unwrap();
    store.add_recent_file("/old/notes.md");
    store.add_recent_file("/docs/other.md");

    store.add_recent_file("/new/notes.md");

    assert_eq!(
        store.recent_files().iter().collect::<Vec<_>>(),
        vec![("notes.md", "/new/notes.md"), ("other.md", "/docs/other.md")]
    );
}

#[test]
fn test_recent_menu_reflects_saved_list() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);
    let mut store = ConfigStore::open(&path, alice()).unwrap();
    store.add_recent_file("/docs/report.txt");
    store.save().unwrap();

    // Act
    let reopened = ConfigStore::open(&path, alice()).unwrap();
    let menu = RecentMenu::for_store(&reopened);

    // Assert
    assert!(menu.is_visible());
    assert_eq!(menu.entries()[0].label, "report.txt");
    assert_eq!(menu.entries()[0].tooltip, "/docs/report.txt");
}

// ── Persistence ───────────────────────────────────────────────────────────────

#[test]
fn test_round_trip_persistence() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);
    let mut store = ConfigStore::open(&path, alice()).unwrap();

    // Act
    store.set_field("theme_filename", "colors_dark.qss").unwrap();
    store.save().unwrap();
    let reopened = ConfigStore::open(&path, alice()).unwrap();

    // Assert
    assert_eq!(
        reopened.get_field("theme_filename").unwrap(),
        FieldValue::Text("colors_dark.qss".to_string())
    );
}

#[test]
fn test_two_users_share_one_file() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);
    let mut a = ConfigStore::open(&path, alice()).unwrap();
    a.set_theme_filename("colors_dark.qss");
    a.save().unwrap();

    // Act
    let mut b = ConfigStore::open(&path, UserId::new("bob")).unwrap();
    b.set_window_restore(true);
    b.save().unwrap();

    // Assert
    let doc = on_disk(&path);
    assert_eq!(doc.users().collect::<Vec<_>>(), vec!["DEFAULT", "alice", "bob"]);
    assert_eq!(
        doc.section(&alice()).unwrap().theme_filename(),
        "colors_dark.qss"
    );
    assert!(doc.section(&UserId::new("bob")).unwrap().window_restore());
}

#[test]
fn test_unparsable_document_is_not_overwritten() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);
    fs::write(&path, "alice: {theme_filename: [").unwrap();

    // Act
    let result = ConfigStore::open(&path, alice());

    // Assert
    assert!(matches!(result, Err(ConfigStoreError::DocumentLoad { .. })));
    assert_eq!(fs::read_to_string(&path).unwrap(), "alice: {theme_filename: [");
}

// ── Field errors ──────────────────────────────────────────────────────────────

#[test]
fn test_arity_mismatch() {
    let dir = TempDir::new().unwrap();
    let mut store = ConfigStore::open(config_path(&dir), alice()).unwrap();

    let result = store.set_fields(&["a", "b"], vec![FieldValue::Integer(1)]);

    assert_eq!(result, Err(SettingsError::ArityMismatch { names: 2, values: 1 }));
}

#[test]
fn test_unknown_field() {
    let dir = TempDir::new().unwrap();
    let store = ConfigStore::open(config_path(&dir), alice()).unwrap();

    assert!(matches!(
        store.get_field("nope"),
        Err(SettingsError::FieldNotFound(name)) if name == "nope"
    ));
}

// ── Use cases over a real store ───────────────────────────────────────────────

#[test]
fn test_window_geometry_survives_restart() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);
    let screen = ScreenSize {
        width: 1920,
        height: 1080,
    };
    let mut store = ConfigStore::open(&path, alice()).unwrap();
    store.set_window_restore(true);
    let closed_at = WindowGeometry {
        x: 10,
        y: 30,
        width: 1024,
        height: 768,
    };

    // Act
    remember_geometry(&mut store, closed_at).unwrap();
    let reopened = ConfigStore::open(&path, alice()).unwrap();

    // Assert
    assert_eq!(initial_geometry(&reopened, screen), closed_at);
}

#[test]
fn test_preferences_apply_persists() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);
    let mut store = ConfigStore::open(&path, alice()).unwrap();
    let mut changes = PreferenceChanges::new();
    changes.set_theme_filename("colors_dark.qss").set_num_recents_to_show(5);

    // Act
    let theme_changed = changes.apply(&mut store).unwrap();

    // Assert
    assert!(theme_changed);
    let reopened = ConfigStore::open(&path, alice()).unwrap();
    assert_eq!(reopened.theme_filename(), "colors_dark.qss");
    assert_eq!(reopened.num_recents_to_show(), 5);
}
