//! Storage infrastructure: configuration document persistence.
//!
//! The `config_store` sub-module handles:
//!
//! - Locating the YAML configuration file in the platform config directory.
//! - Creating it on first run, seeded with the starter config.
//! - Reading and writing the active user's section.
//! - Writing the whole document back atomically on `save()`.

pub mod config_store;
