//! Infrastructure layer for the application shell.
//!
//! Contains the file-system and OS-facing adapters: the YAML configuration
//! store, login-name resolution, and the theme resource library.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `appshell_core`, but MUST NOT be imported by the `application` or domain
//! layers.

pub mod identity;
pub mod storage;
pub mod theming;
