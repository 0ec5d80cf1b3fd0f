//! Which user's settings section to use.
//!
//! Each login on a shared machine gets its own section in the configuration
//! document.  The section key is the OS login name; when that cannot be
//! determined the shared `"DEFAULT"` section is used instead, and that
//! section is never written back.
//!
//! # Testability
//!
//! The `UserResolver` trait lets tests substitute a fixed or failing resolver
//! without touching the process environment.

use appshell_core::UserId;
use thiserror::Error;
use tracing::{debug, warn};

/// Error type for user-identifier resolution.
#[derive(Debug, Error, PartialEq)]
pub enum IdentityError {
    /// No login name could be determined.
    #[error("login name unavailable: {0}")]
    Unavailable(String),
}

/// Source of the current user's login name.
#[cfg_attr(test, mockall::automock)]
pub trait UserResolver {
    /// Returns the login name of the current user.
    ///
    /// # Errors
    ///
    /// [`IdentityError::Unavailable`] when no name can be determined.
    fn resolve(&self) -> Result<String, IdentityError>;
}

/// Asks the operating system for the login name.
///
/// Uses the account database rather than environment variables, so it also
/// works under cron or a service manager.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsLoginResolver;

impl UserResolver for OsLoginResolver {
    fn resolve(&self) -> Result<String, IdentityError> {
        let name = whoami::fallible::username()
            .map_err(|e| IdentityError::Unavailable(e.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(IdentityError::Unavailable(
                "operating system reported an empty login name".to_string(),
            ));
        }
        Ok(name.to_string())
    }
}

/// Resolves the active user, falling back to `"DEFAULT"` on any failure.
pub fn resolve_user(resolver: &dyn UserResolver) -> UserId {
    match resolver.resolve() {
        Ok(name) if !name.trim().is_empty() => {
            debug!("active user: {name}");
            UserId::new(name.trim())
        }
        Ok(_) => {
            warn!("login name is empty; using the shared DEFAULT settings");
            UserId::sentinel()
        }
        Err(e) => {
            warn!("{e}; using the shared DEFAULT settings");
            UserId::sentinel()
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_user_uses_login_name() {
        // Arrange
        let mut resolver = MockUserResolver::new();
        resolver
            .expect_resolve()
            .times(1)
            .returning(|| Ok("alice".to_string()));

        // Act
        let user = resolve_user(&resolver);

        // Assert
        assert_eq!(user, UserId::new("alice"));
        assert!(!user.is_sentinel());
    }

    #[test]
    fn test_resolve_user_falls_back_on_error() {
        let mut resolver = MockUserResolver::new();
        resolver
            .expect_resolve()
            .returning(|| Err(IdentityError::Unavailable("test".to_string())));

        let user = resolve_user(&resolver);

        assert!(user.is_sentinel());
    }

    #[test]
    fn test_resolve_user_falls_back_on_blank_name() {
        let mut resolver = MockUserResolver::new();
        resolver.expect_resolve().returning(|| Ok("  ".to_string()));

        assert!(resolve_user(&resolver).is_sentinel());
    }

    #[test]
    fn test_resolve_user_trims_name() {
        let mut resolver = MockUserResolver::new();
        resolver.expect_resolve().returning(|| Ok(" bob\n".to_string()));

        assert_eq!(resolve_user(&resolver).as_str(), "bob");
    }

    #[test]
    fn test_os_resolver_ignores_login_environment() {
        // Arrange: a stripped environment, as under cron
        let saved: Vec<_> = ["USER", "USERNAME", "LOGNAME"]
            .into_iter()
            .map(|var| (var, std::env::var_os(var)))
            .collect();
        for (var, _) in &saved {
            std::env::remove_var(var);
        }

        // Act
        let result = OsLoginResolver.resolve();

        // Assert
        for (var, value) in saved {
            if let Some(value) = value {
                std::env::set_var(var, value);
            }
        }
        let expected = whoami::fallible::username().map(|n| n.trim().to_string());
        match (result, expected) {
            (Ok(name), Ok(expected)) => assert_eq!(name, expected),
            (Err(IdentityError::Unavailable(_)), _) => {}
            (other, _) => panic!("unexpected resolution: {other:?}"),
        }
    }

    #[test]
    fn test_os_resolver_result_is_never_blank() {
        // The environment varies between machines; only the contract is checked.
        if let Ok(name) = OsLoginResolver.resolve() {
            assert!(!name.trim().is_empty());
        }
    }
}
