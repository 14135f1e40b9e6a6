use crate::config::{AuthConfig, AuthMode};
use crate::domain::model::UserId;
use crate::domain::ports::Authenticator;
use tracing::warn;

/// Accepts any password for any username.
///
/// Hosts are expected to replace this with an [`Authenticator`] that checks
/// credentials against their own user store.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveAuthenticator;

impl Authenticator for PermissiveAuthenticator {
    fn authenticate(&self, username: &str, _password: &str) -> Option<UserId> {
        let user_id = UserId::from_username(username);
        warn!(
            "Permissive authenticator accepted {} without checking credentials",
            user_id
        );
        Some(user_id)
    }
}

impl AuthConfig {
    pub fn build(&self) -> Box<dyn Authenticator> {
        match self.mode {
            AuthMode::Permissive => Box::new(PermissiveAuthenticator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissive_lowercases_username() {
        let auth = PermissiveAuthenticator;
        assert_eq!(auth.authenticate("Alice", "x").unwrap(), "alice");
        assert_eq!(auth.authenticate("GUEST", "").unwrap(), "guest");
    }

    #[test]
    fn test_permissive_accepts_any_username_verbatim() {
        let auth = PermissiveAuthenticator;
        assert_eq!(auth.authenticate("", "x").unwrap(), "");
        assert_eq!(auth.authenticate("  BoB ", "x").unwrap(), "  bob ");
        assert_ne!(
            auth.authenticate("  BoB ", "x"),
            auth.authenticate("bob", "x")
        );
    }

    #[test]
    fn test_build_from_config() {
        let auth = AuthConfig::default().build();
        assert_eq!(auth.authenticate("Bob", "pw").unwrap(), "bob");
    }
}
