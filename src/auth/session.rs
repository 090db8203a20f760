//! In-memory session with a durable backing file.
//!
//! The session is an explicitly-scoped context object created once at
//! startup and owned by the app; nothing else touches the credential file.

use super::credentials::{Credentials, CredentialsManager};
use crate::error::AuthError;

/// The current authentication state.
///
/// Lifecycle: [`Session::load`] reads the persisted token at startup,
/// [`Session::establish`] stores a fresh login, [`Session::clear`] tears it
/// down (logout, or a 401 on a protected call). Establishing and clearing
/// update the durable file synchronously; neither issues a network call.
#[derive(Debug)]
pub struct Session {
    credentials: Credentials,
    manager: Option<CredentialsManager>,
}

impl Session {
    /// Load the session from the durable credential store.
    ///
    /// When the home directory cannot be determined the session still works,
    /// it just won't survive a restart.
    pub fn load() -> Self {
        let manager = CredentialsManager::new();
        let credentials = manager
            .as_ref()
            .map(|m| m.load())
            .unwrap_or_default();
        Self {
            credentials,
            manager,
        }
    }

    /// Build a session over an explicit manager (used by tests).
    pub fn with_manager(manager: CredentialsManager) -> Self {
        let credentials = manager.load();
        Self {
            credentials,
            manager: Some(manager),
        }
    }

    /// An unauthenticated session with no durable backing (used by tests).
    pub fn ephemeral() -> Self {
        Self {
            credentials: Credentials::default(),
            manager: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.has_token()
    }

    /// The stored bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        self.credentials.access_token.as_deref()
    }

    /// Email of the signed-in account, for display.
    pub fn email(&self) -> Option<&str> {
        self.credentials.email.as_deref()
    }

    /// Store a fresh login in memory and on disk.
    ///
    /// A disk failure is reported but the in-memory session stands: the user
    /// is signed in for this run either way.
    pub fn establish(&mut self, token: String, email: String) -> Result<(), AuthError> {
        self.credentials = Credentials {
            access_token: Some(token),
            email: Some(email),
        };
        if let Some(manager) = &self.manager {
            if !manager.save(&self.credentials) {
                return Err(AuthError::CredentialsSaveFailed {
                    message: format!("could not write {:?}", manager.credentials_path()),
                });
            }
        }
        Ok(())
    }

    /// Drop the token from memory and disk.
    pub fn clear(&mut self) {
        self.credentials = Credentials::default();
        if let Some(manager) = &self.manager {
            manager.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_session(temp_dir: &TempDir) -> Session {
        Session::with_manager(CredentialsManager::with_path(
            temp_dir.path().join("credentials.json"),
        ))
    }

    #[test]
    fn test_fresh_session_is_unauthenticated() {
        let temp_dir = TempDir::new().unwrap();
        let session = temp_session(&temp_dir);
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_establish_then_reload() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = temp_session(&temp_dir);
        session
            .establish("tok-1".to_string(), "a@b.com".to_string())
            .unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("tok-1"));
        assert_eq!(session.email(), Some("a@b.com"));

        // A new session over the same file restores the token.
        let restored = temp_session(&temp_dir);
        assert!(restored.is_authenticated());
        assert_eq!(restored.token(), Some("tok-1"));
    }

    #[test]
    fn test_clear_removes_durable_state() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = temp_session(&temp_dir);
        session
            .establish("tok-1".to_string(), "a@b.com".to_string())
            .unwrap();

        session.clear();
        assert!(!session.is_authenticated());

        let restored = temp_session(&temp_dir);
        assert!(!restored.is_authenticated());
    }

    #[test]
    fn test_ephemeral_session_establish() {
        let mut session = Session::ephemeral();
        session
            .establish("tok".to_string(), "a@b.com".to_string())
            .unwrap();
        assert!(session.is_authenticated());
    }
}
