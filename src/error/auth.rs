//! Authentication-related error types.

use std::fmt;

/// Authentication-specific error variants.
///
/// These cover credential storage, the login call itself, and token
/// rejection on protected calls.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    /// No token is stored; the user never logged in or logged out.
    NotAuthenticated,

    /// The login endpoint rejected the submitted credentials.
    LoginRejected { message: String },

    /// A protected call came back 401; the stored token is no longer valid.
    TokenRejected,

    /// Credentials could not be written to disk.
    CredentialsSaveFailed { message: String },
}

impl AuthError {
    /// Check if this error should drop the session and show the login screen.
    ///
    /// A rejected login attempt does not: the prior session state (none) is
    /// already showing, and the failure is reported inline on the form.
    pub fn requires_reauth(&self) -> bool {
        matches!(self, AuthError::NotAuthenticated | AuthError::TokenRejected)
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::NotAuthenticated => {
                "You are not signed in. Please sign in to continue.".to_string()
            }
            AuthError::LoginRejected { message } => {
                if message.is_empty() {
                    "Invalid email or password.".to_string()
                } else {
                    message.clone()
                }
            }
            AuthError::TokenRejected => {
                "Your session is no longer valid. Please sign in again.".to_string()
            }
            AuthError::CredentialsSaveFailed { .. } => {
                "Could not save your credentials. Please check file permissions.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::NotAuthenticated => "E_AUTH_NOT_AUTH",
            AuthError::LoginRejected { .. } => "E_AUTH_LOGIN",
            AuthError::TokenRejected => "E_AUTH_TOKEN",
            AuthError::CredentialsSaveFailed { .. } => "E_AUTH_CRED_SAVE",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::NotAuthenticated => write!(f, "Not authenticated"),
            AuthError::LoginRejected { message } => write!(f, "Login rejected: {}", message),
            AuthError::TokenRejected => write!(f, "Token rejected by server"),
            AuthError::CredentialsSaveFailed { message } => {
                write!(f, "Failed to save credentials: {}", message)
            }
        }
    }
}

impl std::error::Error for AuthError {}
