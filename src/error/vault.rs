//! Unified error type returned by the API gateway.

use std::fmt;

use super::auth::AuthError;
use super::network::NetworkError;

/// Unified error for CloudVault API operations.
///
/// Cloneable by construction (all variants own plain data), so failures can
/// travel through the app's message channel untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum VaultError {
    /// Authentication/authorization failure.
    Auth(AuthError),

    /// Transport failure; the request never produced a usable response.
    Network(NetworkError),

    /// The server answered with a non-success status. `message` carries the
    /// response body as diagnostic text.
    Status { status: u16, message: String },
}

impl VaultError {
    /// Get a user-friendly message for the notice line.
    pub fn user_message(&self) -> String {
        match self {
            VaultError::Auth(err) => err.user_message(),
            VaultError::Network(err) => err.user_message(),
            VaultError::Status { status, message } => {
                if message.is_empty() {
                    format!("The server returned an error (HTTP {}).", status)
                } else {
                    format!("Request failed (HTTP {}): {}", status, message)
                }
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            VaultError::Auth(err) => err.error_code(),
            VaultError::Network(err) => err.error_code(),
            VaultError::Status { .. } => "E_API_STATUS",
        }
    }

    /// Check if this error must drop the session and show the login screen.
    pub fn requires_reauth(&self) -> bool {
        match self {
            VaultError::Auth(err) => err.requires_reauth(),
            _ => false,
        }
    }
}

impl fmt::Display for VaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VaultError::Auth(err) => write!(f, "{}", err),
            VaultError::Network(err) => write!(f, "{}", err),
            VaultError::Status { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for VaultError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VaultError::Auth(err) => Some(err),
            VaultError::Network(err) => Some(err),
            VaultError::Status { .. } => None,
        }
    }
}

impl From<AuthError> for VaultError {
    fn from(e: AuthError) -> Self {
        VaultError::Auth(e)
    }
}

impl From<NetworkError> for VaultError {
    fn from(e: NetworkError) -> Self {
        VaultError::Network(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = VaultError::Status {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("500"));
        assert!(display.contains("Internal Server Error"));
    }

    #[test]
    fn test_status_user_message_with_empty_body() {
        let err = VaultError::Status {
            status: 503,
            message: String::new(),
        };
        assert!(err.user_message().contains("503"));
    }

    #[test]
    fn test_from_auth_error() {
        let err: VaultError = AuthError::NotAuthenticated.into();
        assert!(matches!(err, VaultError::Auth(_)));
        assert!(err.requires_reauth());
    }

    #[test]
    fn test_from_network_error() {
        let err: VaultError = NetworkError::Other {
            message: "x".to_string(),
        }
        .into();
        assert!(matches!(err, VaultError::Network(_)));
        assert!(!err.requires_reauth());
    }
}
