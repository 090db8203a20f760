//! Client configuration.
//!
//! Everything here is resolvable without user interaction: the API base URL
//! comes from `CLOUDVAULT_API_URL` when set, and falls back to the local
//! development server address.

/// Default URL for the CloudVault API.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "CLOUDVAULT_API_URL";

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the CloudVault API, without a trailing slash.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Resolve configuration from the environment.
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { base_url }
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let config = ClientConfig::default().with_base_url("https://vault.example.com/");
        assert_eq!(config.base_url, "https://vault.example.com");
    }

    #[test]
    #[serial]
    fn test_from_env_override() {
        std::env::set_var(API_URL_ENV, "https://vault.example.com/");
        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, "https://vault.example.com");
        std::env::remove_var(API_URL_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_blank_falls_back() {
        std::env::set_var(API_URL_ENV, "   ");
        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        std::env::remove_var(API_URL_ENV);
    }
}
