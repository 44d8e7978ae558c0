//! API client configuration.

use reviewkita_core::defaults;

/// Configuration for [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the ReviewKita backend API.
    pub base_url: String,
    /// Bearer token, if a session already exists.
    pub token: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::API_BASE_URL.to_string(),
            token: None,
            timeout_secs: defaults::API_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Create from environment variables, falling back to defaults.
    ///
    /// Reads `REVIEWKITA_API_BASE`, `REVIEWKITA_API_TOKEN`, and
    /// `REVIEWKITA_API_TIMEOUT_SECS`. A `.env` file is loaded
    /// opportunistically if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = std::env::var("REVIEWKITA_API_BASE")
            .unwrap_or_else(|_| defaults::API_BASE_URL.to_string());
        let token = std::env::var("REVIEWKITA_API_TOKEN")
            .ok()
            .filter(|t| !t.is_empty());
        let timeout_secs = std::env::var("REVIEWKITA_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults::API_TIMEOUT_SECS);

        Self {
            base_url,
            token,
            timeout_secs,
        }
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, defaults::API_BASE_URL);
        assert!(config.token.is_none());
        assert_eq!(config.timeout_secs, defaults::API_TIMEOUT_SECS);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ApiConfig::default()
            .with_base_url("https://api.reviewkita.app")
            .with_token("tok-123");
        assert_eq!(config.base_url, "https://api.reviewkita.app");
        assert_eq!(config.token.as_deref(), Some("tok-123"));
    }
}
