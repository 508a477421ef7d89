//! Client configuration.

/// Default backend URL for local development.
const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Environment variable overriding the backend URL.
const API_URL_VAR: &str = "BANCARIO_API_URL";

/// Runtime configuration for the client core.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL.
    pub api_url: String,
}

impl ClientConfig {
    /// Reads configuration from the environment, falling back to the
    /// local development default.
    pub fn from_env() -> Self {
        let api_url =
            std::env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self { api_url }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
