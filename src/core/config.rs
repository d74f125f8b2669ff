//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use crate::core::auth::AuthClientConfig;

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Base URL of the hosted auth project
    /// Example: https://xyzcompany.supabase.co
    pub auth_url: Option<String>,

    /// Anonymous API key of the hosted auth project.
    /// Shipped to the browser, but still kept out of logs
    pub auth_anon_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from any variable source. Values are trimmed and
    /// empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            auth_url: var("AUTH_URL"),
            auth_anon_key: var("AUTH_ANON_KEY"),
        }
    }

    /// Check if the auth provider is fully configured
    pub fn has_auth(&self) -> bool {
        self.auth_url.is_some() && self.auth_anon_key.is_some()
    }

    /// Public settings handed to the browser. Empty when unconfigured.
    pub fn auth_client_config(&self) -> AuthClientConfig {
        AuthClientConfig::new(
            self.auth_url.clone().unwrap_or_default(),
            self.auth_anon_key.clone().unwrap_or_default(),
        )
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("auth_url", &self.auth_url)
            .field(
                "auth_anon_key",
                &self.auth_anon_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
