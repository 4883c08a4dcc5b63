//! Client configuration resolved at build time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default Content Pack Service address for local development.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Explicit configuration handed to the request-building [`ApiClient`].
///
/// Built once at startup and passed in; request code never consults ambient
/// global state for the service address.
///
/// [`ApiClient`]: super::api::ApiClient
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the Content Pack Service, without a trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    /// Configuration from the `SENDY_API_URL` compile-time override, falling
    /// back to the local development address. WASM has no process environment
    /// at runtime, so the base URL is baked in when the bundle is built.
    pub fn from_build_env() -> Self {
        Self {
            base_url: option_env!("SENDY_API_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_owned(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
