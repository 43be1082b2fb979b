//! Bootstrap configuration from the environment.

use pitchpad_core::util::normalize_text_option;

/// Endpoints and keys the shell needs before anything renders.
///
/// Every field is optional; features backed by a missing value stay disabled
/// instead of failing startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// Base URL of the managed auth service
    pub auth_url: Option<String>,
    /// Public (anon) API key for the auth service
    pub auth_anon_key: Option<String>,
    /// Base URL of the pitch store API
    pub api_base_url: Option<String>,
}

impl BootstrapConfig {
    pub fn from_env() -> Self {
        Self::from_raw(
            std::env::var("PITCHPAD_AUTH_URL").ok(),
            std::env::var("PITCHPAD_AUTH_ANON_KEY").ok(),
            std::env::var("PITCHPAD_API_BASE_URL").ok(),
        )
    }

    pub fn from_raw(
        auth_url: Option<String>,
        auth_anon_key: Option<String>,
        api_base_url: Option<String>,
    ) -> Self {
        Self {
            auth_url: normalize_text_option(auth_url),
            auth_anon_key: normalize_text_option(auth_anon_key),
            api_base_url: normalize_text_option(api_base_url),
        }
    }
}
