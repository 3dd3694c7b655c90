//! TomTom service configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration shared by the TomTom geocoding and routing clients
#[derive(Clone, Serialize, Deserialize)]
pub struct TomTomConfig {
    /// TomTom API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Base URL for the TomTom APIs
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Country bias for geocoding (ISO 3166-1 alpha-2, comma separated)
    #[serde(default = "default_country_set")]
    pub country_set: String,

    /// Turn-by-turn instruction format requested from routing (empty to omit)
    #[serde(default = "default_instructions_type")]
    pub instructions_type: String,
}

impl std::fmt::Debug for TomTomConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TomTomConfig")
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("country_set", &self.country_set)
            .field("instructions_type", &self.instructions_type)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.tomtom.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_country_set() -> String {
    "NG".to_string()
}

fn default_instructions_type() -> String {
    "text".to_string()
}

impl Default for TomTomConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            country_set: default_country_set(),
            instructions_type: default_instructions_type(),
        }
    }
}

impl TomTomConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: Some(SecretString::from("test-key")),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Set the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// The API key, if one is configured and non-empty
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|key| !key.is_empty())
    }

    /// Build an API URL by appending percent-encoded path segments to `base_url`
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, String> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| format!("invalid base_url '{}': {e}", self.base_url))?;
        url.path_segments_mut()
            .map_err(|()| format!("base_url '{}' cannot be a base", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key().is_none() {
            return Err("api_key must be set (TOMTOM_API_KEY)".to_string());
        }

        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
