//! Application configuration

mod route;
mod server;

pub use integration_tomtom::TomTomConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
pub use route::{GeometryFormat, RequestMode, RouteConfig};
pub use server::ServerConfig;
use tracing::debug;

/// Environment variable consulted for the provider key when the layered
/// sources leave `tomtom.api_key` unset
pub const TOMTOM_API_KEY_ENV: &str = "TOMTOM_API_KEY";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Route endpoint behaviour
    #[serde(default)]
    pub route: RouteConfig,

    /// TomTom provider configuration
    #[serde(default)]
    pub tomtom: TomTomConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional `config` file and the
    /// environment (e.g. `TRUCKROUTE_SERVER__PORT=8080`)
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("tomtom.base_url", "https://api.tomtom.com")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("TRUCKROUTE")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.apply_api_key_fallback(std::env::var(TOMTOM_API_KEY_ENV).ok());
        Ok(config)
    }

    /// Fill in the provider key from a fallback source if none was configured
    fn apply_api_key_fallback(&mut self, fallback: Option<String>) {
        if self.tomtom.api_key().is_some() {
            return;
        }
        if let Some(key) = fallback.filter(|k| !k.trim().is_empty()) {
            debug!("Using TomTom API key from {TOMTOM_API_KEY_ENV}");
            self.tomtom.api_key = Some(SecretString::from(key));
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if !matches!(
            self.server.log_format.to_lowercase().as_str(),
            "text" | "json"
        ) {
            return Err(format!(
                "server.log_format must be 'text' or 'json', got '{}'",
                self.server.log_format
            ));
        }

        self.tomtom
            .validate()
            .map_err(|e| format!("tomtom: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn empty_source_uses_defaults() {
        let config = from_toml("");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.route.request_mode, RequestMode::Address);
        assert_eq!(config.route.geometry, GeometryFormat::Points);
        assert_eq!(config.tomtom.base_url, "https://api.tomtom.com");
        assert!(config.tomtom.api_key().is_none());
    }

    #[test]
    fn file_overrides_sections() {
        let config = from_toml(
            r#"
            [server]
            port = 8080
            allowed_origins = []

            [route]
            request_mode = "coordinates"
            geometry = "polyline"

            [tomtom]
            api_key = "from-file"
            country_set = "NG,GH"
            "#,
        );

        assert_eq!(config.server.port, 8080);
        assert!(config.server.allowed_origins.is_empty());
        assert_eq!(config.route.request_mode, RequestMode::Coordinates);
        assert_eq!(config.route.geometry, GeometryFormat::Polyline);
        assert_eq!(config.tomtom.api_key(), Some("from-file"));
        assert_eq!(config.tomtom.country_set, "NG,GH");
    }

    #[test]
    fn fallback_key_fills_missing_key() {
        let mut config = AppConfig::default();
        config.apply_api_key_fallback(Some("env-key".to_string()));
        assert_eq!(config.tomtom.api_key(), Some("env-key"));
    }

    #[test]
    fn fallback_key_does_not_override_configured_key() {
        let mut config = AppConfig {
            tomtom: TomTomConfig::default().with_api_key("configured"),
            ..Default::default()
        };
        config.apply_api_key_fallback(Some("env-key".to_string()));
        assert_eq!(config.tomtom.api_key(), Some("configured"));
    }

    #[test]
    fn blank_fallback_key_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_api_key_fallback(Some("  ".to_string()));
        assert!(config.tomtom.api_key().is_none());
    }

    #[test]
    fn validate_requires_api_key() {
        let err = AppConfig::default().validate().unwrap_err();
        assert!(err.contains("TOMTOM_API_KEY"));
    }

    #[test]
    fn validate_rejects_unknown_log_format() {
        let mut config = AppConfig {
            tomtom: TomTomConfig::for_testing(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        config.server.log_format = "xml".to_string();
        assert!(config.validate().unwrap_err().contains("log_format"));
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config = AppConfig {
            tomtom: TomTomConfig::default().with_api_key("super-secret"),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
