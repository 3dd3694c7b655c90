//! TomTom geocoding client
//!
//! Converts free-form address strings to coordinates using the TomTom Search
//! API's structured-free geocode endpoint. Only the first (best) candidate is
//! used; there is no disambiguation and no caching.

use std::time::Duration;

use async_trait::async_trait;
use domain::{Coordinate, GeocodeResult};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::config::TomTomConfig;
use crate::models::{SearchResponse, describe_failure};

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Address was empty after trimming
    #[error("Invalid address")]
    InvalidAddress,

    /// Connection to geocoding service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Geocoding service answered with a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Provider returned zero candidates
    #[error("No location found for address: {0}")]
    AddressNotFound(String),

    /// Client misconfiguration (missing key, bad base URL)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out")]
    Timeout,
}

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form address to its best-matching coordinate
    async fn geocode(&self, address: &str) -> Result<GeocodeResult, GeocodingError>;
}

/// TomTom Search based geocoding client
#[derive(Debug)]
pub struct TomTomGeocodingClient {
    client: Client,
    config: TomTomConfig,
    api_key: SecretString,
}

impl TomTomGeocodingClient {
    /// Create a new TomTom geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the HTTP client cannot
    /// be initialized.
    pub fn new(config: &TomTomConfig) -> Result<Self, GeocodingError> {
        let api_key = config
            .api_key()
            .map(|key| SecretString::from(key.to_owned()))
            .ok_or_else(|| GeocodingError::ConfigurationError("missing API key".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("truckroute/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            api_key,
        })
    }
}

#[async_trait]
impl GeocodingClient for TomTomGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<GeocodeResult, GeocodingError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(GeocodingError::InvalidAddress);
        }

        let url = self
            .config
            .endpoint(&["search", "2", "geocode", &format!("{address}.json")])
            .map_err(GeocodingError::ConfigurationError)?;

        let mut params = vec![
            ("key", self.api_key.expose_secret()),
            ("limit", "1"),
        ];
        if !self.config.country_set.is_empty() {
            params.push(("countrySet", self.config.country_set.as_str()));
        }

        debug!(%address, "Geocoding address");

        let response = self
            .client
            .get(url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                warn!(%address, error = %e, "Geocoding request failed");
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        if !status.is_success() {
            warn!(%address, %status, %body, "Geocoding request rejected");
            return Err(GeocodingError::RequestFailed(describe_failure(status, &body)));
        }

        let search: SearchResponse =
            serde_json::from_str(&body).map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let best = search
            .results
            .into_iter()
            .next()
            .ok_or_else(|| GeocodingError::AddressNotFound(address.to_string()))?;

        let coordinate = Coordinate::new(best.position.lat, best.position.lon)
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let formatted_address = best
            .address
            .and_then(|a| a.freeform_address)
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| address.to_string());

        debug!(%address, %coordinate, %formatted_address, "Geocoded address");

        Ok(GeocodeResult::new(coordinate, formatted_address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_api_key() {
        let result = TomTomGeocodingClient::new(&TomTomConfig::default());
        assert!(matches!(result, Err(GeocodingError::ConfigurationError(_))));
    }

    #[test]
    fn test_new_with_key() {
        assert!(TomTomGeocodingClient::new(&TomTomConfig::for_testing()).is_ok());
    }

    #[test]
    fn test_geocoding_error_display() {
        assert_eq!(GeocodingError::InvalidAddress.to_string(), "Invalid address");

        let err = GeocodingError::AddressNotFound("zzzzinvalid".to_string());
        assert_eq!(
            err.to_string(),
            "No location found for address: zzzzinvalid"
        );

        assert!(GeocodingError::Timeout.to_string().contains("timed out"));
    }

    #[tokio::test]
    async fn test_blank_address_rejected_without_request() {
        let config = TomTomConfig {
            // Unroutable; a request attempt would surface as ConnectionFailed
            base_url: "http://127.0.0.1:1".to_string(),
            ..TomTomConfig::for_testing()
        };
        let client = TomTomGeocodingClient::new(&config).unwrap();

        for blank in ["", "   ", "\t\n"] {
            let err = client.geocode(blank).await.unwrap_err();
            assert!(matches!(err, GeocodingError::InvalidAddress));
        }
    }
}
