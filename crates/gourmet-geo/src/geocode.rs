//! Reverse geocoding through the HeartRails Geo API.

use gourmet_core::app_config::DEFAULT_GEOCODE_URL;
use gourmet_core::Coordinate;
use reqwest::{Client, Url};

use crate::error::GeoError;
use crate::http::{build_client, get_json, parse_url};
use crate::types::{GeoLocation, GeocodeEnvelope};

/// Resolves coordinates to the administrative area that contains them.
pub struct GeocodeClient {
    client: Client,
    base_url: Url,
}

impl GeocodeClient {
    /// Creates a client pointed at the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, GeoError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_GEOCODE_URL)
    }

    /// Creates a client with a custom endpoint (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`GeoError::InvalidUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, GeoError> {
        Ok(Self {
            client: build_client(timeout_secs, user_agent)?,
            base_url: parse_url(base_url)?,
        })
    }

    /// Returns the first location the service reports for `point`.
    ///
    /// # Errors
    ///
    /// - [`GeoError::Http`] on network failure or non-2xx status.
    /// - [`GeoError::Deserialize`] if the body is not the expected JSON.
    /// - [`GeoError::Api`] if the service reports an error, e.g. a point
    ///   outside its coverage.
    /// - [`GeoError::NoLocation`] if no location entry is present.
    pub async fn locate(&self, point: Coordinate) -> Result<GeoLocation, GeoError> {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("method", "searchByGeoLocation")
            .append_pair("x", &point.longitude.to_string())
            .append_pair("y", &point.latitude.to_string());

        let context = format!("searchByGeoLocation(x={}, y={})", point.longitude, point.latitude);
        let envelope: GeocodeEnvelope = get_json(&self.client, url, &context).await?;

        if let Some(message) = envelope.response.error {
            return Err(GeoError::Api {
                service: "geocode",
                message,
            });
        }

        envelope
            .response
            .location
            .into_iter()
            .next()
            .ok_or(GeoError::NoLocation(context))
    }

    /// Prefecture name containing `point`.
    ///
    /// # Errors
    ///
    /// Same as [`GeocodeClient::locate`].
    pub async fn resolve_prefecture(&self, point: Coordinate) -> Result<String, GeoError> {
        let location = self.locate(point).await?;
        tracing::debug!(
            prefecture = %location.prefecture,
            city = location.city.as_deref().unwrap_or(""),
            "resolved location"
        );
        Ok(location.prefecture)
    }
}
