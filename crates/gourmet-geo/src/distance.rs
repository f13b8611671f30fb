//! Walking distances through the Google distance-matrix API.
//!
//! All destinations go into a single request. The returned vector is
//! positional: entry `i` belongs to destination `i`.

use gourmet_core::app_config::DEFAULT_DISTANCE_URL;
use gourmet_core::Coordinate;
use reqwest::{Client, Url};

use crate::error::GeoError;
use crate::http::{build_client, get_json, parse_url};
use crate::types::{DistanceResult, MatrixElement, MatrixResponse};

pub struct DistanceClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl DistanceClient {
    /// Creates a client pointed at the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, GeoError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_DISTANCE_URL)
    }

    /// Creates a client with a custom endpoint (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`GeoError::InvalidUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, GeoError> {
        Ok(Self {
            client: build_client(timeout_secs, user_agent)?,
            api_key: api_key.to_owned(),
            base_url: parse_url(base_url)?,
        })
    }

    /// Walking distance and duration from `origin` to each destination.
    ///
    /// The result has exactly `destinations.len()` entries in the same order.
    /// A destination the service cannot route to is `None`. An empty
    /// destination list returns immediately without a request.
    ///
    /// # Errors
    ///
    /// - [`GeoError::Http`] on network failure or non-2xx status.
    /// - [`GeoError::Deserialize`] if the body is not the expected JSON.
    /// - [`GeoError::Api`] if the top-level status is not `OK`.
    /// - [`GeoError::LengthMismatch`] if the element count differs from the
    ///   destination count.
    pub async fn distances(
        &self,
        origin: Coordinate,
        destinations: &[Coordinate],
    ) -> Result<Vec<Option<DistanceResult>>, GeoError> {
        if destinations.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.build_url(origin, destinations);
        let response: MatrixResponse = get_json(
            &self.client,
            url,
            &format!("distancematrix(destinations={})", destinations.len()),
        )
        .await?;

        let results = parse_matrix(response, destinations.len())?;
        tracing::debug!(
            destinations = destinations.len(),
            unreachable = results.iter().filter(|r| r.is_none()).count(),
            "distance matrix complete"
        );
        Ok(results)
    }

    fn build_url(&self, origin: Coordinate, destinations: &[Coordinate]) -> Url {
        let destinations = destinations
            .iter()
            .map(Coordinate::lat_lng)
            .collect::<Vec<_>>()
            .join("|");

        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("units", "imperial")
            .append_pair("origins", &origin.lat_lng())
            .append_pair("destinations", &destinations)
            .append_pair("mode", "walking")
            .append_pair("key", &self.api_key);
        url
    }
}

fn parse_matrix(
    response: MatrixResponse,
    expected: usize,
) -> Result<Vec<Option<DistanceResult>>, GeoError> {
    if response.status != "OK" {
        return Err(GeoError::Api {
            service: "distance matrix",
            message: response.error_message.unwrap_or(response.status),
        });
    }

    let elements = response
        .rows
        .into_iter()
        .next()
        .map(|row| row.elements)
        .unwrap_or_default();

    if elements.len() != expected {
        return Err(GeoError::LengthMismatch {
            expected,
            actual: elements.len(),
        });
    }

    Ok(elements.into_iter().map(element_result).collect())
}

/// `NOT_FOUND`, `ZERO_RESULTS` and any other non-`OK` element are unreachable.
fn element_result(element: MatrixElement) -> Option<DistanceResult> {
    if element.status != "OK" {
        return None;
    }
    let distance = element.distance?;
    let duration = element.duration?;
    Some(DistanceResult {
        distance_value: distance.value.to_string(),
        duration_text: duration.text,
    })
}
