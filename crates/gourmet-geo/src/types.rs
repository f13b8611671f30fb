//! Response types for the geocoding and distance-matrix services.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeEnvelope {
    pub response: GeocodeBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeBody {
    #[serde(default)]
    pub location: Vec<GeoLocation>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One administrative area near the queried point.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeoLocation {
    pub prefecture: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MatrixResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub rows: Vec<MatrixRow>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MatrixRow {
    #[serde(default)]
    pub elements: Vec<MatrixElement>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MatrixElement {
    pub status: String,
    #[serde(default)]
    pub distance: Option<MatrixValue>,
    #[serde(default)]
    pub duration: Option<MatrixValue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MatrixValue {
    pub text: String,
    pub value: u64,
}

/// Walking distance and time to one destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceResult {
    /// Distance in meters, as a decimal string.
    pub distance_value: String,
    /// Human-readable duration such as `"6 mins"`.
    pub duration_text: String,
}
