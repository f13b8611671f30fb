use thiserror::Error;

/// Errors returned by the geocoding and distance-matrix clients.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Network or TLS failure, or a non-2xx status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The service answered with an error status or message.
    #[error("{service} API error: {message}")]
    Api {
        service: &'static str,
        message: String,
    },

    #[error("no location found for {0}")]
    NoLocation(String),

    /// The distance matrix did not return one element per destination.
    #[error("distance matrix returned {actual} elements for {expected} destinations")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
