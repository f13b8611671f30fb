use thiserror::Error;

/// Errors returned by the directory client.
///
/// Photo-gallery failures never surface here; see [`crate::PhotoGallery`].
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Network or TLS failure, or a non-2xx status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not the expected XML document.
    #[error("XML deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: quick_xml::DeError,
    },

    /// The directory answered with an `<error>` element.
    #[error("directory API error {code}: {message}")]
    Api { code: String, message: String },

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
