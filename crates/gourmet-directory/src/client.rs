//! HTTP client for the HotPepper Gourmet search API and its photo galleries.

use std::time::Duration;

use futures::stream::{self, StreamExt};
use gourmet_core::app_config::{DEFAULT_DIRECTORY_URL, DEFAULT_PHOTO_URL};
use gourmet_core::Coordinate;
use reqwest::{Client, Url};

use crate::error::DirectoryError;
use crate::gallery::{gallery_path, parse_gallery, PhotoGallery};
use crate::types::{RawSearchResults, ShopListing, StoreRecord};

/// Shops requested per search call.
pub const PAGE_SIZE: u32 = 10;

/// Client for the directory search endpoint and the per-store gallery host.
///
/// Use [`DirectoryClient::new`] for production or
/// [`DirectoryClient::with_base_urls`] to point at mock servers in tests.
pub struct DirectoryClient {
    client: Client,
    api_key: String,
    search_url: Url,
    photo_base: Url,
    concurrency: usize,
}

impl DirectoryClient {
    /// Creates a client pointed at the production endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, DirectoryError> {
        Self::with_base_urls(
            api_key,
            timeout_secs,
            user_agent,
            DEFAULT_DIRECTORY_URL,
            DEFAULT_PHOTO_URL,
        )
    }

    /// Creates a client with custom search and gallery base URLs.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`DirectoryError::InvalidUrl`] if either URL does not parse.
    pub fn with_base_urls(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        search_url: &str,
        photo_base: &str,
    ) -> Result<Self, DirectoryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let search_url = parse_url(search_url)?;
        // Gallery paths are joined onto this base, so it must end with a slash.
        let photo_base = parse_url(&format!("{}/", photo_base.trim_end_matches('/')))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            search_url,
            photo_base,
            concurrency: 1,
        })
    }

    /// Sets how many gallery requests may be in flight at once. Result order
    /// is unaffected.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Searches for shops matching `keyword` near `origin` and attaches each
    /// shop's gallery images.
    ///
    /// Stores come back in the order the directory listed them. Gallery
    /// failures leave a store with no images and do not fail the search.
    ///
    /// # Errors
    ///
    /// Same as [`DirectoryClient::search_listings`].
    pub async fn search(
        &self,
        origin: Coordinate,
        start: i64,
        keyword: &str,
    ) -> Result<Vec<StoreRecord>, DirectoryError> {
        let listings = self.search_listings(origin, start, keyword).await?;

        let stores = stream::iter(listings)
            .map(|listing| async move {
                let images = self.fetch_gallery(&listing.id).await.into_images(&listing.id);
                StoreRecord::from_listing(listing, images)
            })
            .buffered(self.concurrency)
            .collect::<Vec<_>>()
            .await;

        Ok(stores)
    }

    /// Fetches one page of listings without galleries.
    ///
    /// # Errors
    ///
    /// - [`DirectoryError::Http`] on network failure or non-2xx status.
    /// - [`DirectoryError::Deserialize`] if the body is not a results document.
    /// - [`DirectoryError::Api`] if the directory reports an error.
    pub async fn search_listings(
        &self,
        origin: Coordinate,
        start: i64,
        keyword: &str,
    ) -> Result<Vec<ShopListing>, DirectoryError> {
        let url = self.build_search_url(origin, start, keyword);
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let listings = parse_search_results(&body, keyword)?;
        tracing::debug!(keyword, start, count = listings.len(), "directory search complete");
        Ok(listings)
    }

    /// Fetches a store's photo gallery. Never fails; problems are reported as
    /// [`PhotoGallery::Unavailable`].
    pub async fn fetch_gallery(&self, store_id: &str) -> PhotoGallery {
        let url = match self.photo_base.join(&gallery_path(store_id)) {
            Ok(url) => url,
            Err(e) => {
                return PhotoGallery::Unavailable {
                    reason: format!("invalid gallery URL: {e}"),
                }
            }
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status);
        let body = match response {
            Ok(response) => response.text().await,
            Err(e) => Err(e),
        };

        match body {
            Ok(xml) => match parse_gallery(&xml) {
                Ok(images) => PhotoGallery::Loaded(images),
                Err(e) => PhotoGallery::Unavailable {
                    reason: format!("malformed gallery: {e}"),
                },
            },
            Err(e) => PhotoGallery::Unavailable {
                reason: e.to_string(),
            },
        }
    }

    fn build_search_url(&self, origin: Coordinate, start: i64, keyword: &str) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .append_pair("lng", &origin.longitude.to_string())
            .append_pair("lat", &origin.latitude.to_string())
            .append_pair("start", &start.to_string())
            .append_pair("count", &PAGE_SIZE.to_string())
            .append_pair("keyword", keyword);
        url
    }
}

fn parse_url(raw: &str) -> Result<Url, DirectoryError> {
    Url::parse(raw).map_err(|e| DirectoryError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Decodes a search response. A reported count of zero yields no listings.
pub(crate) fn parse_search_results(
    xml: &str,
    keyword: &str,
) -> Result<Vec<ShopListing>, DirectoryError> {
    let results: RawSearchResults =
        quick_xml::de::from_str(xml).map_err(|e| DirectoryError::Deserialize {
            context: format!("search(keyword={keyword})"),
            source: e,
        })?;

    if let Some(error) = results.error {
        return Err(DirectoryError::Api {
            code: error.code,
            message: error.message,
        });
    }

    if results.results_returned == Some(0) {
        return Ok(Vec::new());
    }

    Ok(results.shops.into_iter().map(ShopListing::from_raw).collect())
}
