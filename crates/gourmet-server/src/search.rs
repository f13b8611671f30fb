//! Request orchestration: prefecture lookup, per-keyword directory searches,
//! then one batched distance lookup over every collected store.

use futures::stream::{self, StreamExt};
use gourmet_core::{AppConfig, CategoryTable, Coordinate};
use gourmet_directory::{DirectoryClient, DirectoryError};
use gourmet_geo::{DistanceClient, GeoError, GeocodeClient};
use thiserror::Error;

use crate::assemble::{apply_distances, decorate, destinations, AnnotatedStore};

/// Start offset used by the all-areas search.
const ALL_AREAS_START: i64 = 1;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("failed to resolve prefecture: {0}")]
    Geolocation(#[source] GeoError),

    #[error("unsupported prefecture: {0}")]
    UnsupportedLocation(String),

    #[error("directory search for '{keyword}' failed: {source}")]
    Directory {
        keyword: String,
        #[source]
        source: DirectoryError,
    },

    #[error("distance lookup failed: {0}")]
    Distance(#[source] GeoError),
}

pub struct SearchService {
    geocode: GeocodeClient,
    directory: DirectoryClient,
    distance: DistanceClient,
    categories: CategoryTable,
    concurrency: usize,
}

impl SearchService {
    pub fn new(
        geocode: GeocodeClient,
        directory: DirectoryClient,
        distance: DistanceClient,
        categories: CategoryTable,
        concurrency: usize,
    ) -> Self {
        Self {
            geocode,
            directory,
            distance,
            categories,
            concurrency: concurrency.max(1),
        }
    }

    /// Builds all upstream clients from configuration.
    pub fn from_config(config: &AppConfig, categories: CategoryTable) -> anyhow::Result<Self> {
        let timeout = config.request_timeout_secs;
        let user_agent = config.user_agent.as_str();
        let upstream = &config.upstream;

        let geocode = GeocodeClient::with_base_url(timeout, user_agent, &upstream.geocode)?;
        let directory = DirectoryClient::with_base_urls(
            &config.hotpepper_api_key,
            timeout,
            user_agent,
            &upstream.directory,
            &upstream.photo,
        )?
        .with_concurrency(config.fetch_concurrency);
        let distance = DistanceClient::with_base_url(
            &config.google_maps_api_key,
            timeout,
            user_agent,
            &upstream.distance,
        )?;

        Ok(Self::new(
            geocode,
            directory,
            distance,
            categories,
            config.fetch_concurrency,
        ))
    }

    /// Searches the keywords configured for the prefecture containing
    /// `origin`, starting at result offset `start`.
    pub async fn search(
        &self,
        origin: Coordinate,
        start: i64,
    ) -> Result<Vec<AnnotatedStore>, SearchError> {
        let prefecture = self.supported_prefecture(origin).await?;
        let keywords = self
            .categories
            .keywords_for(&prefecture)
            .ok_or_else(|| SearchError::UnsupportedLocation(prefecture.clone()))?;

        self.collect(origin, start, keywords, &prefecture).await
    }

    /// Searches the fixed all-areas keyword list. The origin must still lie
    /// in a supported prefecture; results carry an empty prefecture label.
    pub async fn search_all(&self, origin: Coordinate) -> Result<Vec<AnnotatedStore>, SearchError> {
        self.supported_prefecture(origin).await?;
        self.collect(origin, ALL_AREAS_START, self.categories.all_areas(), "")
            .await
    }

    async fn supported_prefecture(&self, origin: Coordinate) -> Result<String, SearchError> {
        let prefecture = self
            .geocode
            .resolve_prefecture(origin)
            .await
            .map_err(SearchError::Geolocation)?;

        if !self.categories.is_supported(&prefecture) {
            return Err(SearchError::UnsupportedLocation(prefecture));
        }
        Ok(prefecture)
    }

    /// Runs one directory search per keyword, keeping keyword order, then
    /// annotates the combined list with walking distances.
    async fn collect(
        &self,
        origin: Coordinate,
        start: i64,
        keywords: &[String],
        prefecture: &str,
    ) -> Result<Vec<AnnotatedStore>, SearchError> {
        let batches = stream::iter(keywords.iter().cloned())
            .map(|keyword| async move {
                let stores = self
                    .directory
                    .search(origin, start, &keyword)
                    .await
                    .map_err(|source| SearchError::Directory {
                        keyword: keyword.clone(),
                        source,
                    })?;
                Ok::<_, SearchError>(
                    stores
                        .into_iter()
                        .map(|store| decorate(store, prefecture, &keyword))
                        .collect::<Vec<_>>(),
                )
            })
            .buffered(self.concurrency)
            .collect::<Vec<_>>()
            .await;

        let mut stores = Vec::new();
        for batch in batches {
            stores.extend(batch?);
        }

        let results = self
            .distance
            .distances(origin, &destinations(&stores))
            .await
            .map_err(SearchError::Distance)?;
        apply_distances(&mut stores, results);

        tracing::info!(
            prefecture,
            keywords = keywords.len(),
            stores = stores.len(),
            "search complete"
        );
        Ok(stores)
    }
}
