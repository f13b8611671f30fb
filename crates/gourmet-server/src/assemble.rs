//! Turns directory stores into the records returned by the search endpoints.

use gourmet_core::Coordinate;
use gourmet_directory::StoreRecord;
use gourmet_geo::DistanceResult;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

const MAPS_URL: &str = "https://www.google.com/maps/";

/// Characters left unescaped in the maps query: alphanumerics plus `-._~/`.
const QUERY_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// A store decorated with its maps link, category labels and walking distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedStore {
    #[serde(flatten)]
    pub store: StoreRecord,
    pub link: String,
    pub is_open: bool,
    pub category_name: String,
    pub prefecture: String,
    pub distance: Option<String>,
    pub time: Option<String>,
}

/// Labels a store with the category it was found under. Distance and time
/// stay empty until [`apply_distances`] runs.
pub fn decorate(store: StoreRecord, prefecture: &str, category: &str) -> AnnotatedStore {
    AnnotatedStore {
        link: maps_link(store.location, &store.name),
        is_open: true,
        category_name: category.to_string(),
        prefecture: prefecture.to_string(),
        distance: None,
        time: None,
        store,
    }
}

pub fn maps_link(location: Coordinate, name: &str) -> String {
    format!(
        "{MAPS_URL}?ll={}&q={}",
        location.lat_lng(),
        utf8_percent_encode(name, QUERY_SAFE)
    )
}

/// Store locations in list order, for the distance matrix request.
pub fn destinations(stores: &[AnnotatedStore]) -> Vec<Coordinate> {
    stores.iter().map(|s| s.store.location).collect()
}

/// Pairs distance results with the stores they were computed for.
///
/// `results[i]` must belong to `stores[i]`, which holds when `results` came
/// from [`destinations`] of the same slice.
pub fn apply_distances(stores: &mut [AnnotatedStore], results: Vec<Option<DistanceResult>>) {
    debug_assert_eq!(stores.len(), results.len());
    for (store, result) in stores.iter_mut().zip(results) {
        if let Some(result) = result {
            store.distance = Some(result.distance_value);
            store.time = Some(result.duration_text);
        }
    }
}
