//! Directory response types.
//!
//! The `Raw*` structs mirror the XML returned by the search endpoint and are
//! decoded with `quick_xml::de`. Unknown elements (genre, urls, coupons, ...)
//! are ignored.

use gourmet_core::Coordinate;
use serde::{Deserialize, Serialize};

/// Root `<results>` element of a search response.
#[derive(Debug, Deserialize)]
pub(crate) struct RawSearchResults {
    #[serde(default)]
    pub results_returned: Option<u32>,
    #[serde(default)]
    pub error: Option<RawApiError>,
    #[serde(default, rename = "shop")]
    pub shops: Vec<RawShop>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawApiError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawShop {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub budget: RawBudget,
    #[serde(default)]
    pub catch: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawBudget {
    #[serde(default)]
    pub name: String,
}

/// One shop from a search page, before its gallery has been fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopListing {
    pub id: String,
    pub name: String,
    pub location: Coordinate,
    pub budget: String,
    pub catch: String,
}

impl ShopListing {
    pub(crate) fn from_raw(raw: RawShop) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            location: Coordinate::new(raw.lng, raw.lat),
            budget: raw.budget.name,
            catch: raw.catch,
        }
    }
}

/// A store as returned to callers: listing fields plus gallery images.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreRecord {
    pub id: String,
    pub name: String,
    pub location: Coordinate,
    pub budget: String,
    pub catch: String,
    pub images: Vec<String>,
}

impl StoreRecord {
    #[must_use]
    pub fn from_listing(listing: ShopListing, images: Vec<String>) -> Self {
        Self {
            id: listing.id,
            name: listing.name,
            location: listing.location,
            budget: listing.budget,
            catch: listing.catch,
            images,
        }
    }
}
