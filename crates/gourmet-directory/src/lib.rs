//! Client for the HotPepper Gourmet restaurant directory.
//!
//! [`DirectoryClient::search`] returns [`StoreRecord`]s for one keyword near a
//! coordinate, each enriched with the images from its photo gallery.

pub mod client;
pub mod error;
pub mod gallery;
pub mod types;

pub use client::{DirectoryClient, PAGE_SIZE};
pub use error::DirectoryError;
pub use gallery::PhotoGallery;
pub use types::{ShopListing, StoreRecord};
