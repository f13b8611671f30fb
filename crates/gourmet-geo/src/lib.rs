//! Clients for the location services: reverse geocoding (coordinate →
//! prefecture) and the walking distance matrix.

pub mod distance;
pub mod error;
pub mod geocode;
mod http;
pub mod types;

pub use distance::DistanceClient;
pub use error::GeoError;
pub use geocode::GeocodeClient;
pub use types::{DistanceResult, GeoLocation};
