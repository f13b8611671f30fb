pub mod app_config;
pub mod categories;
pub mod config;
pub mod error;
pub mod geo;

pub use app_config::{AppConfig, Environment, UpstreamUrls};
pub use categories::{load_categories, CategoryTable, PrefectureCategories};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use geo::Coordinate;
