use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_GEOCODE_URL: &str = "http://geoapi.heartrails.com/api/json";
pub const DEFAULT_DIRECTORY_URL: &str = "https://webservice.recruit.co.jp/hotpepper/gourmet/v1/";
pub const DEFAULT_PHOTO_URL: &str = "https://www.hotpepper.jp/s/flash/store_photo_slide/";
pub const DEFAULT_DISTANCE_URL: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Endpoints of the three upstream services. Overridable so tests can point
/// the clients at local mock servers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamUrls {
    pub geocode: String,
    pub directory: String,
    pub photo: String,
    pub distance: String,
}

impl Default for UpstreamUrls {
    fn default() -> Self {
        Self {
            geocode: DEFAULT_GEOCODE_URL.to_string(),
            directory: DEFAULT_DIRECTORY_URL.to_string(),
            photo: DEFAULT_PHOTO_URL.to_string(),
            distance: DEFAULT_DISTANCE_URL.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub categories_path: PathBuf,
    pub hotpepper_api_key: String,
    pub google_maps_api_key: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub fetch_concurrency: usize,
    pub upstream: UpstreamUrls,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("categories_path", &self.categories_path)
            .field("hotpepper_api_key", &"[redacted]")
            .field("google_maps_api_key", &"[redacted]")
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("fetch_concurrency", &self.fetch_concurrency)
            .field("upstream", &self.upstream)
            .finish()
    }
}
