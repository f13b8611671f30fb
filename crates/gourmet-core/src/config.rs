use crate::app_config::{
    AppConfig, Environment, UpstreamUrls, DEFAULT_DIRECTORY_URL, DEFAULT_DISTANCE_URL,
    DEFAULT_GEOCODE_URL, DEFAULT_PHOTO_URL,
};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Core parsing/validation, decoupled from the process environment so it can
/// be tested with a plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let hotpepper_api_key = require("HOTPEPPER_API_KEY")?;
    let google_maps_api_key = require("GOOGLE_MAPS_API_KEY")?;

    let env = parse_environment(&or_default("GOURMET_ENV", "development"))?;

    let bind_addr = or_default("GOURMET_BIND_ADDR", "0.0.0.0:5000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("GOURMET_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("GOURMET_LOG_LEVEL", "info");
    let categories_path = PathBuf::from(or_default(
        "GOURMET_CATEGORIES_PATH",
        "./config/categories.yaml",
    ));

    let request_timeout_secs = or_default("GOURMET_REQUEST_TIMEOUT_SECS", "30")
        .parse::<u64>()
        .map_err(|e| invalid("GOURMET_REQUEST_TIMEOUT_SECS", e.to_string()))?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "GOURMET_REQUEST_TIMEOUT_SECS",
            "must be at least 1".to_string(),
        ));
    }
    let user_agent = or_default("GOURMET_USER_AGENT", "gourmet/0.1 (nearby-search)");

    let fetch_concurrency = or_default("GOURMET_FETCH_CONCURRENCY", "4")
        .parse::<usize>()
        .map_err(|e| invalid("GOURMET_FETCH_CONCURRENCY", e.to_string()))?;
    if fetch_concurrency == 0 {
        return Err(invalid(
            "GOURMET_FETCH_CONCURRENCY",
            "must be at least 1".to_string(),
        ));
    }

    let upstream = UpstreamUrls {
        geocode: or_default("GOURMET_GEOCODE_URL", DEFAULT_GEOCODE_URL),
        directory: or_default("GOURMET_DIRECTORY_URL", DEFAULT_DIRECTORY_URL),
        photo: or_default("GOURMET_PHOTO_URL", DEFAULT_PHOTO_URL),
        distance: or_default("GOURMET_DISTANCE_URL", DEFAULT_DISTANCE_URL),
    };

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        categories_path,
        hotpepper_api_key,
        google_maps_api_key,
        request_timeout_secs,
        user_agent,
        fetch_concurrency,
        upstream,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "GOURMET_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
