use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::GeoError;

pub(crate) fn build_client(timeout_secs: u64, user_agent: &str) -> Result<Client, GeoError> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .build()?)
}

pub(crate) fn parse_url(raw: &str) -> Result<Url, GeoError> {
    Url::parse(raw).map_err(|e| GeoError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Sends a GET request, asserts a 2xx status, and decodes the JSON body.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: Url,
    context: &str,
) -> Result<T, GeoError> {
    let body = client.get(url).send().await?.error_for_status()?.text().await?;
    serde_json::from_str(&body).map_err(|e| GeoError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}
