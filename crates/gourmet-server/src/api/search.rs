use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use gourmet_core::Coordinate;
use serde::Deserialize;

use crate::{assemble::AnnotatedStore, middleware::RequestId};

use super::{map_search_error, ApiError, AppState};

/// Raw query parameters. Everything is optional so that missing or malformed
/// values are checked by the handler. Queries the extractor itself rejects,
/// such as a repeated key, are mapped to the same `invalid_arguments` body.
#[derive(Debug, Deserialize)]
pub(super) struct SearchParams {
    pub longitude: Option<String>,
    pub latitude: Option<String>,
    pub start: Option<String>,
}

impl SearchParams {
    fn origin(&self) -> Option<Coordinate> {
        Coordinate::parse(self.longitude.as_deref()?, self.latitude.as_deref()?)
    }

    fn start(&self) -> Option<i64> {
        self.start
            .as_deref()
            .map_or(Some(1), |raw| raw.trim().parse::<i64>().ok())
    }
}

pub(super) async fn search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<AnnotatedStore>>, ApiError> {
    let params = query_params(&req_id, query)?;
    let origin = valid_origin(&req_id, &params)?;
    let start = params.start().ok_or_else(|| {
        tracing::debug!(request_id = %req_id.0, start = ?params.start, "invalid start offset");
        ApiError::invalid_arguments()
    })?;

    let stores = state
        .search
        .search(origin, start)
        .await
        .map_err(|e| map_search_error(&req_id.0, &e))?;

    Ok(Json(stores))
}

pub(super) async fn search_all(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<AnnotatedStore>>, ApiError> {
    let params = query_params(&req_id, query)?;
    let origin = valid_origin(&req_id, &params)?;

    let stores = state
        .search
        .search_all(origin)
        .await
        .map_err(|e| map_search_error(&req_id.0, &e))?;

    Ok(Json(stores))
}

fn query_params(
    req_id: &RequestId,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<SearchParams, ApiError> {
    query.map(|Query(params)| params).map_err(|rejection| {
        tracing::debug!(request_id = %req_id.0, error = %rejection, "rejected query string");
        ApiError::invalid_arguments()
    })
}

fn valid_origin(req_id: &RequestId, params: &SearchParams) -> Result<Coordinate, ApiError> {
    params.origin().ok_or_else(|| {
        tracing::debug!(
            request_id = %req_id.0,
            longitude = ?params.longitude,
            latitude = ?params.latitude,
            "invalid coordinates"
        );
        ApiError::invalid_arguments()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(longitude: Option<&str>, latitude: Option<&str>, start: Option<&str>) -> SearchParams {
        SearchParams {
            longitude: longitude.map(str::to_string),
            latitude: latitude.map(str::to_string),
            start: start.map(str::to_string),
        }
    }

    #[test]
    fn start_defaults_to_one() {
        assert_eq!(params(None, None, None).start(), Some(1));
    }

    #[test]
    fn start_must_be_an_integer() {
        assert_eq!(params(None, None, Some("21")).start(), Some(21));
        assert_eq!(params(None, None, Some("abc")).start(), None);
        assert_eq!(params(None, None, Some("")).start(), None);
        assert_eq!(params(None, None, Some("1.5")).start(), None);
    }

    #[test]
    fn origin_requires_both_coordinates() {
        assert!(params(Some("135.5"), None, None).origin().is_none());
        assert!(params(None, Some("34.6"), None).origin().is_none());
        assert!(params(Some(""), Some("34.6"), None).origin().is_none());
        assert_eq!(
            params(Some("135.5"), Some("34.6"), None).origin(),
            Some(Coordinate::new(135.5, 34.6))
        );
    }
}
