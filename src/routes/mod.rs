// Route exports
pub mod campaigns;
pub mod customers;
pub mod health;
pub mod targeting;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse, ResponseError};
use std::sync::Arc;
use thiserror::Error;

use crate::config::QuerySettings;
use crate::core::GeoQueryError;
use crate::models::ErrorResponse;
use crate::services::{CampaignRepository, CustomerRepository, RepositoryError, TargetingLocationRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<dyn CustomerRepository>,
    pub locations: Arc<dyn TargetingLocationRepository>,
    pub campaigns: Arc<dyn CampaignRepository>,
    pub query: QuerySettings,
}

/// Errors surfaced by handlers, rendered as `{ "error": "<message>" }`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<GeoQueryError> for ApiError {
    fn from(err: GeoQueryError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(what) => ApiError::NotFound(format!("Not found: {}", what)),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

/// A circle read back from the store that fails validation is a server-side
/// data fault, so it maps to 500 rather than the caller's 400
pub(crate) fn stored_circle_error(owner: &str, err: GeoQueryError) -> ApiError {
    tracing::error!("Stored circle for {} is invalid: {}", owner, err);
    ApiError::Internal(err.to_string())
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::BadRequest(format!("Invalid JSON: {}", err)).into()
}

/// Handle query string errors (missing or non-numeric parameters)
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    ApiError::BadRequest(format!("Invalid query: {}", err)).into()
}

/// Handle path segment errors (e.g. malformed UUIDs)
pub fn handle_path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Path error on {}: {}", req.path(), err);
    ApiError::BadRequest(format!("Invalid path: {}", err)).into()
}

/// Register extractor error handlers so every 4xx carries the JSON error body
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
        .app_data(web::PathConfig::default().error_handler(handle_path_error));
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_extractors)
        .configure(health::configure)
        .service(
            web::scope("/api")
                .configure(customers::configure)
                .configure(targeting::configure)
                .configure(campaigns::configure),
        );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_errors_are_bad_requests() {
        let err: ApiError = GeoQueryError::InvalidRadius(0.0).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_repository_errors_map_to_status() {
        let not_found: ApiError = RepositoryError::NotFound("location".to_string()).into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let down: ApiError = RepositoryError::Unavailable("connection refused".to_string()).into();
        assert_eq!(down.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_stored_circle_errors_are_internal() {
        let err = stored_circle_error(
            "targeting location",
            GeoQueryError::InvalidCoordinate {
                field: "latitude",
                value: 95.0,
            },
        );
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
