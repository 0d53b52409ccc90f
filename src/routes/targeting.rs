use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::core::{count_within_radius, find_within_radius, validate_query};
use crate::models::{
    meters_to_km, ApiResponse, Center, EstimateReachQuery, GeoPoint, NearbyCustomersData, RadiusQuery,
    ReachEstimateData,
};
use crate::routes::customers::ensure_within_max_radius;
use crate::routes::{stored_circle_error, ApiError, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/targeting-locations/estimate-reach", web::get().to(estimate_reach))
        .route("/targeting-locations/{id}/customers", web::get().to(customers_in_location));
}

/// Estimated reach of a circle before it is saved as a targeting location
///
/// GET /api/targeting-locations/estimate-reach?lat=..&lng=..&radiusM=2000
async fn estimate_reach(
    state: web::Data<AppState>,
    params: web::Query<EstimateReachQuery>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = params.validate() {
        tracing::info!("Validation failed for estimate_reach: {:?}", errors);
        return Err(ApiError::BadRequest(errors.to_string()));
    }

    let query = RadiusQuery::new(GeoPoint::new(params.lat, params.lng), meters_to_km(params.radius_m));
    validate_query(&query)?;
    ensure_within_max_radius(&state, query.radius_km)?;

    let candidates = state.customers.candidates(params.company_id).await.map_err(|e| {
        tracing::error!("Failed to load candidates for reach estimate: {}", e);
        ApiError::from(e)
    })?;

    let count = count_within_radius(&query, &candidates)?;

    tracing::info!(
        "Estimated reach {} for ({}, {}) within {}m",
        count,
        params.lat,
        params.lng,
        params.radius_m
    );

    Ok(HttpResponse::Ok().json(ApiResponse::ok(ReachEstimateData {
        count,
        radius_m: params.radius_m,
        center: Center {
            lat: params.lat,
            lng: params.lng,
        },
    })))
}

/// Customers inside a saved targeting location, nearest first
///
/// GET /api/targeting-locations/{id}/customers
async fn customers_in_location(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let location = state
        .locations
        .find_by_id(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load targeting location {}: {}", id, e);
            ApiError::from(e)
        })?
        .ok_or_else(|| ApiError::NotFound(format!("Targeting location not found: {}", id)))?;

    let query = location.radius_query();

    let candidates = state.customers.candidates(None).await.map_err(|e| {
        tracing::error!("Failed to load candidates for location {}: {}", id, e);
        ApiError::from(e)
    })?;

    let result = find_within_radius(&query, &candidates)
        .map_err(|e| stored_circle_error(&format!("targeting location {}", id), e))?;

    tracing::debug!(
        "Targeting location {} ({}) reaches {} of {} customers",
        id,
        location.name,
        result.len(),
        result.scanned
    );

    Ok(HttpResponse::Ok().json(ApiResponse::ok(NearbyCustomersData::from_result(&query, &result))))
}
