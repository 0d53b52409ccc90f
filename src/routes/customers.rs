use actix_web::{web, HttpResponse};

use crate::core::{find_within_radius, validate_query};
use crate::models::{ApiResponse, GeoPoint, NearbyCustomersData, NearbyCustomersQuery, RadiusQuery};
use crate::routes::{ApiError, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/customers/nearby", web::get().to(nearby_customers));
}

/// Nearby customers endpoint
///
/// GET /api/customers/nearby?lat=37.4980&lng=127.0276&radius=5
///
/// Response:
/// ```json
/// {
///   "success": true,
///   "data": {
///     "count": 1,
///     "radius": 5.0,
///     "center": { "lat": 37.498, "lng": 127.0276 },
///     "customers": [{ "id": "5", "name": "...", "distance": "0.13" }]
///   }
/// }
/// ```
async fn nearby_customers(
    state: web::Data<AppState>,
    params: web::Query<NearbyCustomersQuery>,
) -> Result<HttpResponse, ApiError> {
    let radius_km = params.radius.unwrap_or(state.query.default_radius_km);
    let query = RadiusQuery::new(GeoPoint::new(params.lat, params.lng), radius_km);

    tracing::info!(
        "Nearby lookup: center=({}, {}), radius={}km, company={:?}",
        params.lat,
        params.lng,
        radius_km,
        params.company_id
    );

    // Reject bad input before touching the store
    validate_query(&query).map_err(|e| {
        tracing::info!("Rejected nearby lookup: {}", e);
        ApiError::from(e)
    })?;
    ensure_within_max_radius(&state, radius_km)?;

    let candidates = state.customers.candidates(params.company_id).await.map_err(|e| {
        tracing::error!("Failed to load candidates: {}", e);
        ApiError::from(e)
    })?;

    tracing::debug!("Scanning {} candidates", candidates.len());

    let result = find_within_radius(&query, &candidates)?;

    tracing::info!(
        "Found {} customers within {}km (from {} candidates)",
        result.len(),
        radius_km,
        result.scanned
    );

    Ok(HttpResponse::Ok().json(ApiResponse::ok(NearbyCustomersData::from_result(&query, &result))))
}

pub(crate) fn ensure_within_max_radius(state: &AppState, radius_km: f64) -> Result<(), ApiError> {
    match state.query.max_radius_km {
        Some(max) if radius_km > max => Err(ApiError::BadRequest(format!(
            "Invalid radius: {} exceeds the maximum of {} km",
            radius_km, max
        ))),
        _ => Ok(()),
    }
}
