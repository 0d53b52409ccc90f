use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Query string of the nearby-customers lookup
///
/// GET /api/customers/nearby?lat=..&lng=..&radius=..&companyId=..
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyCustomersQuery {
    pub lat: f64,
    pub lng: f64,
    /// Kilometers. Falls back to the configured default when absent.
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(alias = "company_id", rename = "companyId", default)]
    pub company_id: Option<Uuid>,
}

/// Query string of the reach estimate, radius given in meters
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EstimateReachQuery {
    pub lat: f64,
    pub lng: f64,
    #[validate(range(min = 1, message = "radiusM must be at least 1 meter"))]
    #[serde(alias = "radius_m", rename = "radiusM")]
    pub radius_m: i32,
    #[serde(alias = "company_id", rename = "companyId", default)]
    pub company_id: Option<Uuid>,
}
