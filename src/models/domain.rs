use crate::core::distance::{haversine_distance, is_valid_latitude, is_valid_longitude};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn is_valid(&self) -> bool {
        is_valid_latitude(self.latitude) && is_valid_longitude(self.longitude)
    }

    /// Great-circle distance to another point in kilometers
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        haversine_distance(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

/// A customer evaluated for radius membership
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub location: GeoPoint,
}

/// Center point and radius of a circular region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusQuery {
    pub center: GeoPoint,
    pub radius_km: f64,
}

impl RadiusQuery {
    pub fn new(center: GeoPoint, radius_km: f64) -> Self {
        Self { center, radius_km }
    }
}

/// A candidate inside the radius, with its distance from the center
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusMatch {
    pub candidate: Candidate,
    pub distance_km: f64,
}

/// Matches ordered by ascending distance
#[derive(Debug, Clone, Default)]
pub struct RadiusResult {
    pub matches: Vec<RadiusMatch>,
    /// Number of candidates supplied to the scan, including skipped ones
    pub scanned: usize,
}

impl RadiusResult {
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RadiusMatch> {
        self.matches.iter()
    }
}

/// Customer record as stored by the company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    #[serde(rename = "companyId", default)]
    pub company_id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(rename = "dongCode", default)]
    pub dong_code: Option<String>,
}

impl Customer {
    /// Customers without both coordinates never reach the radius scan
    pub fn to_candidate(&self) -> Option<Candidate> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Candidate {
                id: self.id.clone(),
                name: self.name.clone(),
                location: GeoPoint::new(lat, lng),
            }),
            _ => None,
        }
    }
}

/// Named circular region a campaign is sent to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetingLocation {
    pub id: Uuid,
    #[serde(rename = "companyId", default)]
    pub company_id: Option<Uuid>,
    pub name: String,
    #[serde(rename = "centerLat")]
    pub center_lat: f64,
    #[serde(rename = "centerLng")]
    pub center_lng: f64,
    #[serde(rename = "radiusM")]
    pub radius_m: i32,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl TargetingLocation {
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(self.center_lat, self.center_lng)
    }

    pub fn radius_km(&self) -> f64 {
        meters_to_km(self.radius_m)
    }

    /// Stored radius is in meters; this is the only place it becomes kilometers
    pub fn radius_query(&self) -> RadiusQuery {
        RadiusQuery::new(self.center(), self.radius_km())
    }
}

/// Campaign message aimed at the customers inside its own circle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: Uuid,
    #[serde(rename = "companyId", default)]
    pub company_id: Option<Uuid>,
    pub name: String,
    pub message: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "radiusM")]
    pub radius_m: i32,
    #[serde(rename = "targetingLocationId", default)]
    pub targeting_location_id: Option<Uuid>,
    #[serde(rename = "scheduledAt", default)]
    pub scheduled_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Campaign {
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }

    pub fn radius_query(&self) -> RadiusQuery {
        RadiusQuery::new(self.center(), meters_to_km(self.radius_m))
    }
}

#[inline]
pub fn meters_to_km(meters: i32) -> f64 {
    f64::from(meters) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_without_coordinates_has_no_candidate() {
        let customer = Customer {
            id: "c1".to_string(),
            company_id: None,
            name: "No Location".to_string(),
            phone: None,
            lat: Some(37.5),
            lng: None,
            dong_code: None,
        };

        assert!(customer.to_candidate().is_none());
    }

    #[test]
    fn test_targeting_location_radius_in_km() {
        let location = TargetingLocation {
            id: Uuid::nil(),
            company_id: None,
            name: "Gangnam-daero".to_string(),
            center_lat: 37.498,
            center_lng: 127.0276,
            radius_m: 1500,
            memo: None,
            created_at: chrono::Utc::now(),
        };

        let query = location.radius_query();
        assert_eq!(query.radius_km, 1.5);
        assert_eq!(query.center, GeoPoint::new(37.498, 127.0276));
    }

    #[test]
    fn test_campaign_uses_its_own_circle() {
        let campaign = Campaign {
            id: Uuid::nil(),
            company_id: None,
            name: "Grand opening".to_string(),
            message: "10% off this week".to_string(),
            lat: 37.5665,
            lng: 126.9780,
            radius_m: 750,
            targeting_location_id: Some(Uuid::from_u128(1)),
            scheduled_at: None,
            created_at: chrono::Utc::now(),
        };

        let query = campaign.radius_query();
        assert_eq!(query.radius_km, 0.75);
        assert_eq!(query.center, GeoPoint::new(37.5665, 126.9780));
    }
}
