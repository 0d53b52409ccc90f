use crate::models::domain::{RadiusQuery, RadiusResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Success envelope shared by every API endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Center {
    pub lat: f64,
    pub lng: f64,
}

/// One customer inside the radius. Distance is pre-formatted to 2 decimals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyCustomer {
    pub id: String,
    pub name: String,
    pub distance: String,
}

/// Payload of the nearby-customers lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyCustomersData {
    pub count: usize,
    pub radius: f64,
    pub center: Center,
    pub customers: Vec<NearbyCustomer>,
}

impl NearbyCustomersData {
    pub fn from_result(query: &RadiusQuery, result: &RadiusResult) -> Self {
        let customers: Vec<NearbyCustomer> = result
            .iter()
            .map(|m| NearbyCustomer {
                id: m.candidate.id.clone(),
                name: m.candidate.name.clone(),
                distance: format!("{:.2}", m.distance_km),
            })
            .collect();

        Self {
            count: customers.len(),
            radius: query.radius_km,
            center: Center {
                lat: query.center.latitude,
                lng: query.center.longitude,
            },
            customers,
        }
    }
}

/// Payload of the campaign targeting preview: the nearby payload for the
/// campaign's circle plus the size of the scanned customer base
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignPreviewData {
    #[serde(rename = "campaignId")]
    pub campaign_id: Uuid,
    #[serde(rename = "campaignName")]
    pub campaign_name: String,
    #[serde(flatten)]
    pub reach: NearbyCustomersData,
    #[serde(rename = "totalCustomers")]
    pub total_customers: usize,
}

/// Payload of the reach estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReachEstimateData {
    pub count: usize,
    #[serde(rename = "radiusM")]
    pub radius_m: i32,
    pub center: Center,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{Candidate, GeoPoint, RadiusMatch};

    #[test]
    fn test_nearby_payload_formats_distance() {
        let query = RadiusQuery::new(GeoPoint::new(37.4980, 127.0276), 5.0);
        let result = RadiusResult {
            matches: vec![RadiusMatch {
                candidate: Candidate {
                    id: "5".to_string(),
                    name: "정현우".to_string(),
                    location: GeoPoint::new(37.4968, 127.0278),
                },
                distance_km: 0.134595,
            }],
            scanned: 1,
        };

        let data = NearbyCustomersData::from_result(&query, &result);

        assert_eq!(data.count, 1);
        assert_eq!(data.radius, 5.0);
        assert_eq!(data.center, Center { lat: 37.4980, lng: 127.0276 });
        assert_eq!(data.customers[0].distance, "0.13");
    }

    #[test]
    fn test_campaign_preview_is_flat() {
        let query = RadiusQuery::new(GeoPoint::new(37.4980, 127.0276), 1.0);
        let body = serde_json::to_value(CampaignPreviewData {
            campaign_id: Uuid::nil(),
            campaign_name: "Opening".to_string(),
            reach: NearbyCustomersData::from_result(&query, &RadiusResult::default()),
            total_customers: 10,
        })
        .unwrap();

        assert_eq!(body["count"], 0);
        assert_eq!(body["radius"], 1.0);
        assert_eq!(body["totalCustomers"], 10);
        assert_eq!(body["campaignName"], "Opening");
    }

    #[test]
    fn test_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::ok(ReachEstimateData {
            count: 3,
            radius_m: 2000,
            center: Center { lat: 37.5, lng: 127.0 },
        }))
        .unwrap();

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["count"], 3);
        assert_eq!(body["data"]["radiusM"], 2000);
    }
}
