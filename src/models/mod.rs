// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{meters_to_km, Campaign, Candidate, Customer, GeoPoint, RadiusMatch, RadiusQuery, RadiusResult, TargetingLocation};
pub use requests::{EstimateReachQuery, NearbyCustomersQuery};
pub use responses::{ApiResponse, CampaignPreviewData, Center, ErrorResponse, HealthResponse, NearbyCustomer, NearbyCustomersData, ReachEstimateData};
