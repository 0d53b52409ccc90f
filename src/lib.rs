//! MarketReach Geo - customer reach service for location-based campaigns
//!
//! This library provides the radius-membership query used to decide which
//! customers a targeting location reaches, plus the HTTP surface and the
//! candidate sources that feed it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{count_within_radius, find_within_radius, haversine_distance, GeoQueryError};
pub use self::models::{Candidate, GeoPoint, RadiusMatch, RadiusQuery, RadiusResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let query = RadiusQuery::new(GeoPoint::new(37.5665, 126.9780), 1.0);
        let result = find_within_radius(&query, &[]).unwrap();
        assert!(result.is_empty());
    }
}
