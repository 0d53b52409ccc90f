use crate::core::distance::{haversine_distance, is_valid_latitude, is_valid_longitude};
use crate::models::{Candidate, GeoPoint, RadiusMatch, RadiusQuery, RadiusResult};
use thiserror::Error;

/// Errors raised by a radius query. Either one is fatal to the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoQueryError {
    #[error("Invalid {field}: {value} is outside the valid range")]
    InvalidCoordinate { field: &'static str, value: f64 },

    #[error("Invalid radius: {0} (must be a finite number greater than 0 km)")]
    InvalidRadius(f64),
}

/// Check that a point holds real geographic coordinates
pub fn validate_point(point: &GeoPoint) -> Result<(), GeoQueryError> {
    if !is_valid_latitude(point.latitude) {
        return Err(GeoQueryError::InvalidCoordinate {
            field: "latitude",
            value: point.latitude,
        });
    }
    if !is_valid_longitude(point.longitude) {
        return Err(GeoQueryError::InvalidCoordinate {
            field: "longitude",
            value: point.longitude,
        });
    }
    Ok(())
}

/// Check the center and radius of a query. The center is checked first.
pub fn validate_query(query: &RadiusQuery) -> Result<(), GeoQueryError> {
    validate_point(&query.center)?;

    if !query.radius_km.is_finite() || query.radius_km <= 0.0 {
        return Err(GeoQueryError::InvalidRadius(query.radius_km));
    }

    Ok(())
}

/// Find every candidate within `query.radius_km` of the center, nearest first
///
/// Linear scan over `candidates`:
/// 1. Candidates with out-of-range coordinates are skipped
/// 2. Haversine distance is computed for the rest
/// 3. Those with `distance_km <= radius_km` are kept (boundary inclusive)
/// 4. Kept matches are stably sorted by distance, so equal distances
///    preserve input order
///
/// The input is never mutated and no partial result is returned on error.
pub fn find_within_radius(
    query: &RadiusQuery,
    candidates: &[Candidate],
) -> Result<RadiusResult, GeoQueryError> {
    validate_query(query)?;

    let center = query.center;

    let mut matches: Vec<RadiusMatch> = candidates
        .iter()
        .filter(|candidate| candidate.location.is_valid())
        .filter_map(|candidate| {
            let distance_km = haversine_distance(
                center.latitude,
                center.longitude,
                candidate.location.latitude,
                candidate.location.longitude,
            );

            if distance_km <= query.radius_km {
                Some(RadiusMatch {
                    candidate: candidate.clone(),
                    distance_km,
                })
            } else {
                None
            }
        })
        .collect();

    // sort_by is stable
    matches.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(RadiusResult {
        matches,
        scanned: candidates.len(),
    })
}

/// Reach of a circle: how many candidates fall inside it
pub fn count_within_radius(
    query: &RadiusQuery,
    candidates: &[Candidate],
) -> Result<usize, GeoQueryError> {
    validate_query(query)?;

    let center = query.center;
    let count = candidates
        .iter()
        .filter(|candidate| candidate.location.is_valid())
        .filter(|candidate| {
            haversine_distance(
                center.latitude,
                center.longitude,
                candidate.location.latitude,
                candidate.location.longitude,
            ) <= query.radius_km
        })
        .count();

    Ok(count)
}
