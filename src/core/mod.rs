// Core algorithm exports
pub mod distance;
pub mod radius;

pub use distance::{haversine_distance, is_valid_latitude, is_valid_longitude, EARTH_RADIUS_KM};
pub use radius::{count_within_radius, find_within_radius, validate_point, validate_query, GeoQueryError};
