use super::types::Point;

/// Planar distance in raw degree units. Longitude and latitude are treated as
/// Cartesian axes; there is no great-circle correction.
pub fn euclidean_distance(a: &Point, b: &Point) -> f64 {
    squared_distance(a, b).sqrt()
}

pub fn squared_distance(a: &Point, b: &Point) -> f64 {
    let dx = a.lng - b.lng;
    let dy = a.lat - b.lat;
    dx * dx + dy * dy
}
