use super::types::Point;

pub fn compute_centroid(points: &[Point]) -> Point {
    let mut out = Point::default();
    if points.is_empty() {
        return out;
    }

    for p in points {
        out.lng += p.lng;
        out.lat += p.lat;
    }

    let n = points.len() as f64;
    out.lng /= n;
    out.lat /= n;

    out
}
