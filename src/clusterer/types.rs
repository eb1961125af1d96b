use super::error::ClusterError;
use crate::marker::Coordinates;

/// A point in clustering space, stored as (longitude, latitude).
///
/// This is the reverse of [`Coordinates`]; use the conversions instead of
/// reading fields across the two types.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub lng: f64,
    pub lat: f64,
}

impl Point {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    pub fn to_coordinates(self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

impl From<Coordinates> for Point {
    fn from(c: Coordinates) -> Self {
        Self {
            lng: c.lng,
            lat: c.lat,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub id: usize,
    /// Indices into the point list handed to the clusterer
    pub points: Vec<usize>,
}

impl Cluster {
    /// Coordinate-wise mean of the member points
    pub fn centroid(&self, points: &[Point]) -> Point {
        let members: Vec<Point> = self.points.iter().map(|&i| points[i]).collect();
        super::centroid::compute_centroid(&members)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Clustering {
    pub clusters: Vec<Cluster>,
    /// Indices not claimed by any cluster
    pub noise: Vec<usize>,
}

impl Clustering {
    /// Check every cluster and noise index against a point list of length `len`
    pub fn check_indices(&self, len: usize) -> Result<(), ClusterError> {
        let out_of_range = self
            .clusters
            .iter()
            .flat_map(|c| c.points.iter())
            .chain(self.noise.iter())
            .find(|&&index| index >= len);

        match out_of_range {
            Some(&index) => Err(ClusterError::IndexOutOfRange { index, len }),
            None => Ok(()),
        }
    }
}
