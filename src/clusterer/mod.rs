mod centroid;
mod dbscan;
mod distance;
mod error;
mod types;


pub use centroid::compute_centroid;
pub use dbscan::Dbscan;
pub use distance::euclidean_distance;
pub use error::ClusterError;
pub use types::{Cluster, Clustering, Point};

/// A spatial clustering primitive.
///
/// Implementations partition `points` into clusters of indices plus a list of
/// noise indices. Every index appears in at most one cluster or in the noise.
pub trait SpatialClusterer {
    fn cluster(&self, points: &[Point]) -> Result<Clustering, ClusterError>;
}
