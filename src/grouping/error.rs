use thiserror::Error;

use crate::clusterer::ClusterError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GroupingError {
    #[error("Marker {key} has invalid coordinates (lat: {lat}, lng: {lng})")]
    InvalidCoordinates { key: String, lat: f64, lng: f64 },

    #[error("Clustering failed: {0}")]
    Clustering(#[from] ClusterError),
}
