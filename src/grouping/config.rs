use serde::{Deserialize, Serialize};

use crate::clusterer::{ClusterError, Dbscan};

/// Neighborhood radius in raw coordinate degrees.
///
/// Planar distance on (lng, lat), so this is not a fixed physical distance.
pub const DEFAULT_EPS: f64 = 0.35;

/// Neighborhood size, the point itself included, needed to seed a cluster
pub const DEFAULT_MIN_POINTS: usize = 2;

/// Parameters of the density clustering behind marker grouping
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    pub eps: f64,
    pub min_points: usize,
}

impl GroupingConfig {
    pub fn new(eps: f64, min_points: usize) -> Self {
        Self { eps, min_points }
    }

    /// Build the clusterer these parameters describe
    pub fn dbscan(&self) -> Result<Dbscan, ClusterError> {
        Dbscan::new(self.eps, self.min_points)
    }
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EPS, DEFAULT_MIN_POINTS)
    }
}
