use std::collections::VecDeque;

use tracing::trace;

use crate::clusterer::{
    distance::squared_distance,
    error::ClusterError,
    types::{Cluster, Clustering, Point},
    SpatialClusterer,
};

/// Density-based clustering (DBSCAN) over planar points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dbscan {
    eps: f64,
    min_points: usize,
}

impl Dbscan {
    /// # Arguments
    /// * `eps` - Neighborhood radius, in the same units as the points
    /// * `min_points` - Neighborhood size (the point itself included) needed to seed a cluster
    pub fn new(eps: f64, min_points: usize) -> Result<Self, ClusterError> {
        if !eps.is_finite() || eps <= 0.0 {
            return Err(ClusterError::InvalidParameters(format!(
                "eps must be a positive finite number, got {}",
                eps
            )));
        }
        if min_points == 0 {
            return Err(ClusterError::InvalidParameters(
                "min_points must be at least 1".to_string(),
            ));
        }

        Ok(Self { eps, min_points })
    }

    pub fn eps(&self) -> f64 {
        self.eps
    }

    pub fn min_points(&self) -> usize {
        self.min_points
    }

    /// Indices of every point within `eps` of `points[i]`, including `i`
    fn region_query(&self, points: &[Point], i: usize) -> Vec<usize> {
        let eps_sq = self.eps * self.eps;
        let center = &points[i];

        points
            .iter()
            .enumerate()
            .filter(|(_, p)| squared_distance(center, p) <= eps_sq)
            .map(|(j, _)| j)
            .collect()
    }
}

impl SpatialClusterer for Dbscan {
    fn cluster(&self, points: &[Point]) -> Result<Clustering, ClusterError> {
        if points.is_empty() {
            return Err(ClusterError::EmptyInput);
        }
        if let Some(index) = points
            .iter()
            .position(|p| !p.lng.is_finite() || !p.lat.is_finite())
        {
            return Err(ClusterError::NonFinitePoint { index });
        }

        let n = points.len();
        let mut visited = vec![false; n];
        let mut claimed = vec![false; n];
        let mut clusters = Vec::new();

        for i in 0..n {
            if visited[i] {
                continue;
            }
            visited[i] = true;

            let neighbors = self.region_query(points, i);
            if neighbors.len() < self.min_points {
                // Not a core point; may still be reached as a border point later
                continue;
            }

            // 1. Seed a new cluster
            let mut members = vec![i];
            claimed[i] = true;

            // 2. Expand through density-reachable points
            let mut frontier: VecDeque<usize> = neighbors.into();
            while let Some(j) = frontier.pop_front() {
                if !visited[j] {
                    visited[j] = true;
                    let reach = self.region_query(points, j);
                    if reach.len() >= self.min_points {
                        frontier.extend(reach);
                    }
                }

                if !claimed[j] {
                    claimed[j] = true;
                    members.push(j);
                }
            }

            trace!(id = clusters.len(), size = members.len(), "dbscan cluster");
            clusters.push(Cluster {
                id: clusters.len(),
                points: members,
            });
        }

        // 3. Whatever no cluster claimed is noise
        let noise = (0..n).filter(|&i| !claimed[i]).collect();

        Ok(Clustering { clusters, noise })
    }
}
