use std::collections::HashMap;

use tracing::{debug, trace};

use crate::clusterer::{Clustering, Dbscan, Point, SpatialClusterer};
use crate::grouping::{
    config::GroupingConfig,
    error::GroupingError,
    types::{MarkerGroup, MarkerResponse},
};
use crate::marker::Marker;

/// Turns a flat list of markers into map groups using a clustering primitive.
pub struct MarkerGrouper<C = Dbscan> {
    clusterer: C,
}

impl MarkerGrouper<Dbscan> {
    /// Grouper backed by DBSCAN with the given parameters
    pub fn new(config: &GroupingConfig) -> Result<Self, GroupingError> {
        let clusterer = config.dbscan()?;
        debug!(
            eps = clusterer.eps(),
            min_points = clusterer.min_points(),
            "marker grouper configured"
        );
        Ok(Self { clusterer })
    }
}

impl<C: SpatialClusterer> MarkerGrouper<C> {
    pub fn with_clusterer(clusterer: C) -> Self {
        Self { clusterer }
    }

    /// Group `markers` and wrap the result for serving
    pub fn respond<'a, M: Marker>(
        &self,
        markers: &'a [M],
    ) -> Result<MarkerResponse<'a, M>, GroupingError> {
        self.group(markers).map(MarkerResponse::new)
    }

    /// Group `markers` into cluster groups followed by noise groups.
    ///
    /// Markers at the `(0, 0)` sentinel never appear in the output. Membership is
    /// decided by exact coordinate equality: first against the points of each
    /// cluster, then, for anything left over, against every group's
    /// representative coordinates. A leftover marker that matches no group is
    /// dropped.
    pub fn group<'a, M: Marker>(
        &self,
        markers: &'a [M],
    ) -> Result<Vec<MarkerGroup<'a, M>>, GroupingError> {
        if let Some(bad) = markers.iter().find(|m| !m.coordinates().is_finite()) {
            let c = bad.coordinates();
            return Err(GroupingError::InvalidCoordinates {
                key: bad.key().to_string(),
                lat: c.lat,
                lng: c.lng,
            });
        }

        // 1. Points and visited flags for every located marker, in input order
        let located: Vec<&'a M> = markers
            .iter()
            .filter(|m| !m.coordinates().is_unknown())
            .collect();
        let points: Vec<Point> = located
            .iter()
            .map(|m| Point::from(m.coordinates()))
            .collect();
        let mut visited: HashMap<&'a str, bool> =
            located.iter().map(|&m| (m.key(), false)).collect();

        if points.is_empty() {
            debug!(input = markers.len(), "no located markers to group");
            return Ok(Vec::new());
        }

        let clustering = self.clusterer.cluster(&points)?;
        clustering.check_indices(points.len())?;
        let Clustering { clusters, noise } = clustering;

        let mut groups = Vec::with_capacity(clusters.len() + noise.len());
        let mut cluster_to_group: HashMap<usize, usize> = HashMap::new();

        // 2. One group per cluster, at its centroid
        for cluster in &clusters {
            let centroid = cluster.centroid(&points).to_coordinates();
            debug!(
                cluster = cluster.id,
                size = cluster.points.len(),
                lat = centroid.lat,
                lng = centroid.lng,
                "cluster"
            );
            cluster_to_group.insert(cluster.id, groups.len());
            groups.push(MarkerGroup::new(centroid));
        }

        // 3. One group per noise point, at the point itself
        for &n in &noise {
            groups.push(MarkerGroup::new(points[n].to_coordinates()));
        }

        // 4. Markers sitting on a cluster point join that cluster's group
        for &marker in &located {
            if is_visited(&visited, marker.key()) {
                continue;
            }
            let coords = marker.coordinates();

            for cluster in &clusters {
                for &p in &cluster.points {
                    if !is_visited(&visited, marker.key())
                        && coords.matches(&points[p].to_coordinates())
                    {
                        visited.insert(marker.key(), true);
                        if let Some(&g) = cluster_to_group.get(&cluster.id) {
                            groups[g].push(marker);
                        }
                    }
                }
            }
        }

        // 5. Everything else joins every group it sits exactly on
        for &marker in &located {
            if is_visited(&visited, marker.key()) {
                continue;
            }
            let coords = marker.coordinates();

            let mut matched = false;
            for group in groups.iter_mut() {
                if coords.matches(&group.coordinates) {
                    visited.insert(marker.key(), true);
                    group.push(marker);
                    matched = true;
                }
            }

            if !matched {
                trace!(key = marker.key(), "marker matched no group, dropped");
            }
        }

        debug!(
            input = markers.len(),
            located = located.len(),
            clusters = clusters.len(),
            noise = noise.len(),
            "markers grouped"
        );

        Ok(groups)
    }
}

fn is_visited(visited: &HashMap<&str, bool>, key: &str) -> bool {
    visited.get(key).copied().unwrap_or(false)
}

/// Group markers with DBSCAN using `config`
pub fn group_markers<'a, M: Marker>(
    markers: &'a [M],
    config: &GroupingConfig,
) -> Result<Vec<MarkerGroup<'a, M>>, GroupingError> {
    MarkerGrouper::new(config)?.group(markers)
}
