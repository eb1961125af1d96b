//! Property-based tests for marker grouping
//!
//! These tests verify invariants that should hold for all inputs:
//! - Member counts always equal member list lengths
//! - One group per cluster plus one per noise point
//! - Sentinel-only inputs produce nothing
//! - Coincident markers end up together
//! - Grouping is deterministic

use geomark::{
    group_markers, Article, Coordinates, Dbscan, GroupingConfig, Marker, Point, SpatialClusterer,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Coordinates on a 0.1 degree grid so that duplicates and near neighbors are common
fn grid_coordinates() -> impl Strategy<Value = Coordinates> {
    (-30i32..30, -30i32..30)
        .prop_map(|(lat, lng)| Coordinates::new(lat as f64 / 10.0, lng as f64 / 10.0))
}

/// Mix of located and sentinel coordinates
fn marker_coordinates() -> impl Strategy<Value = Coordinates> {
    prop_oneof![
        4 => grid_coordinates(),
        1 => Just(Coordinates::new(0.0, 0.0)),
    ]
}

fn articles(coords: &[Coordinates]) -> Vec<Article> {
    coords
        .iter()
        .enumerate()
        .map(|(i, &c)| Article::new(format!("https://nytimes.com/{}", i), c))
        .collect()
}

type Membership = Vec<(u64, u64, BTreeSet<String>)>;

fn membership(markers: &[Article], config: &GroupingConfig) -> Membership {
    group_markers(markers, config)
        .unwrap()
        .iter()
        .map(|g| {
            (
                g.coordinates.lat.to_bits(),
                g.coordinates.lng.to_bits(),
                g.markers.iter().map(|m| m.key().to_string()).collect(),
            )
        })
        .collect()
}

proptest! {
    /// Property: number_items mirrors the member list
    #[test]
    fn prop_count_matches_members(
        coords in prop::collection::vec(marker_coordinates(), 0..40),
        min_points in 1usize..4
    ) {
        let markers = articles(&coords);
        let config = GroupingConfig::new(0.35, min_points);
        for group in group_markers(&markers, &config).unwrap() {
            prop_assert_eq!(group.number_items, group.markers.len());
        }
    }

    /// Property: one group per cluster and one per noise point
    #[test]
    fn prop_group_count_is_clusters_plus_noise(
        coords in prop::collection::vec(marker_coordinates(), 0..40)
    ) {
        let markers = articles(&coords);
        let config = GroupingConfig::default();
        let groups = group_markers(&markers, &config).unwrap();

        let points: Vec<Point> = coords
            .iter()
            .filter(|c| !c.is_unknown())
            .map(|&c| Point::from(c))
            .collect();
        let expected = if points.is_empty() {
            0
        } else {
            let clustering = Dbscan::new(config.eps, config.min_points)
                .unwrap()
                .cluster(&points)
                .unwrap();
            clustering.clusters.len() + clustering.noise.len()
        };

        prop_assert_eq!(groups.len(), expected);
    }

    /// Property: sentinel markers never produce groups or memberships
    #[test]
    fn prop_sentinels_are_invisible(
        coords in prop::collection::vec(marker_coordinates(), 0..40)
    ) {
        let markers = articles(&coords);
        let groups = group_markers(&markers, &GroupingConfig::default()).unwrap();

        for group in &groups {
            for marker in &group.markers {
                prop_assert!(!marker.coordinates().is_unknown());
            }
        }

        if coords.iter().all(|c| c.is_unknown()) {
            prop_assert!(groups.is_empty());
        }
    }

    /// Property: every located marker is placed, and coincident markers share a group
    #[test]
    fn prop_coincident_markers_grouped_together(
        coords in prop::collection::vec(grid_coordinates(), 1..40)
    ) {
        let markers = articles(&coords);
        let groups = group_markers(&markers, &GroupingConfig::default()).unwrap();

        for (i, a) in markers.iter().enumerate() {
            if a.coordinates.is_unknown() {
                continue;
            }
            let home: Vec<usize> = groups
                .iter()
                .enumerate()
                .filter(|(_, g)| g.markers.iter().any(|m| m.key() == a.key()))
                .map(|(gi, _)| gi)
                .collect();
            prop_assert!(!home.is_empty(), "marker {} was dropped", i);

            for b in markers.iter().filter(|b| b.coordinates.matches(&a.coordinates)) {
                let together = home
                    .iter()
                    .any(|&gi| groups[gi].markers.iter().any(|m| m.key() == b.key()));
                prop_assert!(together);
            }
        }
    }

    /// Property: grouping the same input twice gives the same groups
    #[test]
    fn prop_grouping_is_deterministic(
        coords in prop::collection::vec(marker_coordinates(), 0..40)
    ) {
        let markers = articles(&coords);
        let config = GroupingConfig::default();
        prop_assert_eq!(membership(&markers, &config), membership(&markers, &config));
    }
}
