// Public API exports
pub mod clusterer;
pub mod grouping;
pub mod marker;
pub mod store;

// Re-export main types for convenience
pub use marker::{Article, Coordinates, Image, Marker, MarkerItem, MarkerKind};

pub use clusterer::{Cluster, ClusterError, Clustering, Dbscan, Point, SpatialClusterer};

pub use grouping::{
    group_markers, GroupingConfig, GroupingError, MarkerGroup, MarkerGrouper, MarkerResponse,
    DEFAULT_EPS, DEFAULT_MIN_POINTS,
};

pub use store::{InMemoryStore, JsonFileStore, MarkerCollection, MarkerSource, StoreError};
