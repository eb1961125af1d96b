mod config;
mod engine;
mod error;
mod types;


pub use config::{GroupingConfig, DEFAULT_EPS, DEFAULT_MIN_POINTS};
pub use engine::{group_markers, MarkerGrouper};
pub use error::GroupingError;
pub use types::{MarkerGroup, MarkerResponse};
