use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClusterError {
    #[error("Invalid clustering parameters: {0}")]
    InvalidParameters(String),

    #[error("Cannot cluster an empty point list")]
    EmptyInput,

    #[error("Point {index} has non-finite coordinates")]
    NonFinitePoint { index: usize },

    #[error("Clustering referenced point {index} but only {len} points exist")]
    IndexOutOfRange { index: usize, len: usize },
}
