use serde::{Deserialize, Serialize};

/// A latitude/longitude pair as stored on articles and images.
///
/// `(0, 0)` is not a position: it means the item has no known location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True for the `(0, 0)` "no location" sentinel.
    ///
    /// Exact comparison against `0.0`; `-0.0` compares equal and counts as unknown.
    pub fn is_unknown(&self) -> bool {
        self.lat == 0.0 && self.lng == 0.0
    }

    /// Both fields are finite (no NaN, no infinities)
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Exact floating equality on both fields
    pub fn matches(&self, other: &Coordinates) -> bool {
        self.lat == other.lat && self.lng == other.lng
    }
}
