use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Coordinates, Marker, MarkerKind};

/// A geotagged photograph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(rename = "byLine", default, skip_serializing_if = "String::is_empty")]
    pub byline: String,
    #[serde(rename = "byLineTitle", default, skip_serializing_if = "String::is_empty")]
    pub byline_title: String,
    #[serde(default)]
    pub credit: String,
    #[serde(default)]
    pub caption: String,
    #[serde(rename = "dateTaken", default)]
    pub date_taken: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default)]
    pub country: String,
    pub url: String,
    #[serde(default)]
    pub coordinates: Coordinates,
}

impl Image {
    pub fn new(url: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            byline: String::new(),
            byline_title: String::new(),
            credit: String::new(),
            caption: String::new(),
            date_taken: None,
            city: String::new(),
            state: String::new(),
            country: String::new(),
            url: url.into(),
            coordinates,
        }
    }
}

impl Marker for Image {
    fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    fn key(&self) -> &str {
        &self.url
    }

    fn kind(&self) -> MarkerKind {
        MarkerKind::Image
    }
}
