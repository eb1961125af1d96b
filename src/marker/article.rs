use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Coordinates, Marker, MarkerKind};

/// A geotagged news article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "byLine", default)]
    pub byline: String,
    #[serde(default)]
    pub coordinates: Coordinates,
    #[serde(rename = "firstParagraph", default)]
    pub first_paragraph: String,
    #[serde(rename = "generalLocation", default)]
    pub general_location: String,
    #[serde(default)]
    pub headline: String,
    #[serde(rename = "imageSmall", default)]
    pub image_small_url: String,
    #[serde(rename = "pubDate", default)]
    pub publish_date: String,
    #[serde(default)]
    pub snippet: String,
    pub url: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Article {
    /// Minimal article with only the fields grouping looks at
    pub fn new(url: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            byline: String::new(),
            coordinates,
            first_paragraph: String::new(),
            general_location: String::new(),
            headline: String::new(),
            image_small_url: String::new(),
            publish_date: String::new(),
            snippet: String::new(),
            url: url.into(),
            created_at: None,
        }
    }
}

impl Marker for Article {
    fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    fn key(&self) -> &str {
        &self.url
    }

    fn kind(&self) -> MarkerKind {
        MarkerKind::Article
    }
}
