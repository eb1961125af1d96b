mod article;
mod coordinates;
mod image;


pub use article::Article;
pub use coordinates::Coordinates;
pub use image::Image;

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Anything that can be placed on the map.
///
/// Grouping only ever looks at `coordinates()` and `key()`; `kind()` exists for
/// display and logging.
pub trait Marker {
    /// Location of the item; `(0, 0)` means unknown
    fn coordinates(&self) -> Coordinates;

    /// Stable identifying key (the item URL). Items sharing a key are treated
    /// as the same item while grouping.
    fn key(&self) -> &str;

    fn kind(&self) -> MarkerKind;
}

/// Concrete variants of markers served by the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Article,
    Image,
}

impl MarkerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerKind::Article => "article",
            MarkerKind::Image => "image",
        }
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Either kind of marker, for feeds that mix articles and images.
///
/// Read with a `type` tag, written as the bare article or image.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MarkerItem {
    Article(Article),
    Image(Image),
}

impl Serialize for MarkerItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MarkerItem::Article(a) => a.serialize(serializer),
            MarkerItem::Image(i) => i.serialize(serializer),
        }
    }
}

impl Marker for MarkerItem {
    fn coordinates(&self) -> Coordinates {
        match self {
            MarkerItem::Article(a) => a.coordinates(),
            MarkerItem::Image(i) => i.coordinates(),
        }
    }

    fn key(&self) -> &str {
        match self {
            MarkerItem::Article(a) => a.key(),
            MarkerItem::Image(i) => i.key(),
        }
    }

    fn kind(&self) -> MarkerKind {
        match self {
            MarkerItem::Article(_) => MarkerKind::Article,
            MarkerItem::Image(_) => MarkerKind::Image,
        }
    }
}

impl From<Article> for MarkerItem {
    fn from(article: Article) -> Self {
        MarkerItem::Article(article)
    }
}

impl From<Image> for MarkerItem {
    fn from(image: Image) -> Self {
        MarkerItem::Image(image)
    }
}
