mod error;
mod json;
mod memory;


pub use error::StoreError;
pub use json::{JsonFileStore, StoreDocument};
pub use memory::InMemoryStore;

use std::fmt;
use std::str::FromStr;

use crate::marker::{Article, Image, MarkerItem};

/// Where grouped markers come from
pub trait MarkerSource {
    fn fetch_articles(&self) -> Result<Vec<Article>, StoreError>;

    fn fetch_images(&self) -> Result<Vec<Image>, StoreError>;

    /// Fetch one collection as marker items, articles before images for `All`
    fn fetch(&self, collection: MarkerCollection) -> Result<Vec<MarkerItem>, StoreError> {
        let mut items = Vec::new();

        if matches!(collection, MarkerCollection::Articles | MarkerCollection::All) {
            items.extend(self.fetch_articles()?.into_iter().map(MarkerItem::from));
        }
        if matches!(collection, MarkerCollection::Images | MarkerCollection::All) {
            items.extend(self.fetch_images()?.into_iter().map(MarkerItem::from));
        }

        Ok(items)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerCollection {
    Articles,
    Images,
    All,
}

impl MarkerCollection {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerCollection::Articles => "articles",
            MarkerCollection::Images => "images",
            MarkerCollection::All => "all",
        }
    }
}

impl fmt::Display for MarkerCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarkerCollection {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "articles" => Ok(MarkerCollection::Articles),
            "images" => Ok(MarkerCollection::Images),
            "all" => Ok(MarkerCollection::All),
            other => Err(StoreError::UnknownCollection(other.to_string())),
        }
    }
}
