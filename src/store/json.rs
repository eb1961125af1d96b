use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::{MarkerCollection, MarkerSource, StoreError};
use crate::marker::{Article, Image, MarkerItem};

/// On-disk layout of a marker store
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub images: Vec<Image>,
}

/// Marker source backed by a JSON document. The file is re-read on every fetch.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<StoreDocument, StoreError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl MarkerSource for JsonFileStore {
    fn fetch_articles(&self) -> Result<Vec<Article>, StoreError> {
        Ok(self.load()?.articles)
    }

    fn fetch_images(&self) -> Result<Vec<Image>, StoreError> {
        Ok(self.load()?.images)
    }

    /// Reads the file once so both collections come from the same snapshot
    fn fetch(&self, collection: MarkerCollection) -> Result<Vec<MarkerItem>, StoreError> {
        let doc = self.load()?;
        let mut items = Vec::new();

        if matches!(collection, MarkerCollection::Articles | MarkerCollection::All) {
            items.extend(doc.articles.into_iter().map(MarkerItem::from));
        }
        if matches!(collection, MarkerCollection::Images | MarkerCollection::All) {
            items.extend(doc.images.into_iter().map(MarkerItem::from));
        }

        Ok(items)
    }
}
