use super::{MarkerSource, StoreError};
use crate::marker::{Article, Image};

/// Marker source over owned vectors
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    pub articles: Vec<Article>,
    pub images: Vec<Image>,
}

impl InMemoryStore {
    pub fn new(articles: Vec<Article>, images: Vec<Image>) -> Self {
        Self { articles, images }
    }
}

impl MarkerSource for InMemoryStore {
    fn fetch_articles(&self) -> Result<Vec<Article>, StoreError> {
        Ok(self.articles.clone())
    }

    fn fetch_images(&self) -> Result<Vec<Image>, StoreError> {
        Ok(self.images.clone())
    }
}
