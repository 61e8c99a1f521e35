use crate::domain::model::{Article, ArticleType};
use crate::domain::ports::ArticleStore;
use crate::domain::pricing::{self, MeanError};
use crate::utils::error::{CatalogueError, Result};
use rust_decimal::Decimal;

/// Article management on top of an [`ArticleStore`]: the store's
/// operations plus read-only statistics.
#[derive(Debug)]
pub struct CatalogueService<S: ArticleStore> {
    store: S,
}

impl<S: ArticleStore> CatalogueService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn articles(&self) -> &[Article] {
        self.store.list()
    }

    pub fn article(&self, id: u32) -> Option<&Article> {
        self.store.find(id)
    }

    /// Like [`Self::article`], but a miss is an error.
    pub fn require_article(&self, id: u32) -> Result<&Article> {
        self.store.find(id).ok_or(CatalogueError::NotFound { id })
    }

    pub fn add_article(&mut self, article: Article) -> Result<()> {
        self.store.add(article)
    }

    pub fn delete_article(&mut self, id: u32) -> Result<()> {
        self.store.remove(id)
    }

    pub fn total_count(&self) -> usize {
        self.store.list().len()
    }

    pub fn count_by_type(&self, article_type: ArticleType) -> usize {
        self.store
            .list()
            .iter()
            .filter(|article| article.article_type() == article_type)
            .count()
    }

    pub fn price_mean(&self) -> Result<Decimal> {
        let prices: Vec<Decimal> = self.store.list().iter().map(Article::price).collect();
        pricing::mean(&prices).map_err(|e| match e {
            MeanError::Empty => CatalogueError::EmptyCatalogue {
                operation: "the mean price",
            },
            MeanError::Overflow => CatalogueError::ArithmeticOverflow {
                operation: "the mean price",
            },
        })
    }

    pub fn oldest_release_year(&self) -> Result<i32> {
        self.store
            .list()
            .iter()
            .map(Article::release_year)
            .min()
            .ok_or(CatalogueError::EmptyCatalogue {
                operation: "the oldest release year",
            })
    }

    /// Ids of every article sharing the oldest release year, in insertion order.
    pub fn oldest_article_ids(&self) -> Result<Vec<u32>> {
        let oldest = self.oldest_release_year()?;
        Ok(self
            .store
            .list()
            .iter()
            .filter(|article| article.release_year() == oldest)
            .map(Article::id)
            .collect())
    }
}
