use crate::domain::model::Article;
use crate::domain::ports::{ArticleStore, SnapshotStorage};
use crate::utils::error::{CatalogueError, Result, StorageErrorKind};
use serde::{Deserialize, Serialize};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    articles: &'a [Article],
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Snapshot {
    version: u32,
    articles: Vec<Article>,
}

pub fn encode_snapshot(articles: &[Article]) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec_pretty(&SnapshotRef {
        version: SNAPSHOT_VERSION,
        articles,
    })
}

/// Decodes a snapshot. Any structural, version or per-article validation
/// failure is reported as a message; there is no partial recovery.
pub fn decode_snapshot(data: &[u8]) -> std::result::Result<Vec<Article>, String> {
    let snapshot: Snapshot = serde_json::from_slice(data).map_err(|e| e.to_string())?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(format!(
            "unsupported snapshot version {} (expected {})",
            snapshot.version, SNAPSHOT_VERSION
        ));
    }
    Ok(snapshot.articles)
}

/// Catalogue held in memory and persisted as a whole snapshot after every mutation.
#[derive(Debug)]
pub struct SnapshotArticleStore<S: SnapshotStorage> {
    storage: S,
    articles: Vec<Article>,
}

impl<S: SnapshotStorage> SnapshotArticleStore<S> {
    /// Restores the catalogue. A missing snapshot is an empty catalogue.
    pub fn load(storage: S) -> Result<Self> {
        let articles = match storage.read_snapshot()? {
            Some(data) => decode_snapshot(&data).map_err(|message| {
                CatalogueError::storage(
                    StorageErrorKind::Deserialization,
                    storage.location(),
                    message,
                )
            })?,
            None => {
                tracing::warn!(
                    "No catalogue found at {}, starting with an empty catalogue",
                    storage.location()
                );
                Vec::new()
            }
        };

        tracing::debug!("Loaded {} articles from {}", articles.len(), storage.location());

        Ok(Self { storage, articles })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Writes the full collection, replacing the previous snapshot.
    pub fn save(&self) -> Result<()> {
        let data = encode_snapshot(&self.articles).map_err(|e| {
            CatalogueError::storage(StorageErrorKind::Serialization, self.storage.location(), e)
        })?;
        self.storage.write_snapshot(&data)?;
        tracing::debug!(
            "Saved {} articles to {}",
            self.articles.len(),
            self.storage.location()
        );
        Ok(())
    }
}

impl<S: SnapshotStorage> ArticleStore for SnapshotArticleStore<S> {
    fn list(&self) -> &[Article] {
        &self.articles
    }

    fn find(&self, id: u32) -> Option<&Article> {
        self.articles.iter().find(|article| article.id() == id)
    }

    fn add(&mut self, article: Article) -> Result<()> {
        let id = article.id();
        if self.find(id).is_some() {
            return Err(CatalogueError::DuplicateId { id });
        }

        self.articles.push(article);
        if let Err(e) = self.save() {
            self.articles.pop();
            return Err(e);
        }

        tracing::debug!("Added article {}", id);
        Ok(())
    }

    fn remove(&mut self, id: u32) -> Result<()> {
        if self.find(id).is_none() {
            return Err(CatalogueError::NotFound { id });
        }

        let previous = self.articles.clone();
        self.articles.retain(|article| article.id() != id);
        if let Err(e) = self.save() {
            self.articles = previous;
            return Err(e);
        }

        tracing::debug!("Removed article {}", id);
        Ok(())
    }
}
