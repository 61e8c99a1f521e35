use crate::domain::model::Article;
use crate::utils::error::Result;

/// Raw snapshot persistence. Implementations move whole byte blobs only.
pub trait SnapshotStorage {
    /// `Ok(None)` when no snapshot has been written yet.
    fn read_snapshot(&self) -> Result<Option<Vec<u8>>>;
    fn write_snapshot(&self, data: &[u8]) -> Result<()>;
    /// Human-readable location, used in logs and error messages.
    fn location(&self) -> String;
}

/// The catalogue's capability surface: list, find, add, remove.
pub trait ArticleStore {
    /// All articles in insertion order.
    fn list(&self) -> &[Article];

    /// A lookup miss is `None`, never an error.
    fn find(&self, id: u32) -> Option<&Article>;

    /// Fails with `DuplicateId` when the id is taken. Persists the whole collection.
    fn add(&mut self, article: Article) -> Result<()>;

    /// Fails with `NotFound` when the id is absent. Persists the whole collection.
    fn remove(&mut self, id: u32) -> Result<()>;
}
