pub mod app;
pub mod catalogue;
pub mod command;
pub mod store;

pub use crate::domain::model::{AgeRating, Article, ArticleKind, ArticleType, NewArticle, NewArticleKind};
pub use crate::domain::ports::{ArticleStore, SnapshotStorage};
pub use crate::utils::error::Result;
