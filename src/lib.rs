pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{LocalStorage, MemoryStorage};
pub use crate::config::Settings;
pub use crate::core::{
    app::CatalogueApp, catalogue::CatalogueService, command::Command, store::SnapshotArticleStore,
};
pub use crate::domain::model::{AgeRating, Article, ArticleKind, ArticleType, NewArticle, NewArticleKind};
pub use crate::domain::ports::{ArticleStore, SnapshotStorage};
pub use crate::domain::rules::ValidationRules;
pub use crate::utils::error::{CatalogueError, Result};
