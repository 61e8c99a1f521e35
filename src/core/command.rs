use crate::core::catalogue::CatalogueService;
use crate::domain::model::{Article, ArticleType, NewArticle};
use crate::domain::ports::ArticleStore;
use crate::domain::rules::ValidationRules;
use crate::utils::error::{CatalogueError, Result};

/// A fully parsed catalogue command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(NewArticle),
    List { id: Option<i64> },
    Delete { id: i64 },
    Count { article_type: Option<ArticleType> },
    MeanPrice,
    Oldest,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add(_) => "add",
            Command::List { .. } => "list",
            Command::Delete { .. } => "delete",
            Command::Count { .. } => "count",
            Command::MeanPrice => "meanprice",
            Command::Oldest => "oldest",
        }
    }
}

fn lookup_id(id: i64) -> Result<u32> {
    u32::try_from(id)
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| CatalogueError::InvalidArgument {
            argument: "id".to_string(),
            value: id.to_string(),
            reason: "ids are positive integers".to_string(),
        })
}

/// Runs a command and returns the text to print.
pub fn execute<S: ArticleStore>(
    service: &mut CatalogueService<S>,
    command: Command,
    rules: &ValidationRules,
) -> Result<String> {
    tracing::debug!("Executing '{}'", command.name());

    let output = match command {
        Command::Add(new) => {
            let article = Article::try_new(new, rules)?;
            let id = article.id();
            service.add_article(article)?;
            format!("Info: Article {} added.", id)
        }
        Command::List { id: Some(id) } => {
            let id = lookup_id(id)?;
            service.require_article(id)?.to_string()
        }
        Command::List { id: None } => {
            let articles = service.articles();
            if articles.is_empty() {
                return Err(CatalogueError::EmptyCatalogue {
                    operation: "the article list",
                });
            }
            articles
                .iter()
                .map(Article::to_string)
                .collect::<Vec<_>>()
                .join("\n\n")
        }
        Command::Delete { id } => {
            let id = lookup_id(id)?;
            service.delete_article(id)?;
            format!("Info: Article {} deleted.", id)
        }
        Command::Count { article_type } => {
            let count = match article_type {
                Some(article_type) => service.count_by_type(article_type),
                None => service.total_count(),
            };
            count.to_string()
        }
        Command::MeanPrice => service.price_mean()?.to_string(),
        Command::Oldest => service
            .oldest_article_ids()?
            .iter()
            .map(|id| format!("Id: {}", id))
            .collect::<Vec<_>>()
            .join("\n"),
    };

    Ok(output)
}
