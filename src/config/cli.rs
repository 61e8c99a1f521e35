use crate::core::command::Command;
use crate::domain::model::{ArticleType, NewArticle, NewArticleKind};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "article-catalogue")]
#[command(about = "Manage a catalogue of books and DVDs stored in a single file")]
pub struct CliConfig {
    /// Catalogue file (default: articles.json)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Reject release years before this one (e.g. 1436)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub min_release_year: Option<i32>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Add a book or a DVD
    Add {
        #[command(subcommand)]
        article: AddArticle,
    },
    /// Show all articles, or the one with the given id
    List {
        #[arg(allow_negative_numbers = true)]
        id: Option<i64>,
    },
    /// Delete the article with the given id
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
    /// Count all articles, or only books or DVDs
    Count {
        #[arg(value_enum)]
        article_type: Option<CountType>,
    },
    /// Mean price over all articles
    #[command(name = "meanprice")]
    MeanPrice,
    /// Ids of the articles with the oldest release year
    Oldest,
}

#[derive(Debug, Clone, Subcommand)]
pub enum AddArticle {
    Book {
        #[command(flatten)]
        common: CommonArticleArgs,
        #[arg(allow_negative_numbers = true)]
        pages: i64,
    },
    Dvd {
        #[command(flatten)]
        common: CommonArticleArgs,
        /// Length in minutes
        #[arg(allow_negative_numbers = true)]
        length: i64,
        /// Age rating: 0, 6, 12, 16 or 18
        #[arg(allow_negative_numbers = true)]
        min_age: i64,
    },
}

#[derive(Debug, Clone, Args)]
pub struct CommonArticleArgs {
    #[arg(allow_negative_numbers = true)]
    pub id: i64,
    pub title: String,
    pub publisher: String,
    #[arg(allow_negative_numbers = true)]
    pub release_year: i32,
    #[arg(allow_negative_numbers = true)]
    pub base_price: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CountType {
    Book,
    Dvd,
}

impl From<CountType> for ArticleType {
    fn from(count_type: CountType) -> Self {
        match count_type {
            CountType::Book => ArticleType::Book,
            CountType::Dvd => ArticleType::Dvd,
        }
    }
}

impl CommonArticleArgs {
    fn into_new_article(self, kind: NewArticleKind) -> NewArticle {
        NewArticle {
            id: self.id,
            title: self.title,
            publisher: self.publisher,
            release_year: self.release_year,
            base_price: self.base_price,
            kind,
        }
    }
}

impl From<CliCommand> for Command {
    fn from(command: CliCommand) -> Self {
        match command {
            CliCommand::Add {
                article: AddArticle::Book { common, pages },
            } => Command::Add(common.into_new_article(NewArticleKind::Book { pages })),
            CliCommand::Add {
                article: AddArticle::Dvd {
                    common,
                    length,
                    min_age,
                },
            } => Command::Add(common.into_new_article(NewArticleKind::Dvd { length, min_age })),
            CliCommand::List { id } => Command::List { id },
            CliCommand::Delete { id } => Command::Delete { id },
            CliCommand::Count { article_type } => Command::Count {
                article_type: article_type.map(ArticleType::from),
            },
            CliCommand::MeanPrice => Command::MeanPrice,
            CliCommand::Oldest => Command::Oldest,
        }
    }
}
