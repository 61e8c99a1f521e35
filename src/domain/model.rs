use crate::domain::pricing;
use crate::domain::rules::{current_year, ValidationRules};
use crate::utils::error::{CatalogueError, InvalidField, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// DVD age rating. Only these classes exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeRating {
    NoRestriction,
    SixAndUp,
    TwelveAndUp,
    SixteenAndUp,
    EighteenAndUp,
}

impl AgeRating {
    pub fn min_age(self) -> u8 {
        match self {
            AgeRating::NoRestriction => 0,
            AgeRating::SixAndUp => 6,
            AgeRating::TwelveAndUp => 12,
            AgeRating::SixteenAndUp => 16,
            AgeRating::EighteenAndUp => 18,
        }
    }

    pub fn discount_percentage(self) -> u32 {
        match self {
            AgeRating::NoRestriction => 20,
            AgeRating::SixAndUp => 15,
            AgeRating::TwelveAndUp => 10,
            AgeRating::SixteenAndUp => 5,
            AgeRating::EighteenAndUp => 0,
        }
    }
}

impl TryFrom<i64> for AgeRating {
    type Error = CatalogueError;

    fn try_from(min_age: i64) -> Result<Self> {
        match min_age {
            0 => Ok(AgeRating::NoRestriction),
            6 => Ok(AgeRating::SixAndUp),
            12 => Ok(AgeRating::TwelveAndUp),
            16 => Ok(AgeRating::SixteenAndUp),
            18 => Ok(AgeRating::EighteenAndUp),
            _ => Err(CatalogueError::InvalidAgeRating { min_age }),
        }
    }
}

impl From<AgeRating> for i64 {
    fn from(rating: AgeRating) -> Self {
        i64::from(rating.min_age())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleType {
    Book,
    Dvd,
}

impl fmt::Display for ArticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArticleType::Book => f.write_str("Book"),
            ArticleType::Dvd => f.write_str("DVD"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleKind {
    Book { pages: u32 },
    Dvd { length: u32, age_rating: AgeRating },
}

impl ArticleKind {
    pub fn article_type(&self) -> ArticleType {
        match self {
            ArticleKind::Book { .. } => ArticleType::Book,
            ArticleKind::Dvd { .. } => ArticleType::Dvd,
        }
    }
}

/// Unvalidated variant fields as they arrive from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewArticleKind {
    Book { pages: i64 },
    Dvd { length: i64, min_age: i64 },
}

/// Unvalidated article input. Turned into an [`Article`] by [`Article::try_new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub id: i64,
    pub title: String,
    pub publisher: String,
    pub release_year: i32,
    pub base_price: Decimal,
    pub kind: NewArticleKind,
}

/// A validated catalogue entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ArticleRecord", into = "ArticleRecord")]
pub struct Article {
    id: u32,
    title: String,
    publisher: String,
    release_year: i32,
    base_price: Decimal,
    kind: ArticleKind,
}

impl Article {
    pub fn try_new(new: NewArticle, rules: &ValidationRules) -> Result<Self> {
        Self::try_new_at(new, rules, current_year())
    }

    /// Validates every field in declaration order and fails on the first violation.
    pub fn try_new_at(new: NewArticle, rules: &ValidationRules, current_year: i32) -> Result<Self> {
        let id = rules.validate_id(new.id)?;
        rules.validate_text(InvalidField::Title, &new.title)?;
        rules.validate_text(InvalidField::Publisher, &new.publisher)?;
        rules.validate_release_year(new.release_year, current_year)?;
        let base_price = rules.validate_base_price(new.base_price)?;

        let kind = match new.kind {
            NewArticleKind::Book { pages } => ArticleKind::Book {
                pages: rules.validate_positive(InvalidField::Pages, pages)?,
            },
            NewArticleKind::Dvd { length, min_age } => ArticleKind::Dvd {
                length: rules.validate_positive(InvalidField::Length, length)?,
                age_rating: AgeRating::try_from(min_age)?,
            },
        };

        Ok(Self {
            id,
            title: new.title,
            publisher: new.publisher,
            release_year: new.release_year,
            base_price,
            kind,
        })
    }

    pub fn book(
        id: i64,
        title: impl Into<String>,
        publisher: impl Into<String>,
        release_year: i32,
        base_price: Decimal,
        pages: i64,
    ) -> Result<Self> {
        Self::try_new(
            NewArticle {
                id,
                title: title.into(),
                publisher: publisher.into(),
                release_year,
                base_price,
                kind: NewArticleKind::Book { pages },
            },
            &ValidationRules::default(),
        )
    }

    pub fn dvd(
        id: i64,
        title: impl Into<String>,
        publisher: impl Into<String>,
        release_year: i32,
        base_price: Decimal,
        length: i64,
        min_age: i64,
    ) -> Result<Self> {
        Self::try_new(
            NewArticle {
                id,
                title: title.into(),
                publisher: publisher.into(),
                release_year,
                base_price,
                kind: NewArticleKind::Dvd { length, min_age },
            },
            &ValidationRules::default(),
        )
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn release_year(&self) -> i32 {
        self.release_year
    }

    pub fn base_price(&self) -> Decimal {
        self.base_price
    }

    pub fn kind(&self) -> &ArticleKind {
        &self.kind
    }

    pub fn article_type(&self) -> ArticleType {
        self.kind.article_type()
    }

    pub fn age(&self) -> i64 {
        self.age_at(current_year())
    }

    pub fn age_at(&self, year: i32) -> i64 {
        i64::from(year) - i64::from(self.release_year)
    }

    pub fn discount_percentage(&self) -> u32 {
        self.discount_percentage_at(current_year())
    }

    pub fn discount_percentage_at(&self, year: i32) -> u32 {
        match self.kind {
            ArticleKind::Book { pages } => pricing::book_discount_percentage(self.age_at(year), pages),
            ArticleKind::Dvd { age_rating, .. } => age_rating.discount_percentage(),
        }
    }

    pub fn price(&self) -> Decimal {
        self.price_at(current_year())
    }

    pub fn price_at(&self, year: i32) -> Decimal {
        pricing::discounted_price(self.base_price, self.discount_percentage_at(year))
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<12}{}", "Type:", self.article_type())?;
        writeln!(f, "{:<12}{}", "Id:", self.id)?;
        writeln!(f, "{:<12}{}", "Title:", self.title)?;
        writeln!(f, "{:<12}{}", "Year:", self.release_year)?;
        writeln!(f, "{:<12}{}", "Publisher:", self.publisher)?;
        writeln!(f, "{:<12}{}", "Base price:", self.base_price)?;
        write!(f, "{:<12}{}", "Price:", self.price())?;
        match self.kind {
            ArticleKind::Book { pages } => write!(f, "\n{:<12}{}", "Pages:", pages),
            ArticleKind::Dvd { length, age_rating } => write!(
                f,
                "\n{:<12}{}\n{:<12}{}",
                "Length:",
                length,
                "Age rating:",
                age_rating.min_age()
            ),
        }
    }
}

/// On-disk shape of an article, tagged by variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ArticleRecord {
    Book {
        id: i64,
        title: String,
        publisher: String,
        release_year: i32,
        base_price: Decimal,
        pages: i64,
    },
    Dvd {
        id: i64,
        title: String,
        publisher: String,
        release_year: i32,
        base_price: Decimal,
        length: i64,
        min_age: i64,
    },
}

impl TryFrom<ArticleRecord> for Article {
    type Error = CatalogueError;

    fn try_from(record: ArticleRecord) -> Result<Self> {
        let new = match record {
            ArticleRecord::Book {
                id,
                title,
                publisher,
                release_year,
                base_price,
                pages,
            } => NewArticle {
                id,
                title,
                publisher,
                release_year,
                base_price,
                kind: NewArticleKind::Book { pages },
            },
            ArticleRecord::Dvd {
                id,
                title,
                publisher,
                release_year,
                base_price,
                length,
                min_age,
            } => NewArticle {
                id,
                title,
                publisher,
                release_year,
                base_price,
                kind: NewArticleKind::Dvd { length, min_age },
            },
        };
        Article::try_new(new, &ValidationRules::default())
    }
}

impl From<Article> for ArticleRecord {
    fn from(article: Article) -> Self {
        let Article {
            id,
            title,
            publisher,
            release_year,
            base_price,
            kind,
        } = article;
        match kind {
            ArticleKind::Book { pages } => ArticleRecord::Book {
                id: i64::from(id),
                title,
                publisher,
                release_year,
                base_price,
                pages: i64::from(pages),
            },
            ArticleKind::Dvd { length, age_rating } => ArticleRecord::Dvd {
                id: i64::from(id),
                title,
                publisher,
                release_year,
                base_price,
                length: i64::from(length),
                min_age: age_rating.into(),
            },
        }
    }
}
