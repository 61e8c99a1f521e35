use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Article field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidField {
    Id,
    Title,
    Publisher,
    ReleaseYear,
    BasePrice,
    Pages,
    Length,
}

impl fmt::Display for InvalidField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InvalidField::Id => "id",
            InvalidField::Title => "title",
            InvalidField::Publisher => "publisher",
            InvalidField::ReleaseYear => "release year",
            InvalidField::BasePrice => "base price",
            InvalidField::Pages => "pages",
            InvalidField::Length => "length",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorKind {
    Read,
    Write,
    Serialization,
    Deserialization,
}

impl fmt::Display for StorageErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StorageErrorKind::Read => "read",
            StorageErrorKind::Write => "write",
            StorageErrorKind::Serialization => "serialization",
            StorageErrorKind::Deserialization => "deserialization",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("Invalid {field} '{value}': {reason}")]
    Validation {
        field: InvalidField,
        value: String,
        reason: String,
    },

    #[error("Invalid age rating: {min_age} (expected one of 0, 6, 12, 16, 18)")]
    InvalidAgeRating { min_age: i64 },

    #[error("Article already exists. (id={id})")]
    DuplicateId { id: u32 },

    #[error("Article not found. (id={id})")]
    NotFound { id: u32 },

    #[error("No articles found, cannot compute {operation}")]
    EmptyCatalogue { operation: &'static str },

    #[error("Arithmetic overflow while computing {operation}")]
    ArithmeticOverflow { operation: &'static str },

    #[error("Storage {kind} error at '{}': {message}", .path.display())]
    Storage {
        kind: StorageErrorKind,
        path: PathBuf,
        message: String,
    },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid argument '{argument}' = '{value}': {reason}")]
    InvalidArgument {
        argument: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    State,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CatalogueError {
    pub fn validation(field: InvalidField, value: impl ToString, reason: impl Into<String>) -> Self {
        CatalogueError::Validation {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn storage(kind: StorageErrorKind, path: impl Into<PathBuf>, message: impl ToString) -> Self {
        CatalogueError::Storage {
            kind,
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogueError::Validation { .. }
            | CatalogueError::InvalidAgeRating { .. }
            | CatalogueError::InvalidArgument { .. } => ErrorCategory::Input,
            CatalogueError::DuplicateId { .. }
            | CatalogueError::NotFound { .. }
            | CatalogueError::EmptyCatalogue { .. }
            | CatalogueError::ArithmeticOverflow { .. } => ErrorCategory::State,
            CatalogueError::Storage { .. } => ErrorCategory::Storage,
            CatalogueError::ConfigValidationError { .. }
            | CatalogueError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CatalogueError::EmptyCatalogue { .. } => ErrorSeverity::Medium,
            CatalogueError::Storage { .. } => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogueError::Validation { .. }
            | CatalogueError::InvalidAgeRating { .. }
            | CatalogueError::DuplicateId { .. }
            | CatalogueError::NotFound { .. }
            | CatalogueError::ArithmeticOverflow { .. }
            | CatalogueError::InvalidArgument { .. } => format!("Error: {}", self),
            CatalogueError::EmptyCatalogue { .. } => "Error: No articles found.".to_string(),
            CatalogueError::Storage {
                kind: StorageErrorKind::Deserialization,
                path,
                ..
            } => format!("Error during deserialization of '{}'.", path.display()),
            CatalogueError::Storage { kind, path, .. } => {
                format!("Error: Could not {} catalogue file '{}'.", kind, path.display())
            }
            CatalogueError::ConfigValidationError { .. }
            | CatalogueError::InvalidConfigValueError { .. } => {
                format!("Error: Invalid configuration. {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Input => match self {
                CatalogueError::InvalidAgeRating { .. } => {
                    "Use one of the age ratings 0, 6, 12, 16 or 18".to_string()
                }
                _ => "Check the command arguments and try again".to_string(),
            },
            ErrorCategory::State => match self {
                CatalogueError::DuplicateId { .. } => {
                    "Choose an id that is not yet used, see the 'list' command".to_string()
                }
                CatalogueError::NotFound { .. } => {
                    "Use the 'list' command to see the stored ids".to_string()
                }
                CatalogueError::ArithmeticOverflow { .. } => {
                    "Delete articles with implausibly large prices".to_string()
                }
                _ => "Add an article with the 'add' command first".to_string(),
            },
            ErrorCategory::Storage => {
                "Make sure the catalogue file is readable, writable and was created by this tool"
                    .to_string()
            }
            ErrorCategory::Configuration => {
                "Check the configuration file and command line options".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_errors_have_original_messages() {
        assert_eq!(
            CatalogueError::DuplicateId { id: 5 }.to_string(),
            "Article already exists. (id=5)"
        );
        assert_eq!(
            CatalogueError::NotFound { id: 7 }.user_friendly_message(),
            "Error: Article not found. (id=7)"
        );
    }

    #[test]
    fn test_storage_errors_are_critical() {
        let err = CatalogueError::storage(
            StorageErrorKind::Deserialization,
            "articles.json",
            "unexpected end of input",
        );
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.to_string().contains("deserialization"));
    }

    #[test]
    fn test_validation_error_mentions_field() {
        let err = CatalogueError::validation(InvalidField::ReleaseYear, 3000, "in the future");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.to_string(), "Invalid release year '3000': in the future");
    }

    #[test]
    fn test_arithmetic_overflow_is_a_state_error() {
        let err = CatalogueError::ArithmeticOverflow {
            operation: "the mean price",
        };
        assert_eq!(err.category(), ErrorCategory::State);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(
            err.user_friendly_message(),
            "Error: Arithmetic overflow while computing the mean price"
        );
    }
}
