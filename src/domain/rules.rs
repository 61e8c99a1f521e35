use crate::utils::error::{CatalogueError, InvalidField, Result};
use chrono::Datelike;
use rust_decimal::Decimal;

/// First year of movable-type printing, the usual floor when one is wanted.
pub const MOVABLE_TYPE_YEAR: i32 = 1436;

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Rules applied when an article is constructed.
///
/// The release year is always capped by the current year. A lower bound is
/// only enforced when one is configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationRules {
    min_release_year: Option<i32>,
}

impl ValidationRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_release_year(mut self, year: Option<i32>) -> Self {
        self.min_release_year = year;
        self
    }

    pub fn min_release_year(&self) -> Option<i32> {
        self.min_release_year
    }

    pub fn validate_id(&self, id: i64) -> Result<u32> {
        if id <= 0 {
            return Err(CatalogueError::validation(
                InvalidField::Id,
                id,
                "The id must be positive.",
            ));
        }
        u32::try_from(id).map_err(|_| {
            CatalogueError::validation(InvalidField::Id, id, "The id is too large.")
        })
    }

    pub fn validate_text(&self, field: InvalidField, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(CatalogueError::validation(
                field,
                value,
                format!("The {} must not be empty.", field),
            ));
        }
        Ok(())
    }

    pub fn validate_release_year(&self, year: i32, current_year: i32) -> Result<()> {
        if year > current_year {
            return Err(CatalogueError::validation(
                InvalidField::ReleaseYear,
                year,
                "The release year is in the future.",
            ));
        }
        if let Some(floor) = self.min_release_year {
            if year < floor {
                return Err(CatalogueError::validation(
                    InvalidField::ReleaseYear,
                    year,
                    format!("The release year must not be before {}.", floor),
                ));
            }
        }
        Ok(())
    }

    /// Returns the base price rescaled to exactly two fractional digits.
    pub fn validate_base_price(&self, price: Decimal) -> Result<Decimal> {
        if price.is_sign_negative() && !price.is_zero() {
            return Err(CatalogueError::validation(
                InvalidField::BasePrice,
                price,
                "The base price must not be negative.",
            ));
        }
        let normalized = price.normalize();
        if normalized.scale() > 2 {
            return Err(CatalogueError::validation(
                InvalidField::BasePrice,
                price,
                "The base price must have at most two decimal places.",
            ));
        }
        let mut scaled = normalized;
        scaled.rescale(2);
        if scaled.scale() != 2 {
            return Err(CatalogueError::validation(
                InvalidField::BasePrice,
                price,
                "The base price is too large.",
            ));
        }
        // -0.00 parses as a negative zero
        scaled.set_sign_positive(true);
        Ok(scaled)
    }

    pub fn validate_positive(&self, field: InvalidField, value: i64) -> Result<u32> {
        if value <= 0 {
            return Err(CatalogueError::validation(
                field,
                value,
                format!("The {} must be positive.", field),
            ));
        }
        u32::try_from(value)
            .map_err(|_| CatalogueError::validation(field, value, format!("The {} is too large.", field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_id_must_be_positive() {
        let rules = ValidationRules::new();
        assert_eq!(rules.validate_id(1).unwrap(), 1);
        assert!(rules.validate_id(0).is_err());
        assert!(rules.validate_id(-3).is_err());
        assert!(rules.validate_id(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let rules = ValidationRules::new();
        assert!(rules.validate_text(InvalidField::Title, "Dune").is_ok());
        assert!(rules.validate_text(InvalidField::Title, "").is_err());
        assert!(matches!(
            rules.validate_text(InvalidField::Publisher, "   \t"),
            Err(CatalogueError::Validation { field: InvalidField::Publisher, .. })
        ));
    }

    #[test]
    fn test_release_year_upper_bound() {
        let rules = ValidationRules::new();
        assert!(rules.validate_release_year(2024, 2024).is_ok());
        assert!(rules.validate_release_year(2025, 2024).is_err());
        assert!(rules.validate_release_year(-500, 2024).is_ok());
    }

    #[test]
    fn test_configured_release_year_floor() {
        let rules = ValidationRules::new().with_min_release_year(Some(MOVABLE_TYPE_YEAR));
        assert!(rules.validate_release_year(1436, 2024).is_ok());
        assert!(rules.validate_release_year(1435, 2024).is_err());
    }

    #[test]
    fn test_base_price_is_rescaled() {
        let rules = ValidationRules::new();
        assert_eq!(rules.validate_base_price(dec!(100)).unwrap().to_string(), "100.00");
        assert_eq!(rules.validate_base_price(dec!(12.5)).unwrap().to_string(), "12.50");
        assert_eq!(rules.validate_base_price(dec!(9.990)).unwrap().to_string(), "9.99");
        assert_eq!(rules.validate_base_price(dec!(0)).unwrap().to_string(), "0.00");
        assert!(rules.validate_base_price(dec!(-0.01)).is_err());
        assert!(rules.validate_base_price(dec!(1.005)).is_err());
    }

    #[test]
    fn test_base_price_too_large_for_two_decimals() {
        let rules = ValidationRules::new();
        let huge = Decimal::from_str_exact("40000000000000000000000000000").unwrap();
        let err = rules.validate_base_price(huge).unwrap_err();
        assert!(matches!(
            err,
            CatalogueError::Validation {
                field: InvalidField::BasePrice,
                ..
            }
        ));
        assert!(rules.validate_base_price(Decimal::MAX).is_err());
    }

    #[test]
    fn test_positive_counts() {
        let rules = ValidationRules::new();
        assert_eq!(rules.validate_positive(InvalidField::Pages, 320).unwrap(), 320);
        assert!(rules.validate_positive(InvalidField::Length, 0).is_err());
    }
}
