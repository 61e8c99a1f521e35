//! Discount and price arithmetic.
//!
//! Every step rounds half-up to two decimal places: the percentage is turned
//! into a fraction, the discount amount is rounded, and the final price is
//! rescaled. The chain is reproducible and must not be collapsed into a single
//! rounding.

use rust_decimal::{Decimal, RoundingStrategy};

pub const BOOK_AGE_DISCOUNT_PER_YEAR: u32 = 5;
pub const BOOK_AGE_DISCOUNT_CAP: u32 = 30;
pub const BOOK_THICK_PAGES: u32 = 1000;
pub const BOOK_THICK_DISCOUNT: u32 = 3;

pub fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

pub fn percentage_to_fraction(percentage: u32) -> Decimal {
    round2(Decimal::from(percentage) / Decimal::ONE_HUNDRED)
}

pub fn discount_amount(base_price: Decimal, percentage: u32) -> Decimal {
    round2(base_price * percentage_to_fraction(percentage))
}

pub fn discounted_price(base_price: Decimal, percentage: u32) -> Decimal {
    round2(base_price - discount_amount(base_price, percentage))
}

/// Books lose 5% per year of age, capped at 30%, plus 3% for more than 1000 pages.
pub fn book_discount_percentage(age: i64, pages: u32) -> u32 {
    let age = u32::try_from(age.max(0)).unwrap_or(u32::MAX);
    let age_component = age
        .saturating_mul(BOOK_AGE_DISCOUNT_PER_YEAR)
        .min(BOOK_AGE_DISCOUNT_CAP);
    let pages_component = if pages > BOOK_THICK_PAGES {
        BOOK_THICK_DISCOUNT
    } else {
        0
    };
    age_component + pages_component
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeanError {
    Empty,
    Overflow,
}

pub fn mean(prices: &[Decimal]) -> Result<Decimal, MeanError> {
    if prices.is_empty() {
        return Err(MeanError::Empty);
    }
    let sum = prices
        .iter()
        .try_fold(Decimal::ZERO, |acc, price| acc.checked_add(*price))
        .ok_or(MeanError::Overflow)?;
    Ok(round2(sum / Decimal::from(prices.len() as u64)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round2_is_half_up() {
        assert_eq!(round2(dec!(2.345)), dec!(2.35));
        assert_eq!(round2(dec!(2.344)), dec!(2.34));
        assert_eq!(round2(dec!(0.125)), dec!(0.13));
        assert_eq!(round2(dec!(7)).to_string(), "7.00");
    }

    #[test]
    fn test_discount_chain() {
        assert_eq!(discounted_price(dec!(100.00), 33), dec!(67.00));
        assert_eq!(discounted_price(dec!(50.00), 10), dec!(45.00));
        // 19.99 * 0.15 = 2.9985 -> 3.00
        assert_eq!(discount_amount(dec!(19.99), 15), dec!(3.00));
        assert_eq!(discounted_price(dec!(19.99), 15), dec!(16.99));
        assert_eq!(discounted_price(dec!(0.00), 20).to_string(), "0.00");
    }

    #[test]
    fn test_book_discount_caps_age_component() {
        assert_eq!(book_discount_percentage(0, 500), 0);
        assert_eq!(book_discount_percentage(3, 500), 15);
        assert_eq!(book_discount_percentage(6, 1000), 30);
        assert_eq!(book_discount_percentage(10, 1500), 33);
        assert_eq!(book_discount_percentage(0, 1001), 3);
    }

    #[test]
    fn test_book_discount_for_extreme_ages() {
        let age = i64::from(i32::MAX) - i64::from(i32::MIN);
        assert_eq!(book_discount_percentage(age, 10), 30);
        assert_eq!(book_discount_percentage(-7, 10), 0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[dec!(10.00), dec!(20.00)]), Ok(dec!(15.00)));
        assert_eq!(mean(&[dec!(0.01), dec!(0.02)]), Ok(dec!(0.02)));
        assert_eq!(mean(&[]), Err(MeanError::Empty));
    }

    #[test]
    fn test_mean_overflow_is_an_error() {
        assert_eq!(mean(&[Decimal::MAX, Decimal::MAX]), Err(MeanError::Overflow));
        assert_eq!(mean(&[Decimal::MAX]), Ok(round2(Decimal::MAX)));
    }
}
