//! Currency rules and presentation helpers.
//!
//! Amounts are carried as exact [`Decimal`] values everywhere in the domain.
//! Rounding to cents only happens here, at presentation time.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::{DomainError, DomainResult};

/// Largest accepted unit price.
///
/// At this bound even `u32::MAX` units on each of `u32::MAX` distinct lines stays
/// below `Decimal::MAX`, so cart totals cannot overflow.
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Validate a unit price: non-negative, at most [`MAX_UNIT_PRICE`], whole cents.
///
/// Whole cents keep every price exactly representable as a JSON number.
pub fn check_unit_price(price: Decimal) -> DomainResult<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(DomainError::validation(format!("price {price} is negative")));
    }
    if price > MAX_UNIT_PRICE {
        return Err(DomainError::validation(format!(
            "price {price} exceeds {MAX_UNIT_PRICE}"
        )));
    }
    if price.normalize().scale() > 2 {
        return Err(DomainError::validation(format!(
            "price {price} has more than 2 decimal places"
        )));
    }
    Ok(())
}

/// Round an amount to currency precision (2 decimal places, half away from zero).
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as a dollar string, e.g. `$219.98`.
pub fn format_money(amount: Decimal) -> String {
    format!("${:.2}", round_to_cents(amount))
}

/// Serde codec writing amounts as plain JSON numbers (`89.99`, not `"89.99"`).
///
/// Encoding goes through the shortest decimal text of the amount, decoding through
/// the shortest text of the parsed float, so any amount with at most 15 significant
/// digits comes back unchanged.
pub mod json_number {
    use super::*;

    pub fn serialize<S: Serializer>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        let value = f64::from_str(&amount.normalize().to_string())
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_f64(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Decimal::from_str(&value.to_string()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde::Serialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Priced {
        #[serde(with = "json_number")]
        price: Decimal,
    }

    #[test]
    fn formats_with_two_decimals() {
        assert_eq!(format_money(dec!(0)), "$0.00");
        assert_eq!(format_money(dec!(179.98)), "$179.98");
        assert_eq!(format_money(dec!(5)), "$5.00");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to_cents(dec!(1.005)), dec!(1.01));
        assert_eq!(format_money(dec!(2.344)), "$2.34");
    }

    #[test]
    fn unit_price_rules() {
        assert!(check_unit_price(dec!(0)).is_ok());
        assert!(check_unit_price(dec!(89.990)).is_ok());
        assert!(check_unit_price(MAX_UNIT_PRICE).is_ok());
        assert!(check_unit_price(dec!(-0.01)).is_err());
        assert!(check_unit_price(dec!(70000000000000000000000000000)).is_err());
        assert!(check_unit_price(dec!(0.1234567890123456789)).is_err());
    }

    #[test]
    fn largest_cart_total_fits_in_a_decimal() {
        let line = MAX_UNIT_PRICE.checked_mul(Decimal::from(u32::MAX)).unwrap();
        assert!(line.checked_mul(Decimal::from(u32::MAX)).is_some());
    }

    #[test]
    fn json_number_keeps_valid_prices_exact() {
        for price in [dec!(89.99), dec!(0.01), dec!(999999999.99), MAX_UNIT_PRICE, dec!(0)] {
            let json = serde_json::to_string(&Priced { price }).unwrap();
            assert!(!json.contains(":\""), "price must be a number: {json}");
            let back: Priced = serde_json::from_str(&json).unwrap();
            assert_eq!(back.price, price, "round trip of {json}");
        }
    }

    #[test]
    fn json_number_accepts_integers_and_rejects_out_of_range() {
        let back: Priced = serde_json::from_str(r#"{"price":90}"#).unwrap();
        assert_eq!(back.price, dec!(90));
        assert!(serde_json::from_str::<Priced>(r#"{"price":1e40}"#).is_err());
    }
}
