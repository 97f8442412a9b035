//! Currency value object with two-decimal semantics.

use core::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// A non-negative price, stored in the smallest currency unit (cents).
///
/// Serializes as a decimal number (`1250` cents ⇒ `12.5`), and parsing
/// rejects negatives, non-finite values, and sub-cent precision.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn from_cents(cents: i64) -> Result<Self, DomainError> {
        if cents < 0 {
            return Err(DomainError::validation("price must not be negative"));
        }
        Ok(Self(cents))
    }

    /// Strict parse from a decimal amount.
    pub fn parse(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::validation("price must be a number"));
        }
        if value < 0.0 {
            return Err(DomainError::validation("price must not be negative"));
        }
        let cents = value * 100.0;
        if cents > i64::MAX as f64 {
            return Err(DomainError::validation("price is out of range"));
        }
        let rounded = cents.round();
        // Tolerance covers binary-float noise (1.10 * 100 == 110.00000000000001)
        // without letting genuine sub-cent amounts through.
        if (cents - rounded).abs() > 1e-6 * cents.abs().max(1.0) {
            return Err(DomainError::validation(
                "price supports at most two decimal places",
            ));
        }
        Ok(Self(rounded as i64))
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::validation("price must be a decimal number"))?;
        Self::parse(value)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::parse(value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_decimal_amounts() {
        assert_eq!(Price::parse(1.50).unwrap().cents(), 150);
        assert_eq!(Price::parse(0.0).unwrap().cents(), 0);
        assert_eq!(Price::parse(1.10).unwrap().cents(), 110);
        assert_eq!(Price::parse(4899.99).unwrap().cents(), 489999);
    }

    #[test]
    fn rejects_negative_and_sub_cent() {
        assert!(Price::parse(-0.01).is_err());
        assert!(Price::parse(1.005).is_err());
        assert!(Price::parse(f64::NAN).is_err());
        assert!(Price::parse(f64::INFINITY).is_err());
    }

    #[test]
    fn parses_from_str() {
        assert_eq!("2".parse::<Price>().unwrap().cents(), 200);
        assert_eq!(" 3.25 ".parse::<Price>().unwrap().cents(), 325);
        assert!("abc".parse::<Price>().is_err());
        assert!("-1".parse::<Price>().is_err());
    }

    #[test]
    fn orders_by_amount() {
        let low = Price::from_cents(150).unwrap();
        let high = Price::from_cents(300).unwrap();
        assert!(low < high);
    }

    #[test]
    fn displays_with_two_decimals() {
        assert_eq!(Price::from_cents(150).unwrap().to_string(), "1.50");
        assert_eq!(Price::from_cents(5).unwrap().to_string(), "0.05");
    }

    #[test]
    fn serializes_as_decimal_number() {
        let price = Price::from_cents(150).unwrap();
        assert_eq!(serde_json::to_string(&price).unwrap(), "1.5");

        let back: Price = serde_json::from_str("1.5").unwrap();
        assert_eq!(back, price);
        assert!(serde_json::from_str::<Price>("-2").is_err());
    }
}
