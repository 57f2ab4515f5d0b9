use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A price in whole currency units.
///
/// This is a wrapper around `rust_decimal::Decimal`; values built through
/// [`Price::round`] never carry a fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Rounds half away from zero to the nearest whole unit.
    pub fn round(amount: Decimal) -> Self {
        Self(
            amount
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .normalize(),
        )
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

/// Formats as a dollar amount with thousands separators, e.g. `$19,656`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.abs().trunc().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if self.0.is_sign_negative() && !self.0.is_zero() {
            write!(f, "-${grouped}")
        } else {
            write!(f, "${grouped}")
        }
    }
}

/// The planning-stage price range produced by the pricing engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub min_price: Price,
    pub max_price: Price,
    pub tier_label: String,
}

impl PriceEstimate {
    pub fn spread(&self) -> Decimal {
        self.max_price.value() - self.min_price.value()
    }
}

impl fmt::Display for PriceEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({})",
            self.min_price, self.max_price, self.tier_label
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(Price::round(dec!(8424.5)).value(), dec!(8425));
        assert_eq!(Price::round(dec!(8423.5)).value(), dec!(8424));
        assert_eq!(Price::round(dec!(8424.49)).value(), dec!(8424));
    }

    #[test]
    fn test_round_drops_trailing_scale() {
        let price = Price::round(dec!(6750.000));
        assert_eq!(price.value().scale(), 0);
        assert_eq!(price.value().to_string(), "6750");
    }

    #[test]
    fn test_price_display_groups_thousands() {
        assert_eq!(Price::round(dec!(0)).to_string(), "$0");
        assert_eq!(Price::round(dec!(950)).to_string(), "$950");
        assert_eq!(Price::round(dec!(3000)).to_string(), "$3,000");
        assert_eq!(Price::round(dec!(19656)).to_string(), "$19,656");
        assert_eq!(Price::round(dec!(1234567)).to_string(), "$1,234,567");
    }

    #[test]
    fn test_estimate_display() {
        let estimate = PriceEstimate {
            min_price: Price::round(dec!(3000)),
            max_price: Price::round(dec!(6000)),
            tier_label: "Standard".to_string(),
        };
        assert_eq!(estimate.to_string(), "$3,000 - $6,000 (Standard)");
        assert_eq!(estimate.spread(), dec!(3000));
    }

    #[test]
    fn test_estimate_serialization() {
        let estimate = PriceEstimate {
            min_price: Price::round(dec!(8424)),
            max_price: Price::round(dec!(19656)),
            tier_label: "Premium".to_string(),
        };
        let json = serde_json::to_string(&estimate).unwrap();
        assert_eq!(
            json,
            r#"{"min_price":"8424","max_price":"19656","tier_label":"Premium"}"#
        );
    }
}
