use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::errors::{CalculatorError, Result};

/// Rounds a monetary amount to whole currency units, half away from zero.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Turns a percentage into its growth multiplier (`10` -> `1.10`).
pub fn percent_multiplier(percent: Decimal) -> Decimal {
    Decimal::ONE + percent / Decimal::ONE_HUNDRED
}

/// `lhs × rhs`, reporting overflow of `what` instead of panicking.
pub fn checked_mul(lhs: Decimal, rhs: Decimal, what: &str) -> Result<Decimal> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| CalculatorError::Overflow(what.to_string()).into())
}

/// Sum of `values`, reporting overflow of `what` instead of panicking.
pub fn checked_sum<I>(values: I, what: &str) -> Result<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values.into_iter().try_fold(Decimal::ZERO, |acc, value| {
        acc.checked_add(value)
            .ok_or_else(|| CalculatorError::Overflow(what.to_string()).into())
    })
}

/// Parses user-entered numeric text, treating anything unusable as zero.
///
/// Blank, non-numeric and negative values all yield `0`. Scientific notation
/// is accepted because some form widgets emit it for very small values.
pub fn parse_non_negative_or_zero(raw: Option<&str>) -> Decimal {
    let Some(text) = raw.map(str::trim).filter(|t| !t.is_empty()) else {
        return Decimal::ZERO;
    };

    let parsed = Decimal::from_str(text).or_else(|_| Decimal::from_scientific(text));
    match parsed {
        Ok(value) if value.is_sign_negative() => Decimal::ZERO,
        Ok(value) => value,
        Err(_) => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_currency_midpoint_goes_up() {
        assert_eq!(round_currency(dec!(115499.5)), dec!(115500));
        assert_eq!(round_currency(dec!(115499.49)), dec!(115499));
    }

    #[test]
    fn test_percent_multiplier() {
        assert_eq!(percent_multiplier(dec!(10)), dec!(1.10));
        assert_eq!(percent_multiplier(Decimal::ZERO), Decimal::ONE);
        assert_eq!(percent_multiplier(dec!(-5)), dec!(0.95));
    }

    #[test]
    fn test_checked_helpers_report_overflow() {
        use crate::errors::Error;

        assert_eq!(checked_sum([dec!(1), dec!(2.5)], "sum").unwrap(), dec!(3.5));
        assert_eq!(checked_sum(Vec::new(), "sum").unwrap(), Decimal::ZERO);
        assert!(matches!(
            checked_sum([Decimal::MAX, Decimal::ONE], "weights"),
            Err(Error::Calculation(CalculatorError::Overflow(ref what))) if what == "weights"
        ));
        assert!(matches!(
            checked_mul(Decimal::MAX, dec!(2), "area"),
            Err(Error::Calculation(CalculatorError::Overflow(_)))
        ));
    }

    #[test]
    fn test_parse_lenient_inputs() {
        assert_eq!(parse_non_negative_or_zero(Some("12.5")), dec!(12.5));
        assert_eq!(parse_non_negative_or_zero(Some("  3 ")), dec!(3));
        assert_eq!(parse_non_negative_or_zero(Some("abc")), Decimal::ZERO);
        assert_eq!(parse_non_negative_or_zero(Some("")), Decimal::ZERO);
        assert_eq!(parse_non_negative_or_zero(Some("-4")), Decimal::ZERO);
        assert_eq!(parse_non_negative_or_zero(None), Decimal::ZERO);
    }
}
