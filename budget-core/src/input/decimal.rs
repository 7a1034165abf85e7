use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a form value is not a usable number.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NumberError {
    #[error("a value is required")]
    Missing,

    #[error("invalid number '{input}': {reason}")]
    Invalid { input: String, reason: String },
}

/// Trims whitespace and removes commas used as thousands separators.
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a required form value into a [`Decimal`].
///
/// Accepts comma thousands separators (`"1,234.56"`) and surrounding
/// whitespace. Empty input is [`NumberError::Missing`].
pub fn parse_decimal(s: &str) -> Result<Decimal, NumberError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Err(NumberError::Missing);
    }
    Decimal::from_str(&normalized).map_err(|e| NumberError::Invalid {
        input: s.trim().to_string(),
        reason: e.to_string(),
    })
}

/// Like [`parse_decimal`], but empty input means zero.
pub fn parse_decimal_or_zero(s: &str) -> Result<Decimal, NumberError> {
    match parse_decimal(s) {
        Err(NumberError::Missing) => Ok(Decimal::ZERO),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_decimal_accepts_comma_thousands_separator() {
        assert_eq!(parse_decimal("1,234.56"), Ok(dec!(1234.56)));
        assert_eq!(parse_decimal("100,300"), Ok(dec!(100300)));
    }

    #[test]
    fn parse_decimal_trims_whitespace() {
        assert_eq!(parse_decimal("  0.062  "), Ok(dec!(0.062)));
    }

    #[test]
    fn parse_decimal_requires_a_value() {
        assert_eq!(parse_decimal(""), Err(NumberError::Missing));
        assert_eq!(parse_decimal("   "), Err(NumberError::Missing));
    }

    #[test]
    fn parse_decimal_rejects_garbage() {
        assert!(matches!(
            parse_decimal("12abc"),
            Err(NumberError::Invalid { input, .. }) if input == "12abc"
        ));
    }

    #[test]
    fn parse_decimal_or_zero_defaults_empty_input() {
        assert_eq!(parse_decimal_or_zero(""), Ok(Decimal::ZERO));
        assert_eq!(parse_decimal_or_zero("45"), Ok(dec!(45)));
        assert!(parse_decimal_or_zero("x").is_err());
    }
}
