//! Strict parser for bracket tables typed into a form.
//!
//! A table is a list of `(limit, rate)` pairs, optionally wrapped in square
//! brackets, with an optional trailing comma:
//!
//! ```text
//! table  := '[' pairs? ']' | pairs?
//! pairs  := pair (',' pair)* ','?
//! pair   := '(' number ',' number ')'
//! number := ('+' | '-')? digits ('.' digits?)? | ('+' | '-')? '.' digits
//! ```
//!
//! Whitespace is allowed between tokens and `_` may separate digits. The text
//! is only ever parsed as data.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::TaxBracket;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BracketParseError {
    #[error("expected {expected} at offset {position}, found {}", describe(.found))]
    Unexpected {
        position: usize,
        expected: &'static str,
        found: Option<char>,
    },

    #[error("invalid number '{text}' at offset {position}")]
    InvalidNumber { position: usize, text: String },
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("'{c}'"),
        None => "end of input".to_string(),
    }
}

/// Parses a bracket table such as `[(11000, 0.10), (44725, 0.12)]`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use budget_core::TaxBracket;
/// use budget_core::input::parse_brackets;
///
/// let brackets = parse_brackets("[(11000, .10), (44_725, 0.12)]").unwrap();
///
/// assert_eq!(
///     brackets,
///     vec![
///         TaxBracket::new(dec!(11000), dec!(0.10)),
///         TaxBracket::new(dec!(44725), dec!(0.12)),
///     ]
/// );
/// assert!(parse_brackets("__import__('os')").is_err());
/// ```
pub fn parse_brackets(input: &str) -> Result<Vec<TaxBracket>, BracketParseError> {
    let mut parser = Parser { input, pos: 0 };
    let brackets = parser.table()?;
    parser.skip_ws();
    match parser.peek() {
        None => Ok(brackets),
        found => Err(parser.unexpected("end of input", found)),
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn eat(
        &mut self,
        expected: char,
    ) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(
        &mut self,
        token: char,
        expected: &'static str,
    ) -> Result<(), BracketParseError> {
        self.skip_ws();
        if self.eat(token) {
            Ok(())
        } else {
            Err(self.unexpected(expected, self.peek()))
        }
    }

    fn unexpected(
        &self,
        expected: &'static str,
        found: Option<char>,
    ) -> BracketParseError {
        BracketParseError::Unexpected {
            position: self.pos,
            expected,
            found,
        }
    }

    fn table(&mut self) -> Result<Vec<TaxBracket>, BracketParseError> {
        self.skip_ws();
        if self.eat('[') {
            let brackets = self.pairs(true)?;
            self.expect(']', "',' or ']'")?;
            Ok(brackets)
        } else {
            self.pairs(false)
        }
    }

    fn pairs(
        &mut self,
        bracketed: bool,
    ) -> Result<Vec<TaxBracket>, BracketParseError> {
        let mut brackets = Vec::new();
        loop {
            self.skip_ws();
            match self.peek() {
                Some('(') => brackets.push(self.pair()?),
                Some(']') if bracketed => break,
                None if !bracketed => break,
                found => {
                    let expected = if bracketed { "'(' or ']'" } else { "'('" };
                    return Err(self.unexpected(expected, found));
                }
            }
            self.skip_ws();
            if !self.eat(',') {
                break;
            }
        }
        Ok(brackets)
    }

    fn pair(&mut self) -> Result<TaxBracket, BracketParseError> {
        self.expect('(', "'('")?;
        let upper_limit = self.number()?;
        self.expect(',', "','")?;
        let rate = self.number()?;
        self.expect(')', "')'")?;
        Ok(TaxBracket::new(upper_limit, rate))
    }

    fn number(&mut self) -> Result<Decimal, BracketParseError> {
        self.skip_ws();
        let start = self.pos;
        let negative = match self.peek() {
            Some('-') => {
                self.bump();
                true
            }
            Some('+') => {
                self.bump();
                false
            }
            _ => false,
        };
        let digits_start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || c == '_' || c == '.')
        {
            self.bump();
        }

        let text = &self.input[start..self.pos];
        let digits: String = self.input[digits_start..self.pos]
            .chars()
            .filter(|&c| c != '_')
            .collect();
        if !digits.chars().any(|c| c.is_ascii_digit()) {
            self.pos = start;
            return Err(self.unexpected("a number", self.peek()));
        }

        let digits = digits.strip_suffix('.').unwrap_or(&digits);
        let normalized = if digits.starts_with('.') {
            format!("0{digits}")
        } else {
            digits.to_string()
        };

        let invalid = || BracketParseError::InvalidNumber {
            position: start,
            text: text.to_string(),
        };
        if normalized.contains("..") {
            return Err(invalid());
        }
        let value = Decimal::from_str(&normalized).map_err(|_| invalid())?;
        Ok(if negative { -value } else { value })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parses_bracketed_table() {
        let brackets =
            parse_brackets("[(11000, 0.10), (44725, 0.12), (95375, 0.22), (182100, 0.24)]")
                .unwrap();

        assert_eq!(brackets.len(), 4);
        assert_eq!(brackets[3], TaxBracket::new(dec!(182100), dec!(0.24)));
    }

    #[test]
    fn parses_bare_pairs_with_trailing_comma() {
        let brackets = parse_brackets(" (1000, .02),(2000,.04), ").unwrap();

        assert_eq!(
            brackets,
            vec![
                TaxBracket::new(dec!(1000), dec!(0.02)),
                TaxBracket::new(dec!(2000), dec!(0.04)),
            ]
        );
    }

    #[test]
    fn parses_digit_separators_and_trailing_dot() {
        let brackets = parse_brackets("[(100_300., 0.05)]").unwrap();

        assert_eq!(brackets, vec![TaxBracket::new(dec!(100300), dec!(0.05))]);
    }

    #[test]
    fn empty_tables_are_allowed() {
        assert_eq!(parse_brackets(""), Ok(vec![]));
        assert_eq!(parse_brackets("  [ ]  "), Ok(vec![]));
    }

    #[test]
    fn rejects_expressions() {
        let err = parse_brackets("[(11000, 0.1 * 2)]").unwrap_err();

        assert_eq!(
            err,
            BracketParseError::Unexpected {
                position: 13,
                expected: "')'",
                found: Some('*'),
            }
        );
    }

    #[test]
    fn rejects_code() {
        assert!(parse_brackets("__import__('os').system('ls')").is_err());
        assert!(parse_brackets("[x for x in range(3)]").is_err());
    }

    #[test]
    fn rejects_unclosed_table() {
        let err = parse_brackets("[(1000, 0.02)").unwrap_err();

        assert_eq!(
            err,
            BracketParseError::Unexpected {
                position: 13,
                expected: "',' or ']'",
                found: None,
            }
        );
    }

    #[test]
    fn rejects_missing_separator_between_pairs() {
        assert!(parse_brackets("[(1000, 0.02) (2000, 0.04)]").is_err());
    }

    #[test]
    fn rejects_pair_with_one_number() {
        let err = parse_brackets("(1000)").unwrap_err();

        assert!(matches!(
            err,
            BracketParseError::Unexpected { expected: "','", .. }
        ));
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(matches!(
            parse_brackets("(1.2.3, 0.1)"),
            Err(BracketParseError::InvalidNumber { position: 1, .. })
        ));
        assert!(matches!(
            parse_brackets("(., 0.1)"),
            Err(BracketParseError::Unexpected { expected: "a number", .. })
        ));
    }

    #[test]
    fn error_message_names_position() {
        let err = parse_brackets("[(1000, 0.02)] extra").unwrap_err();

        assert_eq!(
            err.to_string(),
            "expected end of input at offset 15, found 'e'"
        );
    }
}
