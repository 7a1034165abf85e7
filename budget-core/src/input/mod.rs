//! Conversion of raw form text into budget configuration.

mod brackets;
mod decimal;
mod form;

pub use brackets::{BracketParseError, parse_brackets};
pub use decimal::{NumberError, parse_decimal, parse_decimal_or_zero};
pub use form::{BudgetForm, FormField, InputParseError};
