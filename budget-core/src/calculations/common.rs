//! Shared money helpers.
//!
//! Model arithmetic is never rounded; the rounding helpers are for display
//! and export only. The checked helpers turn `Decimal` overflow into a
//! [`BudgetError`] naming the figure being derived.

use rust_decimal::{Decimal, RoundingStrategy};

use super::budget::BudgetError;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use budget_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount with exactly two decimals, e.g. `1500` as `"1500.00"`.
pub fn format_money(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}

/// True when two amounts agree to within one cent.
pub fn within_a_cent(
    a: Decimal,
    b: Decimal,
) -> bool {
    a.checked_sub(b)
        .is_some_and(|diff| diff.abs() < Decimal::new(1, 2))
}

/// Sums `values`, failing with `figure` if the total does not fit.
///
/// Subtraction is written as adding the negated value.
pub(crate) fn checked_sum(
    figure: &'static str,
    values: impl IntoIterator<Item = Decimal>,
) -> Result<Decimal, BudgetError> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(value))
        .ok_or(BudgetError::Overflow(figure))
}

pub(crate) fn checked_product(
    figure: &'static str,
    amount: Decimal,
    rate: Decimal,
) -> Result<Decimal, BudgetError> {
    amount
        .checked_mul(rate)
        .ok_or(BudgetError::Overflow(figure))
}
