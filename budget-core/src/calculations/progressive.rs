use rust_decimal::Decimal;

use crate::models::TaxBracket;

/// Tax owed on `income` under a progressive bracket table.
///
/// Brackets are walked in order. Each one taxes the slice of income between
/// the previous bracket's limit (starting at zero) and its own limit. Income
/// above the last limit is not taxed, so tables should end with a bracket that
/// reaches the income. An empty table yields zero. Limits are not validated.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use budget_core::TaxBracket;
/// use budget_core::calculations::progressive_tax;
///
/// let brackets = [
///     TaxBracket::new(dec!(1000), dec!(0.02)),
///     TaxBracket::new(dec!(2000), dec!(0.04)),
///     TaxBracket::new(dec!(3000), dec!(0.0475)),
///     TaxBracket::new(dec!(100300), dec!(0.05)),
/// ];
///
/// assert_eq!(progressive_tax(dec!(100300), &brackets), dec!(4972.50));
/// ```
///
/// # Panics
///
/// If the tax does not fit in a `Decimal`. Use [`checked_progressive_tax`]
/// for tables or incomes that have not been checked.
pub fn progressive_tax(
    income: Decimal,
    brackets: &[TaxBracket],
) -> Decimal {
    match checked_progressive_tax(income, brackets) {
        Some(tax) => tax,
        None => panic!("progressive tax on {income} overflowed"),
    }
}

/// Like [`progressive_tax`], but `None` when a slice or the running total
/// overflows.
pub fn checked_progressive_tax(
    income: Decimal,
    brackets: &[TaxBracket],
) -> Option<Decimal> {
    let mut tax = Decimal::ZERO;
    let mut previous_limit = Decimal::ZERO;

    for bracket in brackets {
        if income > previous_limit {
            let slice = income.min(bracket.upper_limit).checked_sub(previous_limit)?;
            tax = tax.checked_add(slice.checked_mul(bracket.rate)?)?;
        }
        previous_limit = bracket.upper_limit;
    }

    Some(tax)
}
