use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slice of a progressive tax table.
///
/// Income above the previous bracket's `upper_limit` and up to this one is
/// taxed at `rate`. Tables are ordered by strictly increasing `upper_limit`;
/// the last bracket acts as the "and above" bracket, so it should reach at
/// least the income being taxed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub upper_limit: Decimal,
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn new(
        upper_limit: Decimal,
        rate: Decimal,
    ) -> Self {
        Self { upper_limit, rate }
    }
}

impl From<(Decimal, Decimal)> for TaxBracket {
    fn from((upper_limit, rate): (Decimal, Decimal)) -> Self {
        Self { upper_limit, rate }
    }
}
