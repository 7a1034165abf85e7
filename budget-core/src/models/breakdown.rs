use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::calculations::BudgetError;
use crate::calculations::common::{checked_sum, format_money};

/// The four top-level budget categories, in overview order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Taxes,
    MortgageAndDebt,
    Utilities,
    FreeMoney,
}

impl Category {
    /// Overview order. The wedge at index `i` of the overview is `ALL[i]`.
    pub const ALL: [Category; 4] = [
        Category::Taxes,
        Category::MortgageAndDebt,
        Category::Utilities,
        Category::FreeMoney,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Taxes => "Taxes",
            Self::MortgageAndDebt => "Mortgage and Debt",
            Self::Utilities => "Utilities",
            Self::FreeMoney => "Free Money",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this category's wedge in the overview.
    pub fn index(&self) -> usize {
        match self {
            Self::Taxes => 0,
            Self::MortgageAndDebt => 1,
            Self::Utilities => 2,
            Self::FreeMoney => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One wedge of a chart view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub label: String,
    /// Monthly amount.
    pub value: Decimal,
}

/// An ordered list of labelled monthly amounts: either the four-category
/// overview or the expansion of one category.
///
/// The total and each entry's share are fixed when the breakdown is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    entries: Vec<BreakdownEntry>,
    total: Decimal,
    shares: Vec<Decimal>,
}

impl CategoryBreakdown {
    pub fn new<L, I>(entries: I) -> Result<Self, BudgetError>
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, Decimal)>,
    {
        let entries: Vec<BreakdownEntry> = entries
            .into_iter()
            .map(|(label, value)| BreakdownEntry {
                label: label.into(),
                value,
            })
            .collect();
        let total = checked_sum("breakdown total", entries.iter().map(|e| e.value))?;
        let shares = entries
            .iter()
            .map(|e| share_of(e.value, total))
            .collect::<Result<Vec<_>, BudgetError>>()?;

        Ok(Self {
            entries,
            total,
            shares,
        })
    }

    pub fn entries(&self) -> &[BreakdownEntry] {
        &self.entries
    }

    pub fn get(
        &self,
        index: usize,
    ) -> Option<&BreakdownEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<Decimal> {
        self.entries.iter().map(|e| e.value).collect()
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Share of the total for each entry, in percent, rounded to one decimal.
    ///
    /// All zeros when the total is zero.
    pub fn percentages(&self) -> Vec<Decimal> {
        self.shares.clone()
    }
}

fn share_of(
    value: Decimal,
    total: Decimal,
) -> Result<Decimal, BudgetError> {
    if total.is_zero() {
        return Ok(Decimal::ZERO);
    }
    value
        .checked_div(total)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|percent| percent.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
        .ok_or(BudgetError::Overflow("percentage share"))
}

impl fmt::Display for CategoryBreakdown {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (entry, share) in self.entries.iter().zip(&self.shares) {
            writeln!(
                f,
                "{:<26} ${:>10} {:>5.1}%",
                entry.label,
                format_money(entry.value),
                share
            )?;
        }
        Ok(())
    }
}
