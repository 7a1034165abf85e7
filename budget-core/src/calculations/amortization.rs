//! Fixed-rate loan amortization.
//!
//! Simulates a loan month by month at the fixed annuity payment that would
//! retire it over its full term, optionally adding a fixed extra amount to the
//! principal each month. The schedule stops the first month the balance
//! reaches zero or below.
//!
//! The last principal payment is not trimmed to the remaining balance, so the
//! final `remaining_balance` can be slightly negative.
//!
//! Terms are capped at [`MAX_TERM_YEARS`].
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use budget_core::calculations::{LoanTerms, compare_schedules};
//!
//! let terms = LoanTerms {
//!     principal: dec!(32000),
//!     annual_rate: dec!(0.05),
//!     years: 5,
//!     extra_payment: dec!(500),
//! };
//!
//! let comparison = compare_schedules(&terms).unwrap();
//!
//! assert_eq!(comparison.baseline.len(), 60);
//! assert!(comparison.accelerated.len() < 60);
//! assert!(comparison.interest_saved() > dec!(0));
//! ```

use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Inputs that cannot produce a meaningful schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmortizationError {
    #[error("principal must be positive, got {0}")]
    NonPositivePrincipal(Decimal),

    #[error("loan term must be at least one year")]
    ZeroTerm,

    #[error("loan term of {years} years is longer than the {max}-year maximum")]
    TermTooLong { years: u32, max: u32 },

    #[error("annual rate must not be negative, got {0}")]
    NegativeRate(Decimal),

    #[error("extra payment must not be negative, got {0}")]
    NegativeExtraPayment(Decimal),

    /// The annuity formula overflowed or divided by zero.
    #[error("monthly payment is not representable for rate {monthly_rate} over {periods} months")]
    UnrepresentablePayment { monthly_rate: Decimal, periods: u32 },

    #[error("loan balance is not representable in month {month}")]
    ScheduleOverflow { month: u32 },
}

/// Longest loan term accepted, in years.
pub const MAX_TERM_YEARS: u32 = 100;

/// Loan parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Decimal,
    /// Fraction, e.g. `0.05` for 5% a year.
    pub annual_rate: Decimal,
    pub years: u32,
    /// Added to the principal portion every month.
    pub extra_payment: Decimal,
}

impl LoanTerms {
    /// Number of monthly payments in the full term.
    pub fn periods(&self) -> Result<u32, AmortizationError> {
        let too_long = AmortizationError::TermTooLong {
            years: self.years,
            max: MAX_TERM_YEARS,
        };
        if self.years > MAX_TERM_YEARS {
            return Err(too_long);
        }
        self.years.checked_mul(12).ok_or(too_long)
    }

    pub fn monthly_rate(&self) -> Decimal {
        self.annual_rate / Decimal::from(12)
    }

    /// The same loan without the extra payment.
    pub fn without_extra(&self) -> Self {
        Self {
            extra_payment: Decimal::ZERO,
            ..self.clone()
        }
    }

    fn validate(&self) -> Result<(), AmortizationError> {
        if self.principal <= Decimal::ZERO {
            return Err(AmortizationError::NonPositivePrincipal(self.principal));
        }
        if self.years == 0 {
            return Err(AmortizationError::ZeroTerm);
        }
        self.periods()?;
        if self.annual_rate < Decimal::ZERO {
            return Err(AmortizationError::NegativeRate(self.annual_rate));
        }
        if self.extra_payment < Decimal::ZERO {
            return Err(AmortizationError::NegativeExtraPayment(self.extra_payment));
        }
        Ok(())
    }
}

/// One month of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRecord {
    /// 1-based.
    pub month: u32,
    /// Amount paid this month, extra payment included.
    pub payment: Decimal,
    pub principal_payment: Decimal,
    pub interest_payment: Decimal,
    pub remaining_balance: Decimal,
}

/// Fixed payment that retires `principal` over `periods` months.
///
/// Uses `rate * principal / (1 - (1 + rate)^-periods)`, or `principal /
/// periods` when the rate is zero.
pub fn monthly_payment(
    principal: Decimal,
    monthly_rate: Decimal,
    periods: u32,
) -> Result<Decimal, AmortizationError> {
    let unrepresentable = || AmortizationError::UnrepresentablePayment {
        monthly_rate,
        periods,
    };

    if periods == 0 {
        return Err(unrepresentable());
    }
    if monthly_rate.is_zero() {
        return Ok(principal / Decimal::from(periods));
    }

    // Multiplying through by (1 + rate)^n avoids the negative exponent.
    let growth = (Decimal::ONE + monthly_rate)
        .checked_powu(u64::from(periods))
        .ok_or_else(unrepresentable)?;
    let numerator = monthly_rate
        .checked_mul(principal)
        .and_then(|v| v.checked_mul(growth))
        .ok_or_else(unrepresentable)?;
    let denominator = growth - Decimal::ONE;

    numerator
        .checked_div(denominator)
        .ok_or_else(unrepresentable)
}

/// Month-by-month schedule for `terms`.
///
/// Has at most `years * 12` records and ends early once the balance is paid
/// off.
pub fn amortization_schedule(terms: &LoanTerms) -> Result<Vec<MonthRecord>, AmortizationError> {
    terms.validate()?;

    let monthly_rate = terms.monthly_rate();
    let periods = terms.periods()?;
    let payment = monthly_payment(terms.principal, monthly_rate, periods)?;
    let paid = payment
        .checked_add(terms.extra_payment)
        .ok_or(AmortizationError::UnrepresentablePayment {
            monthly_rate,
            periods,
        })?;

    let mut balance = terms.principal;
    let mut interest_total = Decimal::ZERO;
    let mut schedule = Vec::new();

    for month in 1..=periods {
        let overflow = || AmortizationError::ScheduleOverflow { month };
        let interest_payment = balance.checked_mul(monthly_rate).ok_or_else(overflow)?;
        let principal_payment = payment
            .checked_sub(interest_payment)
            .and_then(|p| p.checked_add(terms.extra_payment))
            .ok_or_else(overflow)?;
        balance = balance.checked_sub(principal_payment).ok_or_else(overflow)?;
        // total_interest() of the finished schedule must fit.
        interest_total = interest_total
            .checked_add(interest_payment)
            .ok_or_else(overflow)?;

        schedule.push(MonthRecord {
            month,
            payment: paid,
            principal_payment,
            interest_payment,
            remaining_balance: balance,
        });

        if balance <= Decimal::ZERO {
            break;
        }
    }

    debug!(
        months = schedule.len(),
        %payment,
        extra = %terms.extra_payment,
        "built amortization schedule"
    );
    Ok(schedule)
}

/// A loan's schedule with and without its extra payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleComparison {
    pub baseline: Vec<MonthRecord>,
    pub accelerated: Vec<MonthRecord>,
}

impl ScheduleComparison {
    pub fn months_saved(&self) -> usize {
        self.baseline.len().saturating_sub(self.accelerated.len())
    }

    pub fn interest_saved(&self) -> Decimal {
        total_interest(&self.baseline) - total_interest(&self.accelerated)
    }
}

pub fn total_interest(schedule: &[MonthRecord]) -> Decimal {
    schedule.iter().map(|r| r.interest_payment).sum()
}

pub fn compare_schedules(terms: &LoanTerms) -> Result<ScheduleComparison, AmortizationError> {
    Ok(ScheduleComparison {
        baseline: amortization_schedule(&terms.without_extra())?,
        accelerated: amortization_schedule(terms)?,
    })
}
