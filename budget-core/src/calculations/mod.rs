//! Budget and loan arithmetic.
//!
//! Everything here is a pure function of its inputs. Budget figures are
//! derived with checked arithmetic, so oversized inputs surface as a
//! [`BudgetError`] rather than a panic. Amounts are never rounded inside a
//! calculation; see [`common`] for display helpers.

pub mod amortization;
pub mod budget;
pub mod common;
pub mod progressive;

pub use amortization::{
    AmortizationError, LoanTerms, MAX_TERM_YEARS, MonthRecord, ScheduleComparison,
    amortization_schedule, compare_schedules, monthly_payment, total_interest,
};
pub use budget::{Budget, BudgetError, BudgetInputs};
pub use progressive::{checked_progressive_tax, progressive_tax};
