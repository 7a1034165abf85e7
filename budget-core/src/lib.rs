pub mod calculations;
pub mod chart;
pub mod input;
pub mod models;
pub mod report;
pub mod session;

pub use calculations::{Budget, BudgetError, BudgetInputs};
pub use chart::{ChartViewState, HoverOutcome, HoverTarget, Tooltip, ViewState, rebuild};
pub use input::{BudgetForm, FormField, InputParseError};
pub use models::*;
pub use report::BudgetReport;
pub use session::{BudgetSession, UpdateError};
