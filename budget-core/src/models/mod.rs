mod breakdown;
mod debt;
mod income;
mod tax_bracket;
mod utilities;

pub use breakdown::{BreakdownEntry, Category, CategoryBreakdown};
pub use debt::{DebtConfig, DebtModel};
pub use income::{IncomeConfig, IncomeModel};
pub use tax_bracket::TaxBracket;
pub use utilities::{UtilityConfig, UtilityModel};
