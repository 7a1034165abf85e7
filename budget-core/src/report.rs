//! Sectioned text summary of a budget.

use std::fmt;

use rust_decimal::Decimal;

use crate::calculations::Budget;
use crate::calculations::common::format_money;

const BANNER_WIDTH: usize = 59;

/// Renders every derived figure of a [`Budget`] under `=` banners.
#[derive(Debug, Clone, Copy)]
pub struct BudgetReport<'a> {
    budget: &'a Budget,
}

impl<'a> BudgetReport<'a> {
    pub fn new(budget: &'a Budget) -> Self {
        Self { budget }
    }
}

/// `title` centered between runs of `=`, the whole line `BANNER_WIDTH` wide.
fn banner_title(title: &str) -> String {
    let padded = format!(" {title} ");
    let fill = BANNER_WIDTH.saturating_sub(padded.chars().count());
    let left = fill / 2;
    format!("{}{}{}", "=".repeat(left), padded, "=".repeat(fill - left))
}

fn section(
    f: &mut fmt::Formatter<'_>,
    title: &str,
) -> fmt::Result {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(f, "{rule}")?;
    writeln!(f, "{}", banner_title(title))?;
    writeln!(f, "{rule}")
}

fn line(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    amount: Decimal,
) -> fmt::Result {
    writeln!(f, "{label}: ${}", format_money(amount))
}

impl fmt::Display for BudgetReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let income = self.budget.income();
        let debt = self.budget.debt();
        let utilities = self.budget.utilities();

        section(f, "Gross Income")?;
        line(f, "Gross Annual Salary", income.gross_annual_salary())?;
        writeln!(f)?;

        section(f, "Taxes")?;
        line(f, "Federal Tax", income.federal_tax())?;
        line(f, "State Tax", income.state_tax())?;
        line(f, "Local Tax", income.local_tax())?;
        line(f, "FICA", income.fica())?;
        writeln!(f)?;

        section(f, "Health Insurance")?;
        line(f, "Medicare", income.medicare())?;
        writeln!(f)?;

        section(f, "Retirement")?;
        line(f, "Company Retirement Contribution", income.retirement_contribution())?;
        line(f, "Savings", income.savings())?;
        writeln!(f)?;

        section(f, "Car Insurance")?;
        line(f, "Car Insurance", income.car_insurance())?;
        writeln!(f)?;

        section(f, "Summary")?;
        line(f, "Total Deductions", income.total_deductions())?;
        line(f, "Net Annual Income", income.net_annual_income())?;
        line(f, "Net Monthly Income", income.net_monthly_income())?;
        writeln!(f)?;

        let d = debt.config();
        section(f, "Rent")?;
        line(f, "Rent", d.rent)?;
        writeln!(f)?;

        section(f, "Car Bills")?;
        line(f, "Auto Payment", d.auto_payment)?;
        line(f, "Car Insurance", d.car_insurance)?;
        writeln!(f)?;

        section(f, "Credit Card")?;
        line(f, "Credit Card Payment", d.credit_card_payment)?;
        writeln!(f)?;

        section(f, "Total Monthly Bills")?;
        line(f, "Total Monthly Debt Payments", debt.total_monthly_debt())?;
        writeln!(f)?;

        let u = utilities.config();
        section(f, "Utilities Bills")?;
        line(f, "Gas/Electric for Car", u.gas_electric_car)?;
        line(f, "Electric/Gas for House", u.electric_gas_house)?;
        line(f, "Sewer and Water", u.sewer_water)?;
        line(f, "Internet", u.internet)?;
        line(f, "Cellphone", u.cellphone)?;
        line(f, "Entertainment", u.entertainment)?;
        line(f, "Cable", u.cable)?;
        line(f, "Landline", u.landline)?;
        line(
            f,
            "Total Monthly Utility and Entertainment Costs",
            utilities.total_monthly_utilities(),
        )?;
        writeln!(f)?;

        section(f, "Leftover Money")?;
        line(f, "Leftover Money after all deductions", self.budget.leftover_money())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculations::BudgetInputs;
    use crate::models::test_support::{
        sample_debt_config, sample_income_config, sample_utility_config,
    };

    fn sample_budget() -> Budget {
        Budget::try_from(BudgetInputs {
            income: sample_income_config(),
            debt: sample_debt_config(),
            utilities: sample_utility_config(),
        })
        .unwrap()
    }

    #[test]
    fn banner_title_centers_odd_padding_to_the_right() {
        assert_eq!(
            banner_title("Gross Income"),
            format!("{} Gross Income {}", "=".repeat(22), "=".repeat(23))
        );
        assert_eq!(
            banner_title("Taxes"),
            format!("{} Taxes {}", "=".repeat(26), "=".repeat(26))
        );
    }

    #[test]
    fn report_lists_taxes_and_net_income() {
        let budget = sample_budget();
        let text = BudgetReport::new(&budget).to_string();

        assert!(text.contains("Federal Tax: $17472.00"));
        assert!(text.contains("State Tax: $4972.50"));
        assert!(text.contains("Net Annual Income: $44959.30"));
        assert!(text.contains("Net Monthly Income: $3746.61"));
        assert!(text.contains("Total Monthly Debt Payments: $2500.00"));
        assert!(text.contains("Total Monthly Utility and Entertainment Costs: $548.00"));
    }

    #[test]
    fn report_ends_with_leftover_money() {
        let budget = sample_budget();
        let text = BudgetReport::new(&budget).to_string();

        assert!(text.trim_end().ends_with("Leftover Money after all deductions: $698.61"));
    }

    #[test]
    fn every_banner_line_is_full_width() {
        let budget = sample_budget();
        let text = BudgetReport::new(&budget).to_string();

        for banner in text.lines().filter(|l| l.starts_with('=')) {
            assert_eq!(banner.chars().count(), BANNER_WIDTH);
        }
    }
}
