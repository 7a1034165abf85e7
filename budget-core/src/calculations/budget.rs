//! Monthly budget aggregation.
//!
//! Combines the income, debt and utility models into the four top-level
//! categories shown on the chart and the sub-items each one expands into.
//!
//! | Category          | Monthly value                                         |
//! |-------------------|-------------------------------------------------------|
//! | Taxes             | (federal + state + local + FICA + Medicare) / 12      |
//! | Mortgage and Debt | total monthly debt                                    |
//! | Utilities         | total monthly utilities                               |
//! | Free Money        | leftover money + retirement contribution / 12         |
//!
//! Free Money adds the retirement contribution back after it was already
//! subtracted as a deduction, so the four values do not sum to the monthly
//! gross salary. The chart shows what the household would have if it had not
//! contributed; this is not an accounting identity and is kept as is.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::checked_sum;

use crate::models::{
    Category, CategoryBreakdown, DebtConfig, DebtModel, IncomeConfig, IncomeModel, UtilityConfig,
    UtilityModel,
};

/// The three configuration snapshots a budget is built from.
///
/// An update always replaces all three together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetInputs {
    pub income: IncomeConfig,
    pub debt: DebtConfig,
    pub utilities: UtilityConfig,
}

/// A budget figure that does not fit in a `Decimal`.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BudgetError {
    #[error("{0} is too large to compute")]
    Overflow(&'static str),
}

/// Derives leftover money and the chart categories from the three models.
///
/// The overview and every expansion are built with the budget, so a budget
/// that exists can always be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Budget {
    income: IncomeModel,
    debt: DebtModel,
    utilities: UtilityModel,
    leftover_money: Decimal,
    free_money: Decimal,
    overview: CategoryBreakdown,
    expansions: [CategoryBreakdown; 4],
}

impl Budget {
    pub fn new(
        income: IncomeModel,
        debt: DebtModel,
        utilities: UtilityModel,
    ) -> Result<Self, BudgetError> {
        let leftover_money = checked_sum(
            "leftover money",
            [
                income.net_monthly_income(),
                -debt.total_monthly_debt(),
                -utilities.total_monthly_utilities(),
            ],
        )?;
        let retirement_funding = income.retirement_contribution() / months();
        let free_money = checked_sum("free money", [leftover_money, retirement_funding])?;

        let mut budget = Self {
            income,
            debt,
            utilities,
            leftover_money,
            free_money,
            overview: CategoryBreakdown::default(),
            expansions: Default::default(),
        };
        budget.overview = CategoryBreakdown::new(
            Category::ALL.map(|category| (category.label(), budget.category_total(category))),
        )?;
        budget.expansions = [
            budget.build_expansion(Category::Taxes)?,
            budget.build_expansion(Category::MortgageAndDebt)?,
            budget.build_expansion(Category::Utilities)?,
            budget.build_expansion(Category::FreeMoney)?,
        ];
        debug!(total = %budget.overview.total(), "built budget overview");

        Ok(budget)
    }

    pub fn income(&self) -> &IncomeModel {
        &self.income
    }

    pub fn debt(&self) -> &DebtModel {
        &self.debt
    }

    pub fn utilities(&self) -> &UtilityModel {
        &self.utilities
    }

    /// Net monthly income after debt and utilities.
    pub fn leftover_money(&self) -> Decimal {
        self.leftover_money
    }

    pub fn retirement_funding(&self) -> Decimal {
        self.income.retirement_contribution() / months()
    }

    /// Monthly value of one top-level category.
    pub fn category_total(
        &self,
        category: Category,
    ) -> Decimal {
        match category {
            Category::Taxes => self.income.total_taxes() / months(),
            Category::MortgageAndDebt => self.debt.total_monthly_debt(),
            Category::Utilities => self.utilities.total_monthly_utilities(),
            Category::FreeMoney => self.free_money,
        }
    }

    /// The four-category overview, in [`Category::ALL`] order.
    pub fn overview(&self) -> CategoryBreakdown {
        self.overview.clone()
    }

    /// The sub-items one category expands into.
    ///
    /// Debt leaves out car insurance and Utilities shows six of the eight
    /// utility items (entertainment and landline are not broken out), so those
    /// two expansions do not sum to their overview totals.
    pub fn expansion(
        &self,
        category: Category,
    ) -> CategoryBreakdown {
        self.expansions[category.index()].clone()
    }

    fn build_expansion(
        &self,
        category: Category,
    ) -> Result<CategoryBreakdown, BudgetError> {
        match category {
            Category::Taxes => {
                let twelve = months();
                CategoryBreakdown::new([
                    ("Federal Tax", self.income.federal_tax() / twelve),
                    ("State Tax", self.income.state_tax() / twelve),
                    ("Local Tax", self.income.local_tax() / twelve),
                    ("FICA", self.income.fica() / twelve),
                    ("Medicare", self.income.medicare() / twelve),
                ])
            }
            Category::MortgageAndDebt => {
                let debt = self.debt.config();
                CategoryBreakdown::new([
                    ("Rent", debt.rent),
                    ("Auto Payment", debt.auto_payment),
                    ("Credit Card Payment", debt.credit_card_payment),
                ])
            }
            Category::Utilities => {
                let utilities = self.utilities.config();
                CategoryBreakdown::new([
                    ("Car Gas/Electric", utilities.gas_electric_car),
                    ("Electric and Gas (Home)", utilities.electric_gas_house),
                    ("Cable", utilities.cable),
                    ("Internet", utilities.internet),
                    ("Cellphone", utilities.cellphone),
                    ("Sewer and Water", utilities.sewer_water),
                ])
            }
            Category::FreeMoney => CategoryBreakdown::new([
                ("Leftover", self.leftover_money),
                ("Retirement Funding", self.retirement_funding()),
            ]),
        }
    }
}

impl TryFrom<BudgetInputs> for Budget {
    type Error = BudgetError;

    fn try_from(inputs: BudgetInputs) -> Result<Self, Self::Error> {
        Self::new(
            IncomeModel::new(inputs.income)?,
            DebtModel::new(inputs.debt)?,
            UtilityModel::new(inputs.utilities)?,
        )
    }
}

fn months() -> Decimal {
    Decimal::from(12)
}
