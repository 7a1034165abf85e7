use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{checked_product, checked_sum};
use crate::calculations::{BudgetError, checked_progressive_tax};
use crate::models::TaxBracket;

/// Salary and the tax/deduction settings applied to it.
///
/// All amounts are annual except where the field name says otherwise.
/// Rates are fractions (`0.062` for 6.2%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeConfig {
    pub gross_annual_salary: Decimal,
    pub federal_brackets: Vec<TaxBracket>,
    pub state_brackets: Vec<TaxBracket>,
    pub local_tax_rate: Decimal,
    pub fica_rate: Decimal,
    pub savings_rate: Decimal,
    pub medicare_annual_cost: Decimal,
    pub retirement_contribution_annual: Decimal,
    pub car_insurance_annual_cost: Decimal,
}

/// Taxes, deductions and net income derived from an [`IncomeConfig`].
///
/// Every figure is computed once, with checked arithmetic, when the model is
/// built; a configuration whose figures do not fit in a `Decimal` is rejected
/// there instead of panicking later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeModel {
    config: IncomeConfig,
    federal_tax: Decimal,
    state_tax: Decimal,
    local_tax: Decimal,
    fica: Decimal,
    savings: Decimal,
    total_taxes: Decimal,
    total_deductions: Decimal,
    net_annual_income: Decimal,
}

impl IncomeModel {
    pub fn new(config: IncomeConfig) -> Result<Self, BudgetError> {
        let salary = config.gross_annual_salary;

        let federal_tax = checked_progressive_tax(salary, &config.federal_brackets)
            .ok_or(BudgetError::Overflow("federal tax"))?;
        let state_tax = checked_progressive_tax(salary, &config.state_brackets)
            .ok_or(BudgetError::Overflow("state tax"))?;
        let local_tax = checked_product("local tax", salary, config.local_tax_rate)?;
        let fica = checked_product("FICA", salary, config.fica_rate)?;
        let savings = checked_product("savings", salary, config.savings_rate)?;

        let total_taxes = checked_sum(
            "total taxes",
            [federal_tax, state_tax, local_tax, fica, config.medicare_annual_cost],
        )?;
        let total_deductions = checked_sum(
            "total deductions",
            [
                total_taxes,
                config.retirement_contribution_annual,
                savings,
                config.car_insurance_annual_cost,
            ],
        )?;
        let net_annual_income = checked_sum("net annual income", [salary, -total_deductions])?;

        Ok(Self {
            config,
            federal_tax,
            state_tax,
            local_tax,
            fica,
            savings,
            total_taxes,
            total_deductions,
            net_annual_income,
        })
    }

    pub fn config(&self) -> &IncomeConfig {
        &self.config
    }

    pub fn gross_annual_salary(&self) -> Decimal {
        self.config.gross_annual_salary
    }

    pub fn federal_tax(&self) -> Decimal {
        self.federal_tax
    }

    pub fn state_tax(&self) -> Decimal {
        self.state_tax
    }

    pub fn local_tax(&self) -> Decimal {
        self.local_tax
    }

    pub fn fica(&self) -> Decimal {
        self.fica
    }

    pub fn savings(&self) -> Decimal {
        self.savings
    }

    pub fn medicare(&self) -> Decimal {
        self.config.medicare_annual_cost
    }

    pub fn retirement_contribution(&self) -> Decimal {
        self.config.retirement_contribution_annual
    }

    pub fn car_insurance(&self) -> Decimal {
        self.config.car_insurance_annual_cost
    }

    /// Federal, state and local tax plus FICA and Medicare, per year.
    pub fn total_taxes(&self) -> Decimal {
        self.total_taxes
    }

    /// Everything taken out of the gross salary before it reaches the
    /// household: taxes, Medicare, retirement, savings and car insurance.
    pub fn total_deductions(&self) -> Decimal {
        self.total_deductions
    }

    /// Gross salary minus total deductions.
    ///
    /// Negative when deductions exceed the salary; that is a valid result.
    pub fn net_annual_income(&self) -> Decimal {
        self.net_annual_income
    }

    pub fn net_monthly_income(&self) -> Decimal {
        self.net_annual_income / Decimal::from(12)
    }
}

impl TryFrom<IncomeConfig> for IncomeModel {
    type Error = BudgetError;

    fn try_from(config: IncomeConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}
