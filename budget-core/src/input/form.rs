use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

use super::brackets::{BracketParseError, parse_brackets};
use super::decimal::{NumberError, parse_decimal, parse_decimal_or_zero};
use crate::calculations::BudgetInputs;
use crate::models::{DebtConfig, IncomeConfig, TaxBracket, UtilityConfig};

/// The budget form's input fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    GrossAnnualSalary,
    FederalTaxBrackets,
    StateTaxBrackets,
    LocalTaxRate,
    FicaRate,
    MedicareAnnualCost,
    RetirementContributionAnnual,
    SavingsRate,
    CarInsuranceAnnualCost,
    Rent,
    AutoPayment,
    CarInsurance,
    CreditCardPayment,
    GasElectricCar,
    ElectricGasHouse,
    SewerWater,
    Internet,
    Cellphone,
    Entertainment,
    Cable,
    Landline,
}

impl FormField {
    pub const ALL: [FormField; 21] = [
        FormField::GrossAnnualSalary,
        FormField::FederalTaxBrackets,
        FormField::StateTaxBrackets,
        FormField::LocalTaxRate,
        FormField::FicaRate,
        FormField::MedicareAnnualCost,
        FormField::RetirementContributionAnnual,
        FormField::SavingsRate,
        FormField::CarInsuranceAnnualCost,
        FormField::Rent,
        FormField::AutoPayment,
        FormField::CarInsurance,
        FormField::CreditCardPayment,
        FormField::GasElectricCar,
        FormField::ElectricGasHouse,
        FormField::SewerWater,
        FormField::Internet,
        FormField::Cellphone,
        FormField::Entertainment,
        FormField::Cable,
        FormField::Landline,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::GrossAnnualSalary => "Gross Annual Salary",
            Self::FederalTaxBrackets => "Federal Tax Brackets",
            Self::StateTaxBrackets => "State Tax Brackets",
            Self::LocalTaxRate => "Local Tax Rate",
            Self::FicaRate => "FICA Rate",
            Self::MedicareAnnualCost => "Medicare Annual Cost",
            Self::RetirementContributionAnnual => "Retirement Contribution Annual",
            Self::SavingsRate => "Savings Rate",
            Self::CarInsuranceAnnualCost => "Car Insurance Annual Cost",
            Self::Rent => "Rent",
            Self::AutoPayment => "Auto Payment",
            Self::CarInsurance => "Car Insurance",
            Self::CreditCardPayment => "Credit Card Payment",
            Self::GasElectricCar => "Gas/Electric Car",
            Self::ElectricGasHouse => "Electric/Gas House",
            Self::SewerWater => "Sewer Water",
            Self::Internet => "Internet",
            Self::Cellphone => "Cellphone",
            Self::Entertainment => "Entertainment",
            Self::Cable => "Cable",
            Self::Landline => "Landline",
        }
    }

    /// Column/key name: the label in snake case (`gross_annual_salary`).
    pub fn key(&self) -> &'static str {
        match self {
            Self::GrossAnnualSalary => "gross_annual_salary",
            Self::FederalTaxBrackets => "federal_tax_brackets",
            Self::StateTaxBrackets => "state_tax_brackets",
            Self::LocalTaxRate => "local_tax_rate",
            Self::FicaRate => "fica_rate",
            Self::MedicareAnnualCost => "medicare_annual_cost",
            Self::RetirementContributionAnnual => "retirement_contribution_annual",
            Self::SavingsRate => "savings_rate",
            Self::CarInsuranceAnnualCost => "car_insurance_annual_cost",
            Self::Rent => "rent",
            Self::AutoPayment => "auto_payment",
            Self::CarInsurance => "car_insurance",
            Self::CreditCardPayment => "credit_card_payment",
            Self::GasElectricCar => "gas_electric_car",
            Self::ElectricGasHouse => "electric_gas_house",
            Self::SewerWater => "sewer_water",
            Self::Internet => "internet",
            Self::Cellphone => "cellphone",
            Self::Entertainment => "entertainment",
            Self::Cable => "cable",
            Self::Landline => "landline",
        }
    }

    /// Inverse of [`Self::key`], used to match CSV headers.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Fields that may be left blank and count as zero.
    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Cable | Self::Landline)
    }
}

impl fmt::Display for FormField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a form field could not be converted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputParseError {
    #[error("{field}: {source}")]
    Number {
        field: FormField,
        #[source]
        source: NumberError,
    },

    #[error("{field}: {source}")]
    Brackets {
        field: FormField,
        #[source]
        source: BracketParseError,
    },
}

impl InputParseError {
    pub fn field(&self) -> FormField {
        match self {
            Self::Number { field, .. } | Self::Brackets { field, .. } => *field,
        }
    }
}

/// Raw text of every form field, as typed.
///
/// Unset fields read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetForm {
    values: HashMap<FormField, String>,
}

impl BudgetForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(
        &mut self,
        field: FormField,
        text: impl Into<String>,
    ) -> &mut Self {
        self.values.insert(field, text.into());
        self
    }

    pub fn get(
        &self,
        field: FormField,
    ) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    /// Converts every field, stopping at the first one that fails.
    pub fn parse(&self) -> Result<BudgetInputs, InputParseError> {
        let result = self.parse_inputs();
        if let Err(error) = &result {
            warn!(field = error.field().label(), %error, "rejected budget form");
        }
        result
    }

    fn parse_inputs(&self) -> Result<BudgetInputs, InputParseError> {
        let income = IncomeConfig {
            gross_annual_salary: self.number(FormField::GrossAnnualSalary)?,
            federal_brackets: self.brackets(FormField::FederalTaxBrackets)?,
            state_brackets: self.brackets(FormField::StateTaxBrackets)?,
            local_tax_rate: self.number(FormField::LocalTaxRate)?,
            fica_rate: self.number(FormField::FicaRate)?,
            medicare_annual_cost: self.number(FormField::MedicareAnnualCost)?,
            retirement_contribution_annual: self.number(FormField::RetirementContributionAnnual)?,
            savings_rate: self.number(FormField::SavingsRate)?,
            car_insurance_annual_cost: self.number(FormField::CarInsuranceAnnualCost)?,
        };
        let debt = DebtConfig {
            rent: self.number(FormField::Rent)?,
            auto_payment: self.number(FormField::AutoPayment)?,
            car_insurance: self.number(FormField::CarInsurance)?,
            credit_card_payment: self.number(FormField::CreditCardPayment)?,
        };
        let utilities = UtilityConfig {
            gas_electric_car: self.number(FormField::GasElectricCar)?,
            electric_gas_house: self.number(FormField::ElectricGasHouse)?,
            sewer_water: self.number(FormField::SewerWater)?,
            internet: self.number(FormField::Internet)?,
            cellphone: self.number(FormField::Cellphone)?,
            entertainment: self.number(FormField::Entertainment)?,
            cable: self.number(FormField::Cable)?,
            landline: self.number(FormField::Landline)?,
        };

        Ok(BudgetInputs {
            income,
            debt,
            utilities,
        })
    }

    fn number(
        &self,
        field: FormField,
    ) -> Result<Decimal, InputParseError> {
        let text = self.get(field);
        let parsed = if field.is_optional() {
            parse_decimal_or_zero(text)
        } else {
            parse_decimal(text)
        };
        parsed.map_err(|source| InputParseError::Number { field, source })
    }

    fn brackets(
        &self,
        field: FormField,
    ) -> Result<Vec<TaxBracket>, InputParseError> {
        parse_brackets(self.get(field)).map_err(|source| InputParseError::Brackets { field, source })
    }
}

impl<K, V> FromIterator<(K, V)> for BudgetForm
where
    K: Into<FormField>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(field, text)| (field.into(), text.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::input::test_support::filled_form;

    #[test]
    fn form_has_twenty_one_distinct_fields() {
        let keys: std::collections::HashSet<_> = FormField::ALL.iter().map(|f| f.key()).collect();

        assert_eq!(keys.len(), 21);
        assert_eq!(FormField::ALL[0].label(), "Gross Annual Salary");
        assert_eq!(FormField::ALL[20].label(), "Landline");
    }

    #[test]
    fn keys_round_trip_to_fields() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_key(field.key()), Some(field));
        }
        assert_eq!(FormField::from_key("bogus"), None);
    }

    #[test]
    fn parse_builds_all_three_configs() {
        let inputs = filled_form().parse().unwrap();

        assert_eq!(inputs.income.gross_annual_salary, dec!(100300));
        assert_eq!(inputs.income.federal_brackets.len(), 4);
        assert_eq!(inputs.income.state_brackets[2].rate, dec!(0.0475));
        assert_eq!(inputs.debt.credit_card_payment, dec!(300));
        assert_eq!(inputs.utilities.entertainment, dec!(43));
    }

    #[test]
    fn blank_cable_and_landline_default_to_zero() {
        let inputs = filled_form().parse().unwrap();

        assert_eq!(inputs.utilities.cable, Decimal::ZERO);
        assert_eq!(inputs.utilities.landline, Decimal::ZERO);
    }

    #[test]
    fn blank_required_field_is_reported() {
        let mut form = filled_form();
        form.set(FormField::Rent, "  ");

        let err = form.parse().unwrap_err();

        assert_eq!(
            err,
            InputParseError::Number {
                field: FormField::Rent,
                source: NumberError::Missing,
            }
        );
        assert_eq!(err.to_string(), "Rent: a value is required");
    }

    #[test]
    fn bad_number_names_the_field() {
        let mut form = filled_form();
        form.set(FormField::FicaRate, "6.2%");

        let err = form.parse().unwrap_err();

        assert_eq!(err.field(), FormField::FicaRate);
        assert!(err.to_string().starts_with("FICA Rate: invalid number '6.2%'"));
    }

    #[test]
    fn bad_bracket_table_names_the_field() {
        let mut form = filled_form();
        form.set(FormField::StateTaxBrackets, "print('hi')");

        let err = form.parse().unwrap_err();

        assert!(matches!(
            err,
            InputParseError::Brackets {
                field: FormField::StateTaxBrackets,
                ..
            }
        ));
    }

    #[test]
    fn get_returns_empty_for_unset_fields() {
        assert_eq!(BudgetForm::new().get(FormField::Cable), "");
    }
}
