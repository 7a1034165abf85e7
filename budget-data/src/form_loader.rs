//! CSV import of budget form values.
//!
//! ## CSV Format
//!
//! One budget per row. Headers are matched by name, so column order does not
//! matter, but a header that names no form field is rejected. Every value is read as text and goes through the same parser as
//! typed form input, so bracket tables must be quoted:
//!
//! | Column                           | Required | Notes                                  |
//! |----------------------------------|----------|----------------------------------------|
//! | `gross_annual_salary`            | yes      | e.g. `100300`                          |
//! | `federal_tax_brackets`           | yes      | e.g. `"[(11000, 0.10), (44725, 0.12)]"`|
//! | `state_tax_brackets`             | yes      |                                        |
//! | `local_tax_rate`                 | yes      | fraction, e.g. `0.032`                 |
//! | `fica_rate`                      | yes      |                                        |
//! | `medicare_annual_cost`           | yes      |                                        |
//! | `retirement_contribution_annual` | yes      |                                        |
//! | `savings_rate`                   | yes      |                                        |
//! | `car_insurance_annual_cost`      | yes      |                                        |
//! | `rent`                           | yes      | monthly                                |
//! | `auto_payment`                   | yes      | monthly                                |
//! | `car_insurance`                  | yes      | monthly                                |
//! | `credit_card_payment`            | yes      | monthly                                |
//! | `gas_electric_car`               | yes      | monthly                                |
//! | `electric_gas_house`             | yes      | monthly                                |
//! | `sewer_water`                    | yes      | monthly                                |
//! | `internet`                       | yes      | monthly                                |
//! | `cellphone`                      | yes      | monthly                                |
//! | `entertainment`                  | yes      | monthly                                |
//! | `cable`                          | no       | column may be absent or blank; zero    |
//! | `landline`                       | no       | column may be absent or blank; zero    |

use std::io::Read;
use std::path::Path;

use budget_core::{BudgetForm, BudgetInputs, FormField, InputParseError};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading budget rows.
#[derive(Debug, Error)]
pub enum BudgetCsvError {
    /// Bad CSV structure, or a required column is missing.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A value failed the form parser. `row` is 1-based, header excluded.
    #[error("row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: InputParseError,
    },

    /// A header names no form field, usually a typo.
    #[error("unknown column '{column}'")]
    UnknownColumn { column: String },

    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    gross_annual_salary: String,
    federal_tax_brackets: String,
    state_tax_brackets: String,
    local_tax_rate: String,
    fica_rate: String,
    medicare_annual_cost: String,
    retirement_contribution_annual: String,
    savings_rate: String,
    car_insurance_annual_cost: String,
    rent: String,
    auto_payment: String,
    car_insurance: String,
    credit_card_payment: String,
    gas_electric_car: String,
    electric_gas_house: String,
    sewer_water: String,
    internet: String,
    cellphone: String,
    entertainment: String,
    #[serde(default)]
    cable: String,
    #[serde(default)]
    landline: String,
}

impl From<CsvRow> for BudgetForm {
    fn from(row: CsvRow) -> Self {
        [
            (FormField::GrossAnnualSalary, row.gross_annual_salary),
            (FormField::FederalTaxBrackets, row.federal_tax_brackets),
            (FormField::StateTaxBrackets, row.state_tax_brackets),
            (FormField::LocalTaxRate, row.local_tax_rate),
            (FormField::FicaRate, row.fica_rate),
            (FormField::MedicareAnnualCost, row.medicare_annual_cost),
            (FormField::RetirementContributionAnnual, row.retirement_contribution_annual),
            (FormField::SavingsRate, row.savings_rate),
            (FormField::CarInsuranceAnnualCost, row.car_insurance_annual_cost),
            (FormField::Rent, row.rent),
            (FormField::AutoPayment, row.auto_payment),
            (FormField::CarInsurance, row.car_insurance),
            (FormField::CreditCardPayment, row.credit_card_payment),
            (FormField::GasElectricCar, row.gas_electric_car),
            (FormField::ElectricGasHouse, row.electric_gas_house),
            (FormField::SewerWater, row.sewer_water),
            (FormField::Internet, row.internet),
            (FormField::Cellphone, row.cellphone),
            (FormField::Entertainment, row.entertainment),
            (FormField::Cable, row.cable),
            (FormField::Landline, row.landline),
        ]
        .into_iter()
        .collect()
    }
}

/// Loader for budget rows stored as CSV.
pub struct BudgetCsvLoader;

impl BudgetCsvLoader {
    /// Reads every row as raw form text, in file order.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BudgetForm>, BudgetCsvError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        if let Some(column) = csv_reader
            .headers()?
            .iter()
            .find(|header| FormField::from_key(header).is_none())
        {
            return Err(BudgetCsvError::UnknownColumn {
                column: column.to_string(),
            });
        }

        let mut forms = Vec::new();
        for result in csv_reader.deserialize::<CsvRow>() {
            forms.push(BudgetForm::from(result?));
        }

        debug!(rows = forms.len(), "parsed budget CSV");
        Ok(forms)
    }

    /// Reads and validates every row.
    ///
    /// # Errors
    ///
    /// * [`BudgetCsvError::Parse`] if the CSV is malformed.
    /// * [`BudgetCsvError::UnknownColumn`] if a header names no form field.
    /// * [`BudgetCsvError::InvalidRow`] for the first row whose values do not
    ///   parse.
    pub fn load<R: Read>(reader: R) -> Result<Vec<BudgetInputs>, BudgetCsvError> {
        Self::parse(reader)?
            .iter()
            .enumerate()
            .map(|(idx, form)| {
                form.parse().map_err(|source| BudgetCsvError::InvalidRow {
                    row: idx + 1,
                    source,
                })
            })
            .collect()
    }

    /// Convenience wrapper: open `path` and delegate to [`Self::load`].
    pub fn load_file(path: &Path) -> Result<Vec<BudgetInputs>, BudgetCsvError> {
        let file = std::fs::File::open(path).map_err(|source| BudgetCsvError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::load(file)
    }
}
