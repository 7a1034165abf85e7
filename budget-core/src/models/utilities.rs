use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::BudgetError;
use crate::calculations::common::checked_sum;

/// Fixed monthly utility and entertainment costs.
///
/// `cable` and `landline` are optional in configuration files and default
/// to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilityConfig {
    pub gas_electric_car: Decimal,
    pub electric_gas_house: Decimal,
    pub sewer_water: Decimal,
    pub internet: Decimal,
    pub cellphone: Decimal,
    pub entertainment: Decimal,
    #[serde(default)]
    pub cable: Decimal,
    #[serde(default)]
    pub landline: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilityModel {
    config: UtilityConfig,
    total: Decimal,
}

impl UtilityModel {
    pub fn new(config: UtilityConfig) -> Result<Self, BudgetError> {
        let total = checked_sum(
            "total monthly utilities",
            [
                config.gas_electric_car,
                config.electric_gas_house,
                config.sewer_water,
                config.internet,
                config.cellphone,
                config.entertainment,
                config.cable,
                config.landline,
            ],
        )?;
        Ok(Self { config, total })
    }

    pub fn config(&self) -> &UtilityConfig {
        &self.config
    }

    pub fn total_monthly_utilities(&self) -> Decimal {
        self.total
    }
}

impl TryFrom<UtilityConfig> for UtilityModel {
    type Error = BudgetError;

    fn try_from(config: UtilityConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::test_support::sample_utility_config;

    #[test]
    fn total_monthly_utilities_sums_all_eight_items() {
        let model = UtilityModel::new(sample_utility_config()).unwrap();

        assert_eq!(model.total_monthly_utilities(), dec!(548));
    }

    #[test]
    fn cable_and_landline_count_when_present() {
        let model = UtilityModel::new(UtilityConfig {
            cable: dec!(60),
            landline: dec!(20),
            ..sample_utility_config()
        })
        .unwrap();

        assert_eq!(model.total_monthly_utilities(), dec!(628));
    }
}
