use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::BudgetError;
use crate::calculations::common::checked_sum;

/// Fixed monthly debt payments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtConfig {
    pub rent: Decimal,
    pub auto_payment: Decimal,
    pub car_insurance: Decimal,
    pub credit_card_payment: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebtModel {
    config: DebtConfig,
    total: Decimal,
}

impl DebtModel {
    pub fn new(config: DebtConfig) -> Result<Self, BudgetError> {
        let total = checked_sum(
            "total monthly debt",
            [
                config.rent,
                config.auto_payment,
                config.car_insurance,
                config.credit_card_payment,
            ],
        )?;
        Ok(Self { config, total })
    }

    pub fn config(&self) -> &DebtConfig {
        &self.config
    }

    pub fn total_monthly_debt(&self) -> Decimal {
        self.total
    }
}

impl TryFrom<DebtConfig> for DebtModel {
    type Error = BudgetError;

    fn try_from(config: DebtConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn total_monthly_debt_includes_car_insurance() {
        let model = DebtModel::new(DebtConfig {
            rent: dec!(1500),
            auto_payment: dec!(350),
            car_insurance: dec!(350),
            credit_card_payment: dec!(300),
        })
        .unwrap();

        assert_eq!(model.total_monthly_debt(), dec!(2500));
    }

    #[test]
    fn total_that_does_not_fit_is_rejected() {
        let result = DebtModel::new(DebtConfig {
            rent: Decimal::MAX,
            auto_payment: Decimal::MAX,
            car_insurance: dec!(0),
            credit_card_payment: dec!(0),
        });

        assert_eq!(result, Err(BudgetError::Overflow("total monthly debt")));
    }
}
