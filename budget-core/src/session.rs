//! The "update budget" cycle: form submissions replace the whole chart state,
//! and rejected submissions leave the last good state on screen.

use thiserror::Error;
use tracing::{info, warn};

use crate::calculations::common::round_half_up;
use crate::calculations::{BudgetError, BudgetInputs};
use crate::chart::{ChartViewState, HoverOutcome, HoverTarget, rebuild};
use crate::input::{BudgetForm, InputParseError};

/// Why a submitted form did not replace the budget.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UpdateError {
    #[error(transparent)]
    Input(#[from] InputParseError),

    #[error(transparent)]
    Budget(#[from] BudgetError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSession {
    chart: ChartViewState,
}

impl BudgetSession {
    pub fn new(inputs: BudgetInputs) -> Result<Self, BudgetError> {
        Ok(Self {
            chart: rebuild(inputs)?,
        })
    }

    pub fn chart(&self) -> &ChartViewState {
        &self.chart
    }

    /// Parses `form` and, if every field is valid and every figure fits,
    /// rebuilds the chart from it.
    ///
    /// On error the current chart, including any expanded view, is kept.
    pub fn submit(
        &mut self,
        form: &BudgetForm,
    ) -> Result<&ChartViewState, UpdateError> {
        let inputs = form
            .parse()
            .inspect_err(|error| warn!(%error, "keeping previous budget"))?;
        Ok(self.replace(inputs)?)
    }

    /// Rebuilds the chart from already-validated inputs.
    pub fn replace(
        &mut self,
        inputs: BudgetInputs,
    ) -> Result<&ChartViewState, BudgetError> {
        let chart =
            rebuild(inputs).inspect_err(|error| warn!(%error, "keeping previous budget"))?;
        self.chart = chart;
        info!(
            net_monthly = %round_half_up(self.chart.budget().income().net_monthly_income()),
            "budget updated"
        );
        Ok(&self.chart)
    }

    pub fn hover(
        &mut self,
        target: HoverTarget,
    ) -> HoverOutcome {
        self.chart.on_hover(target)
    }
}
