//! Drill-down state of the budget pie chart.
//!
//! The chart starts on the four-category overview. Hovering a category's
//! wedge replaces the view with that category's sub-items; moving the pointer
//! off every wedge restores the overview. While expanded, hovering a wedge only
//! produces a tooltip for it.
//!
//! ```text
//!              Wedge(i) over category
//!   Overview ───────────────────────────▶ Expanded(category)
//!      ▲                                     │   │ Wedge(j): tooltip
//!      └──────────── Background ─────────────┘   └──────────┘
//! ```
//!
//! Wedges are identified by index into the displayed breakdown; mapping
//! pointer coordinates to a wedge is the renderer's job.
//!
//! # Example
//!
//! ```
//! use budget_core::chart::{HoverOutcome, HoverTarget};
//! # use budget_core::{Budget, ChartViewState, Category};
//! # fn demo(budget: Budget) {
//! let mut chart = ChartViewState::new(budget);
//!
//! assert_eq!(chart.on_hover(HoverTarget::Wedge(0)), HoverOutcome::Expanded(Category::Taxes));
//! assert_eq!(chart.current().labels()[0], "Federal Tax");
//!
//! assert_eq!(chart.on_hover(HoverTarget::Background), HoverOutcome::Restored);
//! assert_eq!(chart.current(), chart.overview());
//! # }
//! ```

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::calculations::common::format_money;
use crate::calculations::{Budget, BudgetError, BudgetInputs};
use crate::models::{Category, CategoryBreakdown};

/// Which view the chart is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewState {
    Overview,
    Expanded(Category),
}

/// Where the pointer is, as reported by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    /// Over the wedge at this index of the current view.
    Wedge(usize),
    /// Inside the chart area but over no wedge.
    Background,
    /// Outside the chart area.
    Outside,
}

/// Label and amount of the hovered wedge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tooltip {
    pub index: usize,
    pub label: String,
    pub value: Decimal,
}

impl fmt::Display for Tooltip {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}: ${}", self.label, format_money(self.value))
    }
}

/// What the renderer should do after a hover event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverOutcome {
    /// Redraw with [`ChartViewState::current`], now showing this category.
    Expanded(Category),
    /// Redraw with the overview and hide any tooltip.
    Restored,
    /// Show a tooltip; the view is unchanged.
    Tooltip(Tooltip),
    /// Nothing to do.
    Unchanged,
}

/// The breakdown currently on screen plus the overview to return to.
///
/// Built fresh from each set of budget inputs; only hover events change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartViewState {
    budget: Budget,
    overview: CategoryBreakdown,
    current: CategoryBreakdown,
    state: ViewState,
}

impl ChartViewState {
    pub fn new(budget: Budget) -> Self {
        let overview = budget.overview();
        Self {
            budget,
            current: overview.clone(),
            overview,
            state: ViewState::Overview,
        }
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// The breakdown to draw.
    pub fn current(&self) -> &CategoryBreakdown {
        &self.current
    }

    /// The overview captured when this state was built.
    pub fn overview(&self) -> &CategoryBreakdown {
        &self.overview
    }

    pub fn on_hover(
        &mut self,
        target: HoverTarget,
    ) -> HoverOutcome {
        match (self.state, target) {
            (_, HoverTarget::Outside) => HoverOutcome::Unchanged,
            (ViewState::Overview, HoverTarget::Wedge(index)) => match Category::from_index(index) {
                Some(category) => self.expand(category),
                None => {
                    trace!(index, "hover past the last overview wedge");
                    HoverOutcome::Unchanged
                }
            },
            (ViewState::Overview, HoverTarget::Background) => HoverOutcome::Unchanged,
            (ViewState::Expanded(_), HoverTarget::Wedge(index)) => match self.current.get(index) {
                Some(entry) => HoverOutcome::Tooltip(Tooltip {
                    index,
                    label: entry.label.clone(),
                    value: entry.value,
                }),
                None => HoverOutcome::Unchanged,
            },
            (ViewState::Expanded(_), HoverTarget::Background) => self.restore(),
        }
    }

    fn expand(
        &mut self,
        category: Category,
    ) -> HoverOutcome {
        debug!(%category, "expanding chart category");
        self.current = self.budget.expansion(category);
        self.state = ViewState::Expanded(category);
        HoverOutcome::Expanded(category)
    }

    fn restore(&mut self) -> HoverOutcome {
        debug!("restoring chart overview");
        self.current = self.overview.clone();
        self.state = ViewState::Overview;
        HoverOutcome::Restored
    }
}

/// Builds a fresh chart state, on the overview, from a full set of inputs.
pub fn rebuild(inputs: BudgetInputs) -> Result<ChartViewState, BudgetError> {
    Budget::try_from(inputs).map(ChartViewState::new)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::test_support::{
        sample_debt_config, sample_income_config, sample_utility_config,
    };

    fn sample_inputs() -> BudgetInputs {
        BudgetInputs {
            income: sample_income_config(),
            debt: sample_debt_config(),
            utilities: sample_utility_config(),
        }
    }

    fn sample_chart() -> ChartViewState {
        rebuild(sample_inputs()).unwrap()
    }

    #[test]
    fn starts_on_overview() {
        let chart = sample_chart();

        assert_eq!(chart.state(), ViewState::Overview);
        assert_eq!(chart.current(), chart.overview());
        assert_eq!(chart.current().len(), 4);
    }

    #[test]
    fn each_overview_wedge_expands_its_category() {
        for (index, category) in Category::ALL.into_iter().enumerate() {
            let mut chart = sample_chart();

            let outcome = chart.on_hover(HoverTarget::Wedge(index));

            assert_eq!(outcome, HoverOutcome::Expanded(category));
            assert_eq!(chart.state(), ViewState::Expanded(category));
            assert_eq!(chart.current(), &chart.budget().expansion(category));
        }
    }

    #[test]
    fn expand_then_background_restores_overview_exactly() {
        let mut chart = sample_chart();
        let original = chart.overview().clone();

        chart.on_hover(HoverTarget::Wedge(0));
        let outcome = chart.on_hover(HoverTarget::Background);

        assert_eq!(outcome, HoverOutcome::Restored);
        assert_eq!(chart.state(), ViewState::Overview);
        assert_eq!(chart.current(), &original);
        assert_eq!(chart.current().labels(), original.labels());
        assert_eq!(chart.current().values(), original.values());
    }

    #[test]
    fn hovering_inside_expansion_shows_tooltip_without_transition() {
        let mut chart = sample_chart();
        chart.on_hover(HoverTarget::Wedge(1));

        let outcome = chart.on_hover(HoverTarget::Wedge(0));

        assert_eq!(
            outcome,
            HoverOutcome::Tooltip(Tooltip {
                index: 0,
                label: "Rent".to_string(),
                value: dec!(1500),
            })
        );
        assert_eq!(chart.state(), ViewState::Expanded(Category::MortgageAndDebt));
    }

    #[test]
    fn expanded_wedge_index_never_switches_category() {
        let mut chart = sample_chart();
        chart.on_hover(HoverTarget::Wedge(2));

        // Index 0 is "Taxes" on the overview, but here it is a utility item.
        chart.on_hover(HoverTarget::Wedge(0));

        assert_eq!(chart.state(), ViewState::Expanded(Category::Utilities));
    }

    #[test]
    fn tooltip_text_shows_two_decimals() {
        let tooltip = Tooltip {
            index: 1,
            label: "Auto Payment".to_string(),
            value: dec!(350),
        };

        assert_eq!(tooltip.to_string(), "Auto Payment: $350.00");
    }

    #[test]
    fn background_on_overview_is_unchanged() {
        let mut chart = sample_chart();

        assert_eq!(chart.on_hover(HoverTarget::Background), HoverOutcome::Unchanged);
        assert_eq!(chart.state(), ViewState::Overview);
    }

    #[test]
    fn pointer_outside_chart_is_ignored() {
        let mut chart = sample_chart();
        chart.on_hover(HoverTarget::Wedge(3));

        assert_eq!(chart.on_hover(HoverTarget::Outside), HoverOutcome::Unchanged);
        assert_eq!(chart.state(), ViewState::Expanded(Category::FreeMoney));
    }

    #[test]
    fn out_of_range_wedges_are_unchanged() {
        let mut chart = sample_chart();

        assert_eq!(chart.on_hover(HoverTarget::Wedge(4)), HoverOutcome::Unchanged);

        chart.on_hover(HoverTarget::Wedge(3));
        assert_eq!(chart.on_hover(HoverTarget::Wedge(2)), HoverOutcome::Unchanged);
    }

    #[test]
    fn repeated_expansions_leave_overview_intact() {
        let mut chart = sample_chart();
        let original = chart.overview().clone();

        for index in [0, 1, 2, 3] {
            chart.on_hover(HoverTarget::Wedge(index));
            chart.on_hover(HoverTarget::Background);
        }

        assert_eq!(chart.overview(), &original);
        assert_eq!(chart.current(), &original);
    }
}
