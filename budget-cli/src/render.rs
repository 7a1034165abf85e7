//! Plain-text rendering of chart views and hover outcomes.

use std::str::FromStr;

use budget_core::{ChartViewState, HoverOutcome, HoverTarget, ViewState};
use thiserror::Error;

/// A `--hover` argument that is neither a wedge index, `none`, nor `outside`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hover event '{0}': expected a wedge index, 'none' or 'outside'")]
pub struct HoverArgError(String);

/// Command-line spelling of a [`HoverTarget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverArg(pub HoverTarget);

impl FromStr for HoverArg {
    type Err = HoverArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let target = match s.trim().to_ascii_lowercase().as_str() {
            "none" => HoverTarget::Background,
            "outside" => HoverTarget::Outside,
            other => other
                .parse::<usize>()
                .map(HoverTarget::Wedge)
                .map_err(|_| HoverArgError(s.to_string()))?,
        };
        Ok(Self(target))
    }
}

pub fn describe_target(target: HoverTarget) -> String {
    match target {
        HoverTarget::Wedge(index) => format!("wedge {index}"),
        HoverTarget::Background => "chart background".to_string(),
        HoverTarget::Outside => "outside the chart".to_string(),
    }
}

pub fn view_title(state: ViewState) -> String {
    match state {
        ViewState::Overview => "Budget Overview".to_string(),
        ViewState::Expanded(category) => format!("{category} Breakdown"),
    }
}

/// The chart's current wedges, one per line, under the view title.
pub fn render_view(chart: &ChartViewState) -> String {
    let mut out = format!("{}\n", view_title(chart.state()));
    for (index, line) in chart.current().to_string().lines().enumerate() {
        out.push_str(&format!("  [{index}] {line}\n"));
    }
    out
}

/// What the user would see after a hover event: the redrawn view, the
/// tooltip, or nothing.
pub fn render_outcome(
    chart: &ChartViewState,
    outcome: &HoverOutcome,
) -> Option<String> {
    match outcome {
        HoverOutcome::Expanded(_) | HoverOutcome::Restored => Some(render_view(chart)),
        HoverOutcome::Tooltip(tooltip) => Some(format!("  tooltip: {tooltip}\n")),
        HoverOutcome::Unchanged => None,
    }
}

#[cfg(test)]
mod tests {
    use budget_core::{Category, rebuild};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::default_budget;

    fn chart() -> ChartViewState {
        rebuild(default_budget().unwrap()).unwrap()
    }

    #[test]
    fn hover_arg_parses_each_spelling() {
        assert_eq!("2".parse::<HoverArg>(), Ok(HoverArg(HoverTarget::Wedge(2))));
        assert_eq!("none".parse::<HoverArg>(), Ok(HoverArg(HoverTarget::Background)));
        assert_eq!(" Outside ".parse::<HoverArg>(), Ok(HoverArg(HoverTarget::Outside)));
    }

    #[test]
    fn hover_arg_rejects_other_text() {
        assert!("-1".parse::<HoverArg>().is_err());
        assert!("wedge".parse::<HoverArg>().is_err());
    }

    #[test]
    fn overview_lists_every_category_with_share() {
        let text = render_view(&chart());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Budget Overview");
        assert!(lines[1].starts_with("  [0] Taxes"));
        assert!(lines[1].contains("$   2777.23"));
        assert!(lines[1].ends_with("38.6%"));
        assert!(lines[4].starts_with("  [3] Free Money"));
    }

    #[test]
    fn expansion_redraws_and_tooltip_is_one_line() {
        let mut chart = chart();

        let outcome = chart.on_hover(HoverTarget::Wedge(1));
        assert_eq!(outcome, HoverOutcome::Expanded(Category::MortgageAndDebt));
        let text = render_outcome(&chart, &outcome).unwrap();
        assert!(text.starts_with("Mortgage and Debt Breakdown\n  [0] Rent"));

        let outcome = chart.on_hover(HoverTarget::Wedge(0));
        assert_eq!(
            render_outcome(&chart, &outcome).as_deref(),
            Some("  tooltip: Rent: $1500.00\n")
        );
    }

    #[test]
    fn unchanged_renders_nothing() {
        let mut chart = chart();
        let outcome = chart.on_hover(HoverTarget::Outside);

        assert_eq!(render_outcome(&chart, &outcome), None);
    }
}
