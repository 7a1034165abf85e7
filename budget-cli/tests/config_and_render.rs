//! Loads budget files from disk and drives them through the hover renderer.

use std::path::{Path, PathBuf};

use budget_cli::{HoverArg, load_budget, render_outcome, render_view};
use budget_core::{BudgetSession, Category, HoverOutcome, ViewState};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("renter.toml")
}

fn hover(
    session: &mut BudgetSession,
    event: &str,
) -> HoverOutcome {
    let HoverArg(target) = event.parse().expect("valid hover event");
    session.hover(target)
}

#[test]
fn renter_file_loads_with_expected_totals() {
    let inputs = load_budget(&fixture_path()).expect("fixture should load");
    let session = BudgetSession::new(inputs).unwrap();
    let budget = session.chart().budget();

    // 1100 + 4047 + 3800.50
    assert_eq!(budget.income().federal_tax(), dec!(8947.50));
    assert_eq!(budget.income().state_tax(), dec!(2480));
    assert_eq!(budget.category_total(Category::MortgageAndDebt), dec!(1300));
    assert_eq!(budget.category_total(Category::Utilities), dec!(455));
}

#[test]
fn hover_tour_over_renter_budget() {
    let mut session = BudgetSession::new(load_budget(&fixture_path()).unwrap()).unwrap();

    assert_eq!(hover(&mut session, "outside"), HoverOutcome::Unchanged);
    assert_eq!(hover(&mut session, "none"), HoverOutcome::Unchanged);

    let outcome = hover(&mut session, "2");
    assert_eq!(outcome, HoverOutcome::Expanded(Category::Utilities));
    assert_eq!(session.chart().state(), ViewState::Expanded(Category::Utilities));
    let text = render_outcome(session.chart(), &outcome).unwrap();
    assert_eq!(text.lines().count(), 7);
    assert!(text.contains("[2] Cable"));

    let outcome = hover(&mut session, "2");
    assert_eq!(
        render_outcome(session.chart(), &outcome).as_deref(),
        Some("  tooltip: Cable: $55.00\n")
    );

    assert_eq!(hover(&mut session, "9"), HoverOutcome::Unchanged);

    let outcome = hover(&mut session, "none");
    assert_eq!(outcome, HoverOutcome::Restored);
    assert_eq!(
        render_outcome(session.chart(), &outcome),
        Some(render_view(session.chart()))
    );
    assert!(render_view(session.chart()).starts_with("Budget Overview\n"));
}
